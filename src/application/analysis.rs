//! Long-run return of a configuration.
//!
//! Combo symbols pay their reward once every `COMBO_TARGET` draws, so each
//! draw contributes `reward / COMBO_TARGET` to the expectation.

use crate::domain::config::ValidatedConfig;
use crate::domain::money::Credits;
use crate::domain::rules::COMBO_TARGET;
use crate::domain::symbol::SymbolKind;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Expected payout of a single spin at `bet`.
pub fn expected_return(config: &ValidatedConfig, bet: u32) -> Credits {
    let rules = &config.rules;
    let combo_target = Decimal::from(COMBO_TARGET);

    let weighted: Decimal = config
        .table
        .iter()
        .map(|symbol| {
            let weight = Decimal::from(symbol.weight);
            let value = symbol.value.unwrap_or_default();
            match symbol.kind {
                SymbolKind::Gold => weight * rules.gold_reward.value() / combo_target,
                SymbolKind::Diamond => weight * rules.diamond_reward.value() / combo_target,
                SymbolKind::Money => weight * value,
                SymbolKind::Multiplier => weight * Credits::scaled_bet(bet, value).value(),
                SymbolKind::Empty => Decimal::ZERO,
            }
        })
        .sum();

    Credits::new(weighted / Decimal::from(config.table.total_weight()))
}

/// Expected payout as a fraction of the bet.
pub fn rtp(config: &ValidatedConfig, bet: u32) -> f64 {
    if bet == 0 {
        return 0.0;
    }
    (expected_return(config, bet).value() / Decimal::from(bet))
        .to_f64()
        .unwrap_or(0.0)
}
