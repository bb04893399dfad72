use crate::domain::money::Credits;
use crate::error::ConfigError;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Number of collected combo symbols that pays the combo reward.
pub const COMBO_TARGET: u8 = 3;

/// Betting bounds and reward amounts for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub min_bet: u32,
    pub max_bet: u32,
    /// Granularity of the bet; `0` accepts any whole amount.
    #[serde(default)]
    pub bet_step: u32,
    pub gold_reward: Credits,
    pub diamond_reward: Credits,
    pub initial_balance: Credits,
    pub initial_bet: u32,
    /// Informational return-to-player target, reported by analysis only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rtp: Option<f64>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_bet: 10,
            max_bet: 500,
            bet_step: 5,
            gold_reward: Credits::new(dec!(500)),
            diamond_reward: Credits::new(dec!(750)),
            initial_balance: Credits::new(dec!(1000)),
            initial_bet: 25,
            target_rtp: Some(0.70),
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_bet == 0 {
            return Err(ConfigError::ZeroMinBet);
        }
        if self.min_bet > self.max_bet {
            return Err(ConfigError::BetRange {
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        if self.initial_bet < self.min_bet || self.initial_bet > self.max_bet {
            return Err(ConfigError::InitialBet {
                bet: self.initial_bet,
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        if self.initial_balance.is_negative() {
            return Err(ConfigError::Negative("initial balance"));
        }
        if self.gold_reward.is_negative() {
            return Err(ConfigError::Negative("gold reward"));
        }
        if self.diamond_reward.is_negative() {
            return Err(ConfigError::Negative("diamond reward"));
        }
        Ok(())
    }

    /// Clamps `amount` into `[min_bet, min(max_bet, balance)]`, snapping to the
    /// nearest step when one is configured.
    ///
    /// When the balance cannot cover `min_bet` the bet rests at `min_bet`.
    pub fn clamp_bet(&self, amount: i64, balance: Credits) -> u32 {
        let upper = self.max_bet.min(balance.whole());
        if upper < self.min_bet {
            return self.min_bet;
        }

        let clamped = amount.clamp(i64::from(self.min_bet), i64::from(upper)) as u32;
        if self.bet_step == 0 {
            return clamped;
        }

        let (min, step, upper) = (
            u64::from(self.min_bet),
            u64::from(self.bet_step),
            u64::from(upper),
        );
        let offset = u64::from(clamped) - min;
        let mut snapped = min + (offset + step / 2) / step * step;
        while snapped > upper && snapped >= min + step {
            snapped -= step;
        }
        snapped.min(upper) as u32
    }

    /// Upper bound a bet may currently reach.
    pub fn bet_ceiling(&self, balance: Credits) -> u32 {
        self.max_bet.min(balance.whole())
    }
}
