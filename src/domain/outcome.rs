use crate::domain::money::Credits;
use crate::domain::session::ComboKind;
use crate::domain::symbol::SymbolKind;
use serde::{Deserialize, Serialize};

/// How loudly the presentation layer should celebrate a spin.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Celebration {
    None,
    /// Payout of at least twice the bet.
    Big,
    /// Payout of at least five times the bet.
    Huge,
    Combo(ComboKind),
}

impl Celebration {
    pub fn classify(payout: Credits, bet: u32, combo: Option<ComboKind>) -> Self {
        if let Some(combo) = combo {
            return Celebration::Combo(combo);
        }
        if payout >= Credits::from(bet.saturating_mul(5)) {
            Celebration::Huge
        } else if payout >= Credits::from(bet.saturating_mul(2)) {
            Celebration::Big
        } else {
            Celebration::None
        }
    }
}

/// Result of one completed spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    pub symbol: String,
    pub kind: SymbolKind,
    pub bet: u32,
    pub payout: Credits,
    pub combo_completed: Option<ComboKind>,
    pub gold_combo: u8,
    pub diamond_combo: u8,
    pub balance_after: Credits,
    pub big_win: bool,
    pub celebration: Celebration,
    pub is_game_over: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinOutcome {
    Completed(SpinResult),
    /// The balance does not cover the bet; nothing changed.
    InsufficientFunds { balance: Credits, bet: u32 },
    /// Another spin was in flight; nothing changed.
    Ignored,
}

impl SpinOutcome {
    pub fn result(&self) -> Option<&SpinResult> {
        match self {
            SpinOutcome::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn into_result(self) -> Option<SpinResult> {
        match self {
            SpinOutcome::Completed(result) => Some(result),
            _ => None,
        }
    }
}
