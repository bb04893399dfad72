use crate::domain::money::Credits;
use crate::domain::rules::{COMBO_TARGET, Rules};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComboKind {
    Gold,
    Diamond,
}

impl ComboKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComboKind::Gold => "gold",
            ComboKind::Diamond => "diamond",
        }
    }
}

/// Mutable state of one play session.
///
/// Owned by a single engine and only ever written through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub balance: Credits,
    pub current_bet: u32,
    pub gold_combo: u8,
    pub diamond_combo: u8,
    /// Sum of all payouts.
    pub total_win: Credits,
    /// Largest single payout (running max).
    pub highest_win: Credits,
    pub spin_count: u64,
    pub is_spinning: bool,
}

impl SessionState {
    pub fn new(rules: &Rules) -> Self {
        Self {
            balance: rules.initial_balance,
            current_bet: rules.initial_bet,
            gold_combo: 0,
            diamond_combo: 0,
            total_win: Credits::ZERO,
            highest_win: Credits::ZERO,
            spin_count: 0,
            is_spinning: false,
        }
    }

    /// Takes the bet off the balance and counts the spin.
    pub fn debit_bet(&mut self) {
        self.balance -= Credits::from(self.current_bet);
        self.spin_count += 1;
    }

    /// Adds one symbol to a combo counter.
    ///
    /// Returns `true` when the combo completed; the counter is back at zero
    /// before this returns.
    pub fn collect(&mut self, combo: ComboKind) -> bool {
        let counter = match combo {
            ComboKind::Gold => &mut self.gold_combo,
            ComboKind::Diamond => &mut self.diamond_combo,
        };
        *counter += 1;
        if *counter >= COMBO_TARGET {
            *counter = 0;
            true
        } else {
            false
        }
    }

    /// Credits a positive payout to balance and statistics.
    pub fn credit(&mut self, payout: Credits) {
        if !payout.is_positive() {
            return;
        }
        self.balance += payout;
        self.total_win += payout;
        if payout > self.highest_win {
            self.highest_win = payout;
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            balance: self.balance,
            current_bet: self.current_bet,
            gold_combo: self.gold_combo,
            diamond_combo: self.diamond_combo,
            total_win: self.total_win,
            highest_win: self.highest_win,
            spin_count: self.spin_count,
        }
    }
}

/// Read-only view for display binding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub balance: Credits,
    pub current_bet: u32,
    pub gold_combo: u8,
    pub diamond_combo: u8,
    pub total_win: Credits,
    pub highest_win: Credits,
    pub spin_count: u64,
}
