use crate::domain::config::{GameConfig, ValidatedConfig};
use crate::domain::money::Credits;
use crate::domain::outcome::{Celebration, SpinOutcome, SpinResult};
use crate::domain::ports::{RandomSource, RandomSourceBox};
use crate::domain::rules::Rules;
use crate::domain::session::{ComboKind, SessionSnapshot, SessionState};
use crate::domain::symbol::{SymbolKind, SymbolTable};
use crate::error::ConfigError;
use tracing::{debug, info, warn};

/// The payout and session engine.
///
/// `SessionEngine` owns one [`SessionState`] and the immutable configuration it
/// was built with. Every mutation goes through [`SessionEngine::set_bet`],
/// [`SessionEngine::adjust_bet`], [`SessionEngine::spin`] or
/// [`SessionEngine::reset_session`]; a spin completes synchronously and any
/// presentation delay belongs to the caller.
pub struct SessionEngine {
    config: ValidatedConfig,
    state: SessionState,
    rng: RandomSourceBox,
}

impl SessionEngine {
    /// Validates `config` and starts a fresh session.
    ///
    /// # Arguments
    ///
    /// * `config` - Symbol table and rules.
    /// * `rng` - Source of unit values for the symbol draw.
    pub fn configure(
        config: GameConfig,
        rng: impl RandomSource + 'static,
    ) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let state = SessionState::new(&config.rules);
        info!(
            symbols = config.table.len(),
            total_weight = config.table.total_weight(),
            balance = %state.balance,
            "session configured"
        );
        Ok(Self {
            config,
            state,
            rng: Box::new(rng),
        })
    }

    pub fn rules(&self) -> &Rules {
        &self.config.rules
    }

    pub fn table(&self) -> &SymbolTable {
        &self.config.table
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning
    }

    /// Clamps `amount` to a valid bet and makes it current.
    ///
    /// Returns the bet actually in effect; callers must not assume the
    /// requested value was honored.
    pub fn set_bet(&mut self, amount: i64) -> u32 {
        let bet = self.config.rules.clamp_bet(amount, self.state.balance);
        if i64::from(bet) != amount {
            debug!(requested = amount, bet, "bet clamped");
        }
        self.state.current_bet = bet;
        bet
    }

    /// Moves the bet by `delta` if the result is still affordable and in range.
    ///
    /// Out-of-range adjustments leave the bet unchanged.
    pub fn adjust_bet(&mut self, delta: i64) -> u32 {
        let rules = &self.config.rules;
        let ceiling = rules.bet_ceiling(self.state.balance);
        let candidate = i64::from(self.state.current_bet)
            .checked_add(delta)
            .filter(|bet| (i64::from(rules.min_bet)..=i64::from(ceiling)).contains(bet));
        if let Some(bet) = candidate {
            self.state.current_bet = bet as u32;
        } else {
            debug!(delta, bet = self.state.current_bet, "bet adjustment rejected");
        }
        self.state.current_bet
    }

    /// Whether a preset bet can currently be offered.
    pub fn quick_bet_available(&self, amount: u32) -> bool {
        Credits::from(amount) <= self.state.balance
    }

    /// Plays one round.
    ///
    /// Debits the bet before drawing, so a losing spin costs exactly the bet.
    /// A balance that cannot cover the bet yields
    /// [`SpinOutcome::InsufficientFunds`] and changes nothing.
    pub fn spin(&mut self) -> SpinOutcome {
        if self.state.is_spinning {
            warn!("spin requested while another spin is in flight");
            return SpinOutcome::Ignored;
        }

        let bet = self.state.current_bet;
        if self.state.balance < Credits::from(bet) {
            debug!(balance = %self.state.balance, bet, "insufficient funds");
            return SpinOutcome::InsufficientFunds {
                balance: self.state.balance,
                bet,
            };
        }

        self.state.is_spinning = true;
        self.state.debit_bet();

        let unit = self.rng.next_unit();
        let symbol = self.config.table.draw(unit).clone();

        let mut combo_completed = None;
        let payout = match symbol.kind {
            SymbolKind::Gold => self.collect(ComboKind::Gold, &mut combo_completed),
            SymbolKind::Diamond => self.collect(ComboKind::Diamond, &mut combo_completed),
            SymbolKind::Money => Credits::new(symbol.value.unwrap_or_default()),
            SymbolKind::Multiplier => {
                Credits::scaled_bet(bet, symbol.value.unwrap_or_default())
            }
            SymbolKind::Empty => Credits::ZERO,
        };

        self.state.credit(payout);

        let big_win =
            combo_completed.is_some() || payout >= Credits::from(bet.saturating_mul(2));
        let celebration = Celebration::classify(payout, bet, combo_completed);
        self.state.is_spinning = false;

        let result = SpinResult {
            symbol: symbol.id,
            kind: symbol.kind,
            bet,
            payout,
            combo_completed,
            gold_combo: self.state.gold_combo,
            diamond_combo: self.state.diamond_combo,
            balance_after: self.state.balance,
            big_win,
            celebration,
            is_game_over: self.is_game_over(),
        };
        debug!(
            spin = self.state.spin_count,
            symbol = %result.symbol,
            payout = %result.payout,
            balance = %result.balance_after,
            "spin resolved"
        );
        SpinOutcome::Completed(result)
    }

    fn collect(&mut self, combo: ComboKind, completed: &mut Option<ComboKind>) -> Credits {
        if !self.state.collect(combo) {
            return Credits::ZERO;
        }
        *completed = Some(combo);
        info!(combo = combo.as_str(), "combo completed");
        match combo {
            ComboKind::Gold => self.config.rules.gold_reward,
            ComboKind::Diamond => self.config.rules.diamond_reward,
        }
    }

    /// True once the balance cannot cover the minimum bet.
    pub fn is_game_over(&self) -> bool {
        self.state.balance < Credits::from(self.config.rules.min_bet)
    }

    /// Replaces the session with the configured defaults.
    pub fn reset_session(&mut self) {
        if self.state.is_spinning {
            warn!("reset requested while a spin is in flight");
            return;
        }
        self.state = SessionState::new(&self.config.rules);
        info!(balance = %self.state.balance, "session reset");
    }
}
