use crate::application::engine::SessionEngine;
use crate::domain::money::Credits;
use crate::domain::outcome::SpinOutcome;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::{debug, info};

/// How an automated session is played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationPlan {
    pub spins: u64,
    /// Bet requested before every spin; the current bet when `None`.
    pub bet: Option<i64>,
    /// End the run at game over instead of resetting the session.
    pub stop_on_game_over: bool,
}

/// Totals of one automated run, across any resets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub session: usize,
    pub spins: u64,
    pub resets: u64,
    pub combos: u64,
    pub wagered: Credits,
    pub paid: Credits,
    pub balance: Credits,
    pub highest_win: Credits,
    pub observed_rtp: f64,
}

/// Plays `plan` on `engine`, offering a fresh session whenever the current one
/// is over.
pub fn run(session: usize, engine: &mut SessionEngine, plan: &SimulationPlan) -> SimulationReport {
    let mut spins = 0;
    let mut resets = 0;
    let mut combos = 0;
    let mut wagered = Credits::ZERO;
    let mut paid = Credits::ZERO;
    let mut highest_win = Credits::ZERO;

    while spins < plan.spins {
        if engine.is_game_over() {
            if plan.stop_on_game_over {
                info!(session, spins, "session over");
                break;
            }
            engine.reset_session();
            resets += 1;
            if engine.is_game_over() {
                info!(session, spins, "fresh session cannot cover the minimum bet");
                break;
            }
        }

        let requested = plan
            .bet
            .unwrap_or_else(|| i64::from(engine.snapshot().current_bet));
        engine.set_bet(requested);

        match engine.spin() {
            SpinOutcome::Completed(result) => {
                spins += 1;
                wagered += Credits::from(result.bet);
                paid += result.payout;
                if result.combo_completed.is_some() {
                    combos += 1;
                }
                if result.payout > highest_win {
                    highest_win = result.payout;
                }
            }
            outcome => {
                debug!(session, ?outcome, "spin not played");
                break;
            }
        }
    }

    let snapshot = engine.snapshot();
    let observed_rtp = if wagered.value() > Decimal::ZERO {
        (paid.value() / wagered.value()).to_f64().unwrap_or(0.0)
    } else {
        0.0
    };
    info!(
        session,
        spins,
        resets,
        balance = %snapshot.balance,
        observed_rtp,
        "session finished"
    );

    SimulationReport {
        session,
        spins,
        resets,
        combos,
        wagered,
        paid,
        balance: snapshot.balance,
        highest_win,
        observed_rtp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::GameConfig;
    use crate::domain::rules::Rules;
    use crate::infrastructure::random::{RngSource, ScriptedSource};

    fn plan(spins: u64) -> SimulationPlan {
        SimulationPlan {
            spins,
            bet: None,
            stop_on_game_over: true,
        }
    }

    #[test]
    fn test_losing_run_stops_at_game_over() {
        let mut engine = SessionEngine::configure(GameConfig::default(), || 0.99).unwrap();
        let report = run(0, &mut engine, &plan(1000));
        // 1000 / 25 = 40 losing spins leave nothing.
        assert_eq!(report.spins, 40);
        assert_eq!(report.balance, Credits::ZERO);
        assert_eq!(report.wagered, Credits::from(1000));
        assert_eq!(report.resets, 0);
    }

    #[test]
    fn test_losing_run_resets_when_allowed() {
        let mut engine = SessionEngine::configure(GameConfig::default(), || 0.99).unwrap();
        let report = run(
            0,
            &mut engine,
            &SimulationPlan {
                stop_on_game_over: false,
                ..plan(100)
            },
        );
        assert_eq!(report.spins, 100);
        assert_eq!(report.resets, 2);
    }

    #[test]
    fn test_session_over_from_the_start_ends_the_run() {
        let config = GameConfig {
            rules: Rules {
                initial_balance: Credits::from(5),
                initial_bet: 10,
                ..Rules::default()
            },
            ..GameConfig::default()
        };
        let mut engine = SessionEngine::configure(config, || 0.5).unwrap();
        let report = run(
            0,
            &mut engine,
            &SimulationPlan {
                stop_on_game_over: false,
                ..plan(3)
            },
        );
        assert_eq!(report.spins, 0);
        assert_eq!(report.resets, 1);
        assert_eq!(report.wagered, Credits::ZERO);
        assert_eq!(report.balance, Credits::from(5));
    }

    #[test]
    fn test_requested_bet_is_applied() {
        let config = GameConfig::default();
        let table = config.clone().validate().unwrap().table;
        let source = ScriptedSource::selecting(&table, &["💰"]).unwrap();
        let mut engine = SessionEngine::configure(config, source).unwrap();
        let report = run(
            0,
            &mut engine,
            &SimulationPlan {
                bet: Some(10),
                ..plan(5)
            },
        );
        assert_eq!(report.wagered, Credits::from(50));
        assert_eq!(report.paid, Credits::from(100));
        assert_eq!(report.balance, Credits::from(1050));
        assert!((report.observed_rtp - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let first = {
            let mut engine =
                SessionEngine::configure(GameConfig::default(), RngSource::seeded(9)).unwrap();
            run(0, &mut engine, &plan(500))
        };
        let second = {
            let mut engine =
                SessionEngine::configure(GameConfig::default(), RngSource::seeded(9)).unwrap();
            run(0, &mut engine, &plan(500))
        };
        assert_eq!(first, second);
    }
}
