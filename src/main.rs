use clap::{Parser, Subcommand};
use comboslot::application::analysis;
use comboslot::application::engine::SessionEngine;
use comboslot::application::simulation::{self, SimulationPlan, SimulationReport};
use comboslot::domain::config::GameConfig;
use comboslot::domain::outcome::SpinOutcome;
use comboslot::infrastructure::random::RngSource;
use comboslot::interfaces::csv::command_reader::{Action, CommandReader};
use comboslot::interfaces::csv::spin_writer::SpinLogWriter;
use comboslot::interfaces::json::config_loader::load_config;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tokio::task::JoinSet;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON game configuration. The stock angel/demon table is used otherwise.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for a reproducible symbol draw.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log every spin.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Play automated sessions and print one summary row per session.
    Simulate {
        #[arg(long, default_value_t = 1000)]
        spins: u64,

        /// Independent sessions, run concurrently.
        #[arg(long, default_value_t = 1)]
        sessions: usize,

        #[arg(long)]
        bet: Option<i64>,

        #[arg(long)]
        stop_on_game_over: bool,
    },
    /// Run a CSV play script (`action,amount`) and print the spin log.
    Play { script: PathBuf },
}

fn source_for(seed: Option<u64>, offset: u64) -> RngSource<rand::rngs::StdRng> {
    match seed {
        Some(seed) => RngSource::seeded(seed.wrapping_add(offset)),
        None => RngSource::from_entropy(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path).into_diagnostic()?,
        None => GameConfig::default(),
    };

    match cli.command {
        Mode::Simulate {
            spins,
            sessions,
            bet,
            stop_on_game_over,
        } => {
            let plan = SimulationPlan {
                spins,
                bet,
                stop_on_game_over,
            };
            simulate(config, cli.seed, sessions.max(1), plan).await
        }
        Mode::Play { script } => play(config, cli.seed, script),
    }
}

async fn simulate(
    config: GameConfig,
    seed: Option<u64>,
    sessions: usize,
    plan: SimulationPlan,
) -> Result<()> {
    let validated = config.clone().validate().into_diagnostic()?;
    let rules = &validated.rules;
    let requested = plan
        .bet
        .map_or(rules.initial_bet, |bet| rules.clamp_bet(bet, rules.initial_balance));
    info!(
        bet = requested,
        theoretical_rtp = analysis::rtp(&validated, requested),
        target_rtp = ?validated.rules.target_rtp,
        "simulation started"
    );

    // One engine per session; nothing is shared between them.
    let mut tasks = JoinSet::new();
    for session in 0..sessions {
        let mut engine =
            SessionEngine::configure(config.clone(), source_for(seed, session as u64))
                .into_diagnostic()?;
        tasks.spawn_blocking(move || simulation::run(session, &mut engine, &plan));
    }

    let mut reports: Vec<SimulationReport> = Vec::with_capacity(sessions);
    while let Some(report) = tasks.join_next().await {
        reports.push(report.into_diagnostic()?);
    }
    reports.sort_by_key(|report| report.session);

    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());
    for report in &reports {
        writer.serialize(report).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}

fn play(config: GameConfig, seed: Option<u64>, script: PathBuf) -> Result<()> {
    let mut engine = SessionEngine::configure(config, source_for(seed, 0)).into_diagnostic()?;

    let file = File::open(script).into_diagnostic()?;
    let reader = CommandReader::new(file);

    let stdout = io::stdout();
    let mut log = SpinLogWriter::new(stdout.lock());

    for command in reader.commands() {
        let command = match command {
            Ok(command) => command,
            Err(e) => {
                warn!("skipping malformed command: {}", e);
                continue;
            }
        };

        match command.action {
            Action::Bet => {
                engine.set_bet(command.amount.unwrap_or_default());
            }
            Action::Adjust => {
                engine.adjust_bet(command.amount.unwrap_or_default());
            }
            Action::Reset => engine.reset_session(),
            Action::Spin => match engine.spin() {
                SpinOutcome::Completed(result) => {
                    log.write_spin(engine.snapshot().spin_count, &result)
                        .into_diagnostic()?;
                    if result.is_game_over {
                        info!("game over, balance below minimum bet");
                    }
                }
                SpinOutcome::InsufficientFunds { balance, bet } => {
                    warn!(%balance, bet, "insufficient funds");
                }
                SpinOutcome::Ignored => {}
            },
        }
    }
    log.flush().into_diagnostic()?;

    let snapshot = engine.snapshot();
    info!(
        balance = %snapshot.balance,
        total_win = %snapshot.total_win,
        highest_win = %snapshot.highest_win,
        spins = snapshot.spin_count,
        "session finished"
    );
    Ok(())
}
