use comboslot::application::engine::SessionEngine;
use comboslot::application::handle::SessionHandle;
use comboslot::application::simulation::{self, SimulationPlan};
use comboslot::domain::config::GameConfig;
use comboslot::domain::outcome::SpinOutcome;
use comboslot::infrastructure::random::RngSource;

fn plan() -> SimulationPlan {
    SimulationPlan {
        spins: 300,
        bet: Some(50),
        stop_on_game_over: false,
    }
}

#[tokio::test]
async fn test_sessions_run_independently() {
    let mut tasks = Vec::new();
    for session in 0..4 {
        let mut engine =
            SessionEngine::configure(GameConfig::default(), RngSource::seeded(100 + session as u64))
                .unwrap();
        tasks.push(tokio::task::spawn_blocking(move || {
            simulation::run(session, &mut engine, &plan())
        }));
    }

    for (session, task) in tasks.into_iter().enumerate() {
        let concurrent = task.await.unwrap();
        let mut engine =
            SessionEngine::configure(GameConfig::default(), RngSource::seeded(100 + session as u64))
                .unwrap();
        let sequential = simulation::run(session, &mut engine, &plan());
        assert_eq!(concurrent, sequential);
    }
}

#[tokio::test]
async fn test_shared_handle_across_tasks() {
    let engine = SessionEngine::configure(GameConfig::default(), RngSource::seeded(5)).unwrap();
    let handle = SessionHandle::new(engine);
    handle.set_bet(10);

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let handle = handle.clone();
        tasks.push(tokio::spawn(async move {
            let mut completed = 0u64;
            for _ in 0..10 {
                if let SpinOutcome::Completed(_) = handle.spin() {
                    completed += 1;
                }
                tokio::task::yield_now().await;
            }
            completed
        }));
    }

    let mut completed = 0;
    for task in tasks {
        completed += task.await.unwrap();
    }

    // Overlapping spins are dropped, never double-counted.
    assert_eq!(handle.snapshot().spin_count, completed);
    assert!(completed <= 80);
}
