use crate::application::engine::SessionEngine;
use crate::domain::outcome::SpinOutcome;
use crate::domain::session::SessionSnapshot;
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use tracing::debug;

/// A cloneable handle to one engine, for hosts that trigger spins from
/// several places (UI callbacks, tasks).
///
/// A spin requested while the engine is busy is dropped with
/// [`SpinOutcome::Ignored`] rather than queued.
#[derive(Clone)]
pub struct SessionHandle {
    engine: Arc<Mutex<SessionEngine>>,
}

impl SessionHandle {
    pub fn new(engine: SessionEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn spin(&self) -> SpinOutcome {
        match self.engine.try_lock() {
            Ok(mut engine) => engine.spin(),
            Err(TryLockError::WouldBlock) => {
                debug!("engine busy, spin ignored");
                SpinOutcome::Ignored
            }
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().spin(),
        }
    }

    pub fn set_bet(&self, amount: i64) -> u32 {
        self.lock().set_bet(amount)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    pub fn is_game_over(&self) -> bool {
        self.lock().is_game_over()
    }

    pub fn reset_session(&self) {
        self.lock().reset_session()
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with_engine<T>(&self, f: impl FnOnce(&mut SessionEngine) -> T) -> T {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, SessionEngine> {
        self.engine
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
