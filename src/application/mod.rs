//! Application layer: the session engine and the operations built on it.
//!
//! `SessionEngine` is the single writer of session state. `SessionHandle`
//! shares one engine between callers and drops overlapping spins, and
//! `analysis` derives the theoretical return of a configuration while
//! `simulation` measures the observed one.

pub mod analysis;
pub mod engine;
pub mod handle;
pub mod simulation;
