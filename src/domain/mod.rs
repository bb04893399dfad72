//! Domain layer: money, symbols, rules and session state.
//!
//! Nothing here draws randomness or performs I/O; the random source is a
//! port implemented in `infrastructure`.

pub mod config;
pub mod money;
pub mod outcome;
pub mod ports;
pub mod rules;
pub mod session;
pub mod symbol;
