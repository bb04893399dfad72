//! Adapters between the engine and the outside world: JSON configuration,
//! CSV play scripts and the CSV spin log.

pub mod csv;
pub mod json;
