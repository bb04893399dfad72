use thiserror::Error;

/// Rejection of a symbol table or rule set at `configure` time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("symbol table is empty")]
    EmptyTable,
    #[error("duplicate symbol id '{0}'")]
    DuplicateSymbol(String),
    #[error("symbol '{0}' has zero weight")]
    ZeroWeight(String),
    #[error("symbol '{0}' needs a positive value")]
    MissingValue(String),
    #[error("symbol table has no empty fallback symbol")]
    NoEmptySymbol,
    #[error("minimum bet must be positive")]
    ZeroMinBet,
    #[error("minimum bet {min} exceeds maximum bet {max}")]
    BetRange { min: u32, max: u32 },
    #[error("initial bet {bet} is outside [{min}, {max}]")]
    InitialBet { bet: u32, min: u32, max: u32 },
    #[error("{0} must not be negative")]
    Negative(&'static str),
}

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Script error: {0}")]
    ScriptError(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
