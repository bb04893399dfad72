use crate::error::{Result, SlotError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Bet,
    Adjust,
    Spin,
    Reset,
}

/// One row of a play script.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub action: Action,
    pub amount: Option<i64>,
}

/// Reads play-script commands from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// so `spin` rows may omit the amount column entirely.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes commands, one `Result` per row.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize::<Command>()
            .map(|result| result.map_err(SlotError::from).and_then(Command::checked))
    }
}

impl Command {
    /// Bet-changing actions need an amount.
    fn checked(self) -> Result<Self> {
        match (self.action, self.amount) {
            (Action::Bet | Action::Adjust, None) => Err(SlotError::ScriptError(format!(
                "{:?} requires an amount",
                self.action
            ))),
            _ => Ok(self),
        }
    }
}
