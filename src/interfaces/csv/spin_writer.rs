use crate::domain::money::Credits;
use crate::domain::outcome::SpinResult;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One line of the spin log.
#[derive(Debug, Serialize)]
struct SpinRecord<'a> {
    spin: u64,
    symbol: &'a str,
    kind: &'static str,
    bet: u32,
    payout: Credits,
    combo: &'static str,
    balance: Credits,
    big_win: bool,
}

/// Writes completed spins as CSV rows.
pub struct SpinLogWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SpinLogWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Appends one row; `spin` is the session's spin counter after the spin.
    pub fn write_spin(&mut self, spin: u64, result: &SpinResult) -> Result<()> {
        self.writer.serialize(SpinRecord {
            spin,
            symbol: &result.symbol,
            kind: result.kind.as_str(),
            bet: result.bet,
            payout: result.payout,
            combo: result.combo_completed.map_or("", |combo| combo.as_str()),
            balance: result.balance_after,
            big_win: result.big_win,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
