use crate::domain::ports::RandomSource;
use crate::domain::symbol::SymbolTable;
use crate::error::{SlotError, Result};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Adapts any `rand` generator to a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source: the same seed replays the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore + Send> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed list of unit values, wrapping around at the end.
///
/// Used to force specific symbols in tests and replays.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    units: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(units: Vec<f64>) -> Self {
        Self { units, cursor: 0 }
    }

    /// Builds a source that draws `ids` from `table` in order.
    pub fn selecting(table: &SymbolTable, ids: &[&str]) -> Result<Self> {
        let units = ids
            .iter()
            .map(|id| {
                table
                    .unit_for(id)
                    .ok_or_else(|| SlotError::ScriptError(format!("unknown symbol '{id}'")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(units))
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let unit = self.units[self.cursor % self.units.len()];
        self.cursor += 1;
        unit
    }
}
