use crate::error::ConfigError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Gold,
    Diamond,
    Money,
    Multiplier,
    Empty,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Gold => "gold",
            SymbolKind::Diamond => "diamond",
            SymbolKind::Money => "money",
            SymbolKind::Multiplier => "multiplier",
            SymbolKind::Empty => "empty",
        }
    }

    /// Whether the kind pays through its own `value`.
    pub fn needs_value(&self) -> bool {
        matches!(self, SymbolKind::Money | SymbolKind::Multiplier)
    }
}

/// One weighted outcome of a draw.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SymbolDefinition {
    pub id: String,
    pub kind: SymbolKind,
    pub weight: u32,
    /// Flat payout for `money`, bet factor for `multiplier`. Ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

impl SymbolDefinition {
    pub fn new(id: impl Into<String>, kind: SymbolKind, weight: u32) -> Self {
        Self {
            id: id.into(),
            kind,
            weight,
            value: None,
        }
    }

    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }
}

/// A validated symbol table.
///
/// Keeps the insertion order of its definitions: the weighted walk in
/// [`SymbolTable::draw`] depends on it, so a seeded source replays the same
/// symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    symbols: Vec<SymbolDefinition>,
    total_weight: u64,
    /// Index of the first `empty` symbol; always in bounds.
    fallback: usize,
}

impl SymbolTable {
    pub fn new(symbols: Vec<SymbolDefinition>) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        let mut seen = HashSet::new();
        for symbol in &symbols {
            if !seen.insert(symbol.id.as_str()) {
                return Err(ConfigError::DuplicateSymbol(symbol.id.clone()));
            }
            if symbol.weight == 0 {
                return Err(ConfigError::ZeroWeight(symbol.id.clone()));
            }
            if symbol.kind.needs_value()
                && !symbol.value.is_some_and(|value| value > Decimal::ZERO)
            {
                return Err(ConfigError::MissingValue(symbol.id.clone()));
            }
        }

        let fallback = symbols
            .iter()
            .position(|s| s.kind == SymbolKind::Empty)
            .ok_or(ConfigError::NoEmptySymbol)?;

        let total_weight = symbols.iter().map(|s| u64::from(s.weight)).sum();
        Ok(Self {
            symbols,
            total_weight,
            fallback,
        })
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolDefinition> {
        self.symbols.iter()
    }

    pub fn get(&self, id: &str) -> Option<&SymbolDefinition> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// Probability mass of a single definition.
    pub fn probability(&self, symbol: &SymbolDefinition) -> f64 {
        symbol.weight as f64 / self.total_weight as f64
    }

    /// Maps a unit value in `[0, 1)` to a symbol.
    ///
    /// `r = floor(unit * total_weight)`; returns the first symbol whose
    /// cumulative weight exceeds `r`. Out-of-range units are clamped.
    pub fn draw(&self, unit: f64) -> &SymbolDefinition {
        let unit = if unit.is_finite() { unit.max(0.0) } else { 0.0 };
        let r = ((unit * self.total_weight as f64) as u64).min(self.total_weight - 1);

        let mut cumulative = 0u64;
        for symbol in &self.symbols {
            cumulative += u64::from(symbol.weight);
            if r < cumulative {
                return symbol;
            }
        }

        // Weights sum to `total_weight` and `r < total_weight`, so the walk
        // always returns above.
        &self.symbols[self.fallback]
    }

    /// A unit value that [`SymbolTable::draw`] maps to `id`.
    pub fn unit_for(&self, id: &str) -> Option<f64> {
        let mut cumulative = 0u64;
        for symbol in &self.symbols {
            if symbol.id == id {
                return Some((cumulative as f64 + 0.5) / self.total_weight as f64);
            }
            cumulative += u64::from(symbol.weight);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn two_symbols() -> SymbolTable {
        SymbolTable::new(vec![
            SymbolDefinition::new("A", SymbolKind::Empty, 1),
            SymbolDefinition::new("B", SymbolKind::Money, 3).with_value(dec!(10)),
        ])
        .unwrap()
    }

    #[test]
    fn test_total_weight() {
        assert_eq!(two_symbols().total_weight(), 4);
    }

    #[test]
    fn test_draw_walks_in_insertion_order() {
        let table = two_symbols();
        assert_eq!(table.draw(0.0).id, "A");
        assert_eq!(table.draw(0.2499).id, "A");
        assert_eq!(table.draw(0.25).id, "B");
        assert_eq!(table.draw(0.9999).id, "B");
    }

    #[test]
    fn test_draw_clamps_out_of_range_units() {
        let table = two_symbols();
        assert_eq!(table.draw(1.0).id, "B");
        assert_eq!(table.draw(-0.5).id, "A");
        assert_eq!(table.draw(f64::NAN).id, "A");
    }

    #[test]
    fn test_unit_for_inverts_draw() {
        let table = two_symbols();
        for id in ["A", "B"] {
            let unit = table.unit_for(id).unwrap();
            assert_eq!(table.draw(unit).id, id);
        }
        assert!(table.unit_for("missing").is_none());
    }

    #[test]
    fn test_fallback_points_at_first_empty_symbol() {
        let table = SymbolTable::new(vec![
            SymbolDefinition::new("g", SymbolKind::Gold, 2),
            SymbolDefinition::new("x", SymbolKind::Empty, 1),
            SymbolDefinition::new("y", SymbolKind::Empty, 1),
        ])
        .unwrap();
        assert_eq!(table.fallback, 1);
        assert_eq!(table.symbols[table.fallback].id, "x");
    }

    #[test]
    fn test_rejects_empty_table() {
        assert_eq!(SymbolTable::new(vec![]), Err(ConfigError::EmptyTable));
    }

    #[test]
    fn test_rejects_zero_weight() {
        let result = SymbolTable::new(vec![SymbolDefinition::new("x", SymbolKind::Empty, 0)]);
        assert_eq!(result, Err(ConfigError::ZeroWeight("x".to_string())));
    }

    #[test]
    fn test_rejects_missing_fallback() {
        let result = SymbolTable::new(vec![SymbolDefinition::new("g", SymbolKind::Gold, 1)]);
        assert_eq!(result, Err(ConfigError::NoEmptySymbol));
    }

    #[test]
    fn test_rejects_valueless_multiplier() {
        let result = SymbolTable::new(vec![
            SymbolDefinition::new("m", SymbolKind::Multiplier, 1),
            SymbolDefinition::new("x", SymbolKind::Empty, 1),
        ]);
        assert_eq!(result, Err(ConfigError::MissingValue("m".to_string())));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = SymbolTable::new(vec![
            SymbolDefinition::new("x", SymbolKind::Empty, 1),
            SymbolDefinition::new("x", SymbolKind::Empty, 2),
        ]);
        assert_eq!(result, Err(ConfigError::DuplicateSymbol("x".to_string())));
    }

    #[test]
    fn test_value_is_ignored_for_combo_kinds() {
        let table = SymbolTable::new(vec![
            SymbolDefinition::new("g", SymbolKind::Gold, 1).with_value(dec!(-3)),
            SymbolDefinition::new("x", SymbolKind::Empty, 1),
        ]);
        assert!(table.is_ok());
    }

    #[test]
    fn test_definition_deserialization() {
        let json = r#"{"id": "⚡", "kind": "multiplier", "weight": 5, "value": 0.3}"#;
        let symbol: SymbolDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(symbol.kind, SymbolKind::Multiplier);
        assert_eq!(symbol.value, Some(dec!(0.3)));
    }
}
