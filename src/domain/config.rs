use crate::domain::rules::Rules;
use crate::domain::symbol::{SymbolDefinition, SymbolKind, SymbolTable};
use crate::error::ConfigError;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Raw, unvalidated game configuration as read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub symbols: Vec<SymbolDefinition>,
    #[serde(default)]
    pub rules: Rules,
}

/// Configuration after validation. Immutable for the life of an engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub table: SymbolTable,
    pub rules: Rules,
}

impl GameConfig {
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        self.rules.validate()?;
        let table = SymbolTable::new(self.symbols)?;
        Ok(ValidatedConfig {
            table,
            rules: self.rules,
        })
    }
}

impl Default for GameConfig {
    /// The stock angel/demon table.
    fn default() -> Self {
        use SymbolKind::*;
        let symbols = vec![
            SymbolDefinition::new("😇", Gold, 18),
            SymbolDefinition::new("😈", Diamond, 15),
            SymbolDefinition::new("💰", Money, 8).with_value(dec!(20)),
            SymbolDefinition::new("💵", Money, 6).with_value(dec!(50)),
            SymbolDefinition::new("💸", Money, 4).with_value(dec!(100)),
            SymbolDefinition::new("🏆", Money, 2).with_value(dec!(250)),
            SymbolDefinition::new("⚡", Multiplier, 5).with_value(dec!(0.3)),
            SymbolDefinition::new("✨", Multiplier, 4).with_value(dec!(0.6)),
            SymbolDefinition::new("⭐", Multiplier, 3).with_value(dec!(1.2)),
            SymbolDefinition::new("🌟", Multiplier, 2).with_value(dec!(2.3)),
            SymbolDefinition::new("❌", Empty, 33),
        ];
        Self {
            symbols,
            rules: Rules::default(),
        }
    }
}
