#![allow(dead_code)]

use comboslot::application::engine::SessionEngine;
use comboslot::domain::config::GameConfig;
use comboslot::infrastructure::random::ScriptedSource;
use std::io::Write;
use tempfile::NamedTempFile;

/// Engine on the stock table that draws `ids` in order, wrapping around.
pub fn engine_drawing(config: GameConfig, ids: &[&str]) -> SessionEngine {
    let table = config.clone().validate().expect("valid config").table;
    let source = ScriptedSource::selecting(&table, ids).expect("known symbols");
    SessionEngine::configure(config, source).expect("valid config")
}

/// A config whose only symbol never pays, so every spin loses the bet.
pub fn losing_config_json(initial_balance: u32) -> String {
    format!(
        r#"{{
            "symbols": [{{"id": "miss", "kind": "empty", "weight": 1}}],
            "rules": {{
                "min_bet": 10,
                "max_bet": 500,
                "bet_step": 5,
                "gold_reward": 500,
                "diamond_reward": 750,
                "initial_balance": {initial_balance},
                "initial_bet": 25
            }}
        }}"#
    )
}

pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{contents}").expect("write temp file");
    file
}
