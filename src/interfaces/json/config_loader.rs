use crate::domain::config::GameConfig;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parses a [`GameConfig`] from JSON. Validation happens in `configure`.
pub fn read_config<R: Read>(source: R) -> Result<GameConfig> {
    Ok(serde_json::from_reader(source)?)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig> {
    let file = File::open(path)?;
    read_config(BufReader::new(file))
}
