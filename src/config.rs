//! Command-line settings for the terminal runner.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::{DEFAULT_GRID_SIZE, DEFAULT_HISTORY_CAPACITY};

/// Settings handed to the game controller and the score store at startup.
///
/// Zero sizes are accepted here and rejected by the controller's constructor,
/// so programmatic misconfiguration surfaces as `GameError::InvalidConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub grid_size: usize,
    pub history_capacity: usize,
    pub scores_path: PathBuf,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            scores_path: PathBuf::from("scores.json"),
        }
    }
}

/// Parse `[grid_size] [history_capacity] [--scores <path>]`.
pub fn parse_args(args: &[String]) -> Result<GameSettings> {
    let mut settings = GameSettings::default();
    let mut positional = 0usize;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--scores" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --scores"))?;
                settings.scores_path = PathBuf::from(v);
            }
            other => {
                let value: usize = other
                    .parse()
                    .map_err(|_| anyhow!("invalid argument: {}", other))?;
                match positional {
                    0 => settings.grid_size = value,
                    1 => settings.history_capacity = value,
                    _ => return Err(anyhow!("unexpected argument: {}", other)),
                }
                positional += 1;
            }
        }
        i += 1;
    }

    Ok(settings)
}
