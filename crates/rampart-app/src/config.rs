//! Application configuration: an optional JSON file plus command-line
//! overrides.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rampart_sim::SimConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the binary needs to start a session. Missing fields fall
/// back to their defaults, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Simulated seconds between status lines of the log renderer.
    pub status_interval: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            status_interval: 5.0,
        }
    }
}

/// Command-line overrides applied on top of the file.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Simulation speed multiplier
    #[arg(long)]
    pub time_scale: Option<f64>,
    /// Map width in tiles
    #[arg(long)]
    pub cols: Option<i32>,
    /// Map height in tiles
    #[arg(long)]
    pub rows: Option<i32>,
    /// Starting gold
    #[arg(long)]
    pub gold: Option<u32>,
}

impl AppConfig {
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(seed) = overrides.seed {
            self.sim.seed = seed;
        }
        if let Some(scale) = overrides.time_scale {
            self.sim.time_scale = scale;
        }
        if let Some(cols) = overrides.cols {
            self.sim.cols = cols;
        }
        if let Some(rows) = overrides.rows {
            self.sim.rows = rows;
        }
        if let Some(gold) = overrides.gold {
            self.sim.starting_gold = gold;
        }
    }
}

pub fn parse_config(path: &Path, text: &str) -> Result<AppConfig, ConfigError> {
    serde_json::from_str(text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse_config(Path::new("empty.json"), "{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_sim_section() {
        let config =
            parse_config(Path::new("partial.json"), r#"{ "sim": { "seed": 7, "rows": 8 } }"#)
                .unwrap();
        assert_eq!(config.sim.seed, 7);
        assert_eq!(config.sim.rows, 8);
        assert_eq!(config.sim.cols, SimConfig::default().cols);
        assert!(config.sim.spawn_waves);
    }

    #[test]
    fn test_bad_json_names_the_file() {
        let err = parse_config(Path::new("broken.json"), "{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = AppConfig::default();
        config.apply(&Overrides {
            seed: Some(99),
            time_scale: Some(2.0),
            gold: Some(500),
            ..Default::default()
        });
        assert_eq!(config.sim.seed, 99);
        assert_eq!(config.sim.time_scale, 2.0);
        assert_eq!(config.sim.starting_gold, 500);
        assert_eq!(config.sim.rows, SimConfig::default().rows);
    }
}
