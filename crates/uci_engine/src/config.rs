//! Engine settings, read from an optional TOML file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use classical_engine::DEFAULT_DEPTH;

/// Deepest search the front end accepts.
pub const MAX_DEPTH: u8 = 8;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies, 1..=MAX_DEPTH
    pub depth: u8,
    /// Seed for the move-shuffling generator; entropy when absent
    pub seed: Option<u64>,
    /// `tracing` filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: EngineConfig = toml::from_str(contents)?;
        config.depth = clamp_depth(config.depth);
        Ok(config)
    }

    /// Command-line values win over file values.
    pub fn with_overrides(mut self, depth: Option<u8>, seed: Option<u64>) -> Self {
        if let Some(d) = depth {
            self.depth = clamp_depth(d);
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

pub fn clamp_depth(depth: u8) -> u8 {
    depth.clamp(1, MAX_DEPTH)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
