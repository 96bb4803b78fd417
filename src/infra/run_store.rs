// ============================================================
// Layer 6 — Run Store
// ============================================================
// Saves and restores the configuration of an epoch run.
//
// Files in the output directory:
//   run_config.json — corpus path, encoding, batch size,
//                     example length, seed, epochs
//   metrics.csv     — written by MetricsLogger
//
// With the same corpus and seed, a saved run_config.json
// reproduces the exact window order of the original run.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::IterConfig;

const CONFIG_FILE: &str = "run_config.json";

/// Manages the run configuration file in one directory.
pub struct RunStore {
    dir: PathBuf,
}

impl RunStore {
    /// Create a new RunStore, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save_config(&self, cfg: &IterConfig) -> Result<()> {
        let path = self.config_path();
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved run config to '{}'", path.display());
        Ok(())
    }
}

/// Read an IterConfig from any JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<IterConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Invalid run config in '{}'", path.display()))
}
