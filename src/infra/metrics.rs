// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records per-epoch batch statistics to a CSV file.
//
// Metrics recorded per epoch:
//   - epoch:         the epoch number (1, 2, 3, ...)
//   - batches:       number of batches drawn
//   - windows:       number of windows drawn across all batches
//   - feature_marks: sum of every feature tensor
//   - label_marks:   sum of every label tensor
//
// For a healthy run windows equals windows_per_epoch and both
// mark counts equal windows × (example_length - 1).
//
// Output file: <out_dir>/metrics.csv
//
//   epoch,batches,windows,feature_marks,label_marks
//   1,4,30,120,120
//   2,4,30,120,120
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

/// One row of metrics data for a single epoch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    pub epoch:         usize,
    pub batches:       usize,
    pub windows:       usize,
    pub feature_marks: u64,
    pub label_marks:   u64,
}

impl EpochMetrics {
    pub fn new(epoch: usize) -> Self {
        Self { epoch, ..Self::default() }
    }

    /// Account for one drawn batch
    pub fn record_batch(&mut self, windows: usize, feature_marks: u64, label_marks: u64) {
        self.batches       += 1;
        self.windows       += windows;
        self.feature_marks += feature_marks;
        self.label_marks   += label_marks;
    }

    /// True if every window carried exactly `steps` marks per tensor
    pub fn is_consistent(&self, steps: usize) -> bool {
        let expected = (self.windows * steps) as u64;
        self.feature_marks == expected && self.label_marks == expected
    }
}

/// Logs epoch metrics to a CSV file.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "epoch,batches,windows,feature_marks,label_marks")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one epoch's metrics as a new row in the CSV.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        writeln!(
            f,
            "{},{},{},{},{}",
            m.epoch,
            m.batches,
            m.windows,
            m.feature_marks,
            m.label_marks,
        )?;

        tracing::debug!(
            "Logged epoch {} metrics: {} batches, {} windows",
            m.epoch,
            m.batches,
            m.windows,
        );

        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
