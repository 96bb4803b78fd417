// ============================================================
// Layer 2 — EpochUseCase
// ============================================================
// Drives the iterator the way a training loop would, minus the
// model, and checks every batch it receives:
//
//   Step 1: Save the run config             (Layer 6 - infra)
//   Step 2: Build the iterator              (Layer 4 - data)
//   Step 3: For each epoch, draw batches    (Layer 4 - data)
//           until exhausted, summing marks
//   Step 4: Log epoch metrics to CSV        (Layer 6 - infra)
//   Step 5: Reset for the next epoch
//
// Reference: Burn Book §5 (Training)

use anyhow::{bail, Result};
use burn::{
    backend::{ndarray::NdArrayDevice, NdArray},
    prelude::*,
};

use crate::application::IterConfig;
use crate::infra::{
    metrics::{EpochMetrics, MetricsLogger},
    run_store::RunStore,
};

type DriveBackend = NdArray;

pub struct EpochUseCase {
    config: IterConfig,
}

impl EpochUseCase {
    pub fn new(config: IterConfig) -> Self {
        Self { config }
    }

    /// Run every configured epoch and return one metrics row per epoch
    pub fn execute(&self) -> Result<Vec<EpochMetrics>> {
        let cfg = &self.config;

        // ── Step 1: Save config so the run can be replayed ───────────────────
        let store = RunStore::new(&cfg.out_dir)?;
        store.save_config(cfg)?;
        let logger = MetricsLogger::new(&cfg.out_dir)?;

        // ── Step 2: Build the iterator ────────────────────────────────────────
        let device   = NdArrayDevice::default();
        let mut iter = cfg.build_iterator::<DriveBackend>(device)?;
        let vocab    = iter.batcher().vocab_size();
        let steps    = iter.batcher().steps();

        tracing::info!(
            "Corpus ready: {} tokens, vocabulary {}, {} windows per epoch",
            iter.corpus_len(),
            vocab,
            iter.windows_per_epoch()
        );

        let mut all = Vec::with_capacity(cfg.epochs);

        // ── Epoch loop ────────────────────────────────────────────────────────
        for epoch in 1..=cfg.epochs {
            let mut metrics = EpochMetrics::new(epoch);

            while iter.has_next() {
                let batch = iter.next_default_batch()?;
                let rows  = batch.size();

                let dims = batch.features.dims();
                if dims != [rows, vocab, steps] || batch.labels.dims() != dims {
                    bail!("batch shape {:?} does not match [{}, {}, {}]", dims, rows, vocab, steps);
                }

                let feature_marks: f64 = batch.features.sum().into_scalar().elem::<f64>();
                let label_marks:   f64 = batch.labels.sum().into_scalar().elem::<f64>();

                metrics.record_batch(rows, feature_marks.round() as u64, label_marks.round() as u64);
            }

            if !metrics.is_consistent(steps) {
                tracing::warn!(
                    "Epoch {}: {} windows but {} feature / {} label marks",
                    epoch,
                    metrics.windows,
                    metrics.feature_marks,
                    metrics.label_marks
                );
            }

            tracing::info!(
                "Epoch {:>3}/{} | batches={} | windows={} | marks={}/{}",
                epoch,
                cfg.epochs,
                metrics.batches,
                metrics.windows,
                metrics.feature_marks,
                metrics.label_marks,
            );

            logger.log(&metrics)?;
            all.push(metrics);

            iter.reset();
        }

        tracing::info!("Metrics written to '{}'", logger.csv_path().display());
        Ok(all)
    }
}
