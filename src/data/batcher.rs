// ============================================================
// Layer 4 — One-Hot Window Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec<WordWindow>
// into a pair of dense one-hot tensors.
//
// Layout of both tensors:  [batch, vocab_size, steps]
//   dimension 0 = window within the minibatch
//   dimension 1 = vocabulary index (the one-hot axis)
//   dimension 2 = time step within the window
//
// For window row r and step t:
//   features[r, input_t,  t] = 1.0
//   labels  [r, target_t, t] = 1.0
// and every other cell is 0.0, so each row carries exactly
// `steps` marks in each tensor.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
    tensor::TensorData,
};

use crate::domain::window::WordWindow;

// ─── WordBatch ────────────────────────────────────────────────────────────────
/// One minibatch of windows ready for a sequence model.
#[derive(Debug, Clone)]
pub struct WordBatch<B: Backend> {
    /// One-hot inputs — shape: [batch_size, vocab_size, steps]
    pub features: Tensor<B, 3>,

    /// One-hot next-word targets — shape: [batch_size, vocab_size, steps]
    pub labels: Tensor<B, 3>,

    /// Corpus offset of each row's window
    pub starts: Vec<usize>,
}

impl<B: Backend> WordBatch<B> {
    /// Number of windows in this batch
    pub fn size(&self) -> usize {
        self.starts.len()
    }
}

// ─── OneHotBuffer ─────────────────────────────────────────────────────────────
/// Dense zero-initialised [batch, vocab, steps] buffer with
/// indexed scalar writes.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotBuffer {
    shape: [usize; 3],
    data:  Vec<f32>,
}

impl OneHotBuffer {
    pub fn zeros(shape: [usize; 3]) -> Self {
        let [b, v, t] = shape;
        Self { shape, data: vec![0.0; b * v * t] }
    }

    /// Set the cell at (row, vocab index, step)
    pub fn put(&mut self, row: usize, idx: usize, step: usize, value: f32) {
        let [_, v, t] = self.shape;
        debug_assert!(idx < v && step < t, "({row}, {idx}, {step}) outside {:?}", self.shape);
        self.data[(row * v + idx) * t + step] = value;
    }

    pub fn get(&self, row: usize, idx: usize, step: usize) -> f32 {
        let [_, v, t] = self.shape;
        self.data[(row * v + idx) * t + step]
    }

    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    pub fn into_tensor<B: Backend>(self, device: &B::Device) -> Tensor<B, 3> {
        Tensor::from_data(TensorData::new(self.data, self.shape), device)
    }
}

/// Encode windows as (features, labels) one-hot buffers.
pub fn encode_one_hot(
    windows:    &[WordWindow],
    vocab_size: usize,
    steps:      usize,
) -> (OneHotBuffer, OneHotBuffer) {
    let shape        = [windows.len(), vocab_size, steps];
    let mut features = OneHotBuffer::zeros(shape);
    let mut labels   = OneHotBuffer::zeros(shape);

    for (row, window) in windows.iter().enumerate() {
        for (t, input, target) in window.pairs() {
            features.put(row, input, t, 1.0);
            labels.put(row, target, t, 1.0);
        }
    }

    (features, labels)
}

// ─── WindowBatcher ────────────────────────────────────────────────────────────
/// Holds the target device and the tensor geometry shared by
/// every batch of a corpus.
#[derive(Clone, Debug)]
pub struct WindowBatcher<B: Backend> {
    pub device: B::Device,
    vocab_size: usize,
    steps:      usize,
}

impl<B: Backend> WindowBatcher<B> {
    /// `example_length` is the window length in tokens; each batch
    /// carries `example_length - 1` time steps.
    pub fn new(device: B::Device, vocab_size: usize, example_length: usize) -> Self {
        Self {
            device,
            vocab_size,
            steps: example_length.saturating_sub(1),
        }
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<B: Backend> Batcher<WordWindow, WordBatch<B>> for WindowBatcher<B> {
    fn batch(&self, items: Vec<WordWindow>) -> WordBatch<B> {
        let (features, labels) = encode_one_hot(&items, self.vocab_size, self.steps);

        WordBatch {
            features: features.into_tensor(&self.device),
            labels:   labels.into_tensor(&self.device),
            starts:   items.iter().map(|w| w.start).collect(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_buffer_marks_one_cell_per_step() {
        let windows = vec![
            WordWindow::from_ids(0, &[0, 1, 2]),
            WordWindow::from_ids(3, &[3, 4, 0]),
        ];
        let (f, l) = encode_one_hot(&windows, 5, 2);

        assert_eq!(f.shape(), [2, 5, 2]);
        assert_eq!(f.get(0, 0, 0), 1.0);
        assert_eq!(f.get(0, 1, 1), 1.0);
        assert_eq!(l.get(0, 1, 0), 1.0);
        assert_eq!(l.get(0, 2, 1), 1.0);
        assert_eq!(f.get(1, 3, 0), 1.0);
        assert_eq!(l.get(1, 0, 1), 1.0);

        for buf in [&f, &l] {
            let ones = buf.data.iter().filter(|&&x| x == 1.0).count();
            let sum: f32 = buf.data.iter().sum();
            assert_eq!(ones, 4);
            assert_eq!(sum, 4.0);
        }
    }

    #[test]
    fn test_repeated_token_in_window() {
        // Same input at both steps: two distinct cells, not one
        let windows = vec![WordWindow::from_ids(0, &[2, 2, 2])];
        let (f, l) = encode_one_hot(&windows, 3, 2);
        assert_eq!(f.get(0, 2, 0), 1.0);
        assert_eq!(f.get(0, 2, 1), 1.0);
        assert_eq!(l.get(0, 2, 0), 1.0);
        assert_eq!(l.get(0, 2, 1), 1.0);
    }

    #[test]
    fn test_batcher_builds_tensors() {
        let device  = Default::default();
        let batcher = WindowBatcher::<TestBackend>::new(device, 4, 4);
        assert_eq!(batcher.vocab_size(), 4);
        assert_eq!(batcher.steps(), 3);
        let batch   = batcher.batch(vec![
            WordWindow::from_ids(0, &[0, 1, 2, 3]),
            WordWindow::from_ids(4, &[3, 2, 1, 0]),
        ]);

        assert_eq!(batch.size(), 2);
        assert_eq!(batch.starts, vec![0, 4]);
        assert_eq!(batch.features.dims(), [2, 4, 3]);
        assert_eq!(batch.labels.dims(),   [2, 4, 3]);

        let f: Vec<f32> = batch.features.into_data().to_vec().unwrap();
        let l: Vec<f32> = batch.labels.into_data().to_vec().unwrap();
        assert_eq!(f.iter().sum::<f32>(), 6.0);
        assert_eq!(l.iter().sum::<f32>(), 6.0);

        // Row 1, step 0: input 3, target 2
        let at = |row: usize, idx: usize, step: usize| (row * 4 + idx) * 3 + step;
        assert_eq!(f[at(1, 3, 0)], 1.0);
        assert_eq!(l[at(1, 2, 0)], 1.0);
    }
}
