use burn::data::dataset::Dataset;

use crate::data::schedule::windows_per_epoch;
use crate::domain::window::WordWindow;

/// Every full window of an epoch, addressable by window number.
///
/// Window `i` starts at corpus offset `i * example_length`, so the
/// same windows can be fed to burn's `DataLoader` as well as to
/// the epoch-scheduled `WordIterator`.
#[derive(Debug, Clone)]
pub struct WindowDataset {
    ids:            Vec<usize>,
    example_length: usize,
    windows:        usize,
}

impl WindowDataset {
    pub fn new(ids: Vec<usize>, example_length: usize) -> Self {
        let windows = windows_per_epoch(ids.len(), example_length);
        Self { ids, example_length, windows }
    }

    /// The window starting at corpus offset `start`.
    ///
    /// Returns None if the window would run past the last token.
    pub fn window_at(&self, start: usize) -> Option<WordWindow> {
        let end = start.checked_add(self.example_length)?;
        let ids = self.ids.get(start..end)?;
        Some(WordWindow::from_ids(start, ids))
    }

    pub fn example_length(&self) -> usize {
        self.example_length
    }

    pub fn window_count(&self) -> usize {
        self.windows
    }
}

impl Dataset<WordWindow> for WindowDataset {
    fn get(&self, index: usize) -> Option<WordWindow> {
        if index >= self.windows {
            return None;
        }
        self.window_at(index * self.example_length)
    }

    fn len(&self) -> usize {
        self.windows
    }
}
