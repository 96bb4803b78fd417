// ============================================================
// Layer 3 — WordWindow Domain Type
// ============================================================
// One window of the corpus, already translated to vocabulary
// indices. A window of `example_length` tokens produces
// `example_length - 1` next-word pairs:
//
//   tokens:  [the, cat, sat, on]      (example_length = 4)
//   inputs:  [the, cat, sat]
//   targets: [cat, sat, on]
//
// Pair j predicts token start+j+1 from token start+j.

/// A half-open window [start, start + example_length) over the
/// token sequence, stored as vocabulary indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordWindow {
    /// Offset of the first token in the corpus
    pub start: usize,

    /// Vocabulary index of the input token at each time step
    pub inputs: Vec<usize>,

    /// Vocabulary index of the token to predict at each time step
    pub targets: Vec<usize>,
}

impl WordWindow {
    /// Build a window from the vocabulary indices of its tokens.
    ///
    /// `ids` holds the full window, i.e. `example_length` entries.
    /// Windows of zero or one token have no steps.
    pub fn from_ids(start: usize, ids: &[usize]) -> Self {
        let steps = ids.len().saturating_sub(1);
        Self {
            start,
            inputs:  ids[..steps].to_vec(),
            targets: ids.get(1..).unwrap_or_default().to_vec(),
        }
    }

    /// Number of (input, target) pairs in this window
    pub fn steps(&self) -> usize {
        self.inputs.len()
    }

    /// Iterate over (time step, input index, target index)
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.inputs
            .iter()
            .zip(&self.targets)
            .enumerate()
            .map(|(t, (&i, &o))| (t, i, o))
    }
}
