// ============================================================
// Layer 4 — Epoch Schedule
// ============================================================
// Decides which windows are drawn and in what order.
//
// The corpus is cut into non-overlapping windows that start at
// offsets 0, L_ex, 2·L_ex, … where L_ex is the example length.
// The number of windows per epoch is
//
//     floor((L - 1) / L_ex) - 2
//
// with L the corpus length. One window is held back for the
// end index and one for the partial trailing window, so no
// window ever reads past the last token.
//
// Example with L = 10, L_ex = 3:
//   floor(9 / 3) - 2 = 1 window → offsets {0}
//
// The offsets are shuffled once per epoch and consumed from
// the front; each one is used exactly once until reset().
//
// Reference: rand crate documentation (SliceRandom)

use std::collections::VecDeque;

use rand::{seq::SliceRandom, Rng};

/// Number of windows one epoch over `corpus_len` tokens yields.
pub fn windows_per_epoch(corpus_len: usize, example_length: usize) -> usize {
    if example_length == 0 {
        return 0;
    }
    (corpus_len.saturating_sub(1) / example_length).saturating_sub(2)
}

/// Shuffled queue of window-start offsets for the current epoch.
#[derive(Debug, Clone)]
pub struct EpochSchedule {
    example_length: usize,
    windows:        usize,
    queue:          VecDeque<usize>,
}

impl EpochSchedule {
    /// Build the schedule and shuffle the first epoch.
    pub fn new<R: Rng + ?Sized>(corpus_len: usize, example_length: usize, rng: &mut R) -> Self {
        let mut schedule = Self {
            example_length,
            windows: windows_per_epoch(corpus_len, example_length),
            queue:   VecDeque::new(),
        };
        schedule.reset(rng);
        schedule
    }

    /// Every offset of an epoch, in corpus order
    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.windows).map(move |i| i * self.example_length)
    }

    /// Refill the queue with every offset and shuffle it.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut offsets: Vec<usize> = self.offsets().collect();
        offsets.shuffle(rng);
        self.queue = offsets.into();
    }

    /// Remove up to `n` offsets from the front of the queue.
    pub fn take(&mut self, n: usize) -> Vec<usize> {
        let n = n.min(self.queue.len());
        self.queue.drain(..n).collect()
    }

    pub fn windows_per_epoch(&self) -> usize {
        self.windows
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn cursor(&self) -> usize {
        self.windows - self.queue.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::BTreeSet;

    #[test]
    fn test_window_count_formula() {
        assert_eq!(windows_per_epoch(10, 3), 1);
        assert_eq!(windows_per_epoch(100, 10), 7);
        assert_eq!(windows_per_epoch(101, 10), 8);
        assert_eq!(windows_per_epoch(10, 1), 7);
        // Too small for any window
        assert_eq!(windows_per_epoch(6, 3), 0);
        assert_eq!(windows_per_epoch(0, 3), 0);
    }

    #[test]
    fn test_windows_never_read_past_end() {
        for len in 1..200 {
            for ex in 1..20 {
                let n = windows_per_epoch(len, ex);
                if n > 0 {
                    let last_start = (n - 1) * ex;
                    assert!(last_start + ex <= len, "len={len} ex={ex}");
                }
            }
        }
    }

    #[test]
    fn test_epoch_consumes_every_offset_once() {
        let mut rng   = StdRng::seed_from_u64(7);
        let mut sched = EpochSchedule::new(1000, 10, &mut rng);
        let expected: BTreeSet<usize> = sched.offsets().collect();

        let mut seen = Vec::new();
        while !sched.is_exhausted() {
            seen.extend(sched.take(7));
        }
        assert_eq!(seen.len(), sched.windows_per_epoch());
        assert_eq!(seen.iter().copied().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn test_take_is_clamped_to_remaining() {
        let mut rng   = StdRng::seed_from_u64(1);
        let mut sched = EpochSchedule::new(100, 10, &mut rng);
        assert_eq!(sched.take(5).len(), 5);
        assert_eq!(sched.cursor(), 5);
        assert_eq!(sched.take(5).len(), 2);
        assert!(sched.is_exhausted());
        assert!(sched.take(3).is_empty());
    }

    #[test]
    fn test_reset_refills_queue() {
        let mut rng   = StdRng::seed_from_u64(3);
        let mut sched = EpochSchedule::new(500, 5, &mut rng);
        sched.take(usize::MAX);
        assert_eq!(sched.remaining(), 0);

        sched.reset(&mut rng);
        assert_eq!(sched.remaining(), sched.windows_per_epoch());
        assert_eq!(sched.cursor(), 0);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = EpochSchedule::new(500, 5, &mut StdRng::seed_from_u64(42));
        let mut b = EpochSchedule::new(500, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.take(usize::MAX), b.take(usize::MAX));
    }
}
