//! Deterministic random number generation for dealing decks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of deals
//! - **Serializable**: O(1) state capture and restore, so a deal can be replayed
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![0, 0, 1, 1, 2, 2];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same deal
//! let mut replay = GameRng::new(42);
//! let mut deck2 = vec![0, 0, 1, 1, 2, 2];
//! replay.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used by the engine.
///
/// Uses ChaCha8 for speed while keeping the output uniform enough for
/// unbiased shuffles.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Uniform index in `[0, upper]` (inclusive).
    pub fn gen_index_inclusive(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    /// Shuffle a slice in place.
    ///
    /// Fisher–Yates: walk from the last index down to 1, swapping each
    /// position with a uniformly chosen index in `[0, i]`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index_inclusive(i);
            slice.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for replaying a deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index_inclusive(999), rng2.gen_index_inclusive(999));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index_inclusive(999)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index_inclusive(999)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_inclusive_bounds() {
        let mut rng = GameRng::new(7);
        let mut seen_upper = false;

        for _ in 0..1000 {
            let i = rng.gen_index_inclusive(3);
            assert!(i <= 3);
            seen_upper |= i == 3;
        }

        // Upper bound is reachable
        assert!(seen_upper);
        assert_eq!(rng.gen_index_inclusive(0), 0);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Should be same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(42);

        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Each element of a 4-slice should land in every slot at least once
        let mut rng = GameRng::new(3);
        let mut seen = [[false; 4]; 4];

        for _ in 0..500 {
            let mut data = [0usize, 1, 2, 3];
            rng.shuffle(&mut data);
            for (slot, &value) in data.iter().enumerate() {
                seen[value][slot] = true;
            }
        }

        assert!(seen.iter().all(|row| row.iter().all(|&s| s)));
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_index_inclusive(999);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index_inclusive(999)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index_inclusive(999)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
