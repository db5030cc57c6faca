/*
gambler.rs

Copyright 2025 Hervé Quatremain

This file is part of Soggle.

Soggle is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Soggle is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Soggle. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Sources of randomness used to shake the board.
//!
//! The board is shaken with two capabilities: a [`Shuffler`] that decides where each cube lands
//! in the grid, and a [`Die`] that decides which face of each cube shows up.
//! Both come with a random implementation for real games and with predictable implementations
//! that make a shake fully reproducible.

use clap::ValueEnum;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use strum_macros::Display;

/// Number of faces on a die, and therefore on a cube.
pub const DIE_FACES: usize = 6;

/// Something that returns a face index between 0 and 5.
pub trait Die {
    /// Roll the die and return the index of the top face.
    fn roll(&mut self) -> usize;
}

/// A regular six-sided die.
pub struct SixSidedDie<R: Rng = ThreadRng> {
    rng: R,
}

impl Default for SixSidedDie<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl SixSidedDie<ThreadRng> {
    /// Create a [`SixSidedDie`] object that uses the thread random generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> SixSidedDie<R> {
    /// Create a [`SixSidedDie`] object that draws from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Die for SixSidedDie<R> {
    fn roll(&mut self) -> usize {
        self.rng.random_range(0..DIE_FACES)
    }
}

/// A loaded die that always lands on the same face.
#[derive(Debug, Clone, Copy)]
pub struct PredictableDie {
    always_rolls: usize,
}

impl Default for PredictableDie {
    fn default() -> Self {
        Self::new(4)
    }
}

impl PredictableDie {
    /// Create a [`PredictableDie`] object.
    ///
    /// The value is not checked here. A value outside `0..6` is reported by
    /// [`crate::cube::Cube::roll`] when the die is used.
    pub fn new(always_rolls: usize) -> Self {
        Self { always_rolls }
    }
}

impl Die for PredictableDie {
    fn roll(&mut self) -> usize {
        self.always_rolls
    }
}

/// Something that reorders a sequence of items.
///
/// Implementations never modify the input slice, they return a new vector with the same
/// elements.
pub trait Shuffler {
    fn shuffle<T: Clone>(&mut self, sequence: &[T]) -> Vec<T>;
}

/// Uniformly random permutation.
pub struct RandomShuffler<R: Rng = ThreadRng> {
    rng: R,
}

impl Default for RandomShuffler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomShuffler<ThreadRng> {
    /// Create a [`RandomShuffler`] object that uses the thread random generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> RandomShuffler<R> {
    /// Create a [`RandomShuffler`] object that draws from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn shuffle<T: Clone>(&mut self, sequence: &[T]) -> Vec<T> {
        let mut copied: Vec<T> = sequence.to_vec();
        copied.shuffle(&mut self.rng);
        copied
    }
}

/// Shuffler that returns the sequence in reverse order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReversedShuffler;

impl Shuffler for ReversedShuffler {
    fn shuffle<T: Clone>(&mut self, sequence: &[T]) -> Vec<T> {
        sequence.iter().rev().cloned().collect()
    }
}

/// Shuffler that keeps the original order.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle<T: Clone>(&mut self, sequence: &[T]) -> Vec<T> {
        sequence.to_vec()
    }
}

/// Shuffler selection from the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ShuffleMode {
    #[default]
    Random,
    Reversed,
    Identity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn predictable_die_always_rolls_the_same_face() {
        let mut die = PredictableDie::new(2);
        for _ in 0..10 {
            assert_eq!(die.roll(), 2);
        }
        assert_eq!(PredictableDie::default().roll(), 4);
    }

    #[test]
    fn six_sided_die_stays_in_range_and_reaches_every_face() {
        let mut die = SixSidedDie::with_rng(StdRng::seed_from_u64(7));
        let mut seen = [false; DIE_FACES];
        for _ in 0..600 {
            let face = die.roll();
            assert!(face < DIE_FACES, "face {face} out of range");
            seen[face] = true;
        }
        assert!(seen.iter().all(|s| *s), "some faces never came up: {seen:?}");
    }

    #[test]
    fn reversed_and_identity_shufflers_are_deterministic() {
        let input = vec![1, 2, 3, 4];
        assert_eq!(ReversedShuffler.shuffle(&input), vec![4, 3, 2, 1]);
        assert_eq!(IdentityShuffler.shuffle(&input), vec![1, 2, 3, 4]);
        assert_eq!(input, vec![1, 2, 3, 4]);
    }

    #[test]
    fn random_shuffler_returns_a_permutation() {
        let input: Vec<usize> = (0..16).collect();
        let mut shuffler = RandomShuffler::with_rng(StdRng::seed_from_u64(42));
        let mut shuffled = shuffler.shuffle(&input);
        assert_eq!(input, (0..16).collect::<Vec<usize>>());
        shuffled.sort_unstable();
        assert_eq!(shuffled, input);
    }

    #[test]
    fn seeded_shufflers_agree() {
        let input: Vec<usize> = (0..16).collect();
        let a = RandomShuffler::with_rng(StdRng::seed_from_u64(3)).shuffle(&input);
        let b = RandomShuffler::with_rng(StdRng::seed_from_u64(3)).shuffle(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_mode_names() {
        assert_eq!(ShuffleMode::default(), ShuffleMode::Random);
        assert_eq!(ShuffleMode::Reversed.to_string(), "reversed");
    }
}
