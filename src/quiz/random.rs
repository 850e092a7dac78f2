//! Sources of randomness for dealing rounds.
//!
//! Every shuffle and every slot draw the state machine makes goes through a
//! [`Randomizer`], so a game can be driven by a real generator or replayed
//! from a fixed script.

use std::collections::VecDeque;

use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;

pub trait Randomizer {
    /// Reorder `countries` in place.
    fn shuffle(&mut self, countries: &mut [String]);

    /// Draw an index in `0..upper`. `upper` is never zero.
    fn pick_index(&mut self, upper: usize) -> usize;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRandomizer<R> {
    rng: R,
}

impl<R: Rng> RngRandomizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Randomizer for RngRandomizer<R> {
    fn shuffle(&mut self, countries: &mut [String]) {
        countries.shuffle(&mut self.rng);
    }

    fn pick_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Replays scripted shuffles and draws in order.
///
/// Each scripted shuffle is a permutation: position `i` of the result takes
/// the element at `permutation[i]`. Once the script runs out, shuffles leave
/// the order untouched and draws return 0. A draw larger than the range
/// wraps around.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandomizer {
    shuffles: VecDeque<Vec<usize>>,
    picks: VecDeque<usize>,
}

impl SequenceRandomizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shuffles<I>(mut self, shuffles: I) -> Self
    where
        I: IntoIterator<Item = Vec<usize>>,
    {
        self.shuffles.extend(shuffles);
        self
    }

    pub fn with_picks<I>(mut self, picks: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.picks.extend(picks);
        self
    }

    /// Queue an identity shuffle, i.e. one that keeps the current order.
    pub fn keep_order(mut self) -> Self {
        self.shuffles.push_back(Vec::new());
        self
    }
}

impl Randomizer for SequenceRandomizer {
    fn shuffle(&mut self, countries: &mut [String]) {
        let Some(permutation) = self.shuffles.pop_front() else {
            return;
        };
        if permutation.is_empty() {
            return;
        }
        if !is_permutation(&permutation, countries.len()) {
            warn!(
                "ignoring scripted shuffle {:?} for {} countries",
                permutation,
                countries.len()
            );
            return;
        }

        let original = countries.to_vec();
        for (slot, &from) in countries.iter_mut().zip(permutation.iter()) {
            *slot = original[from].clone();
        }
    }

    fn pick_index(&mut self, upper: usize) -> usize {
        self.picks.pop_front().map_or(0, |pick| pick % upper)
    }
}

fn is_permutation(permutation: &[usize], len: usize) -> bool {
    if permutation.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    permutation.iter().all(|&index| {
        index < len && !std::mem::replace(&mut seen[index], true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sequence_applies_permutation() {
        let mut rng = SequenceRandomizer::new().with_shuffles([vec![3, 0, 2, 1]]);
        let mut countries = names(&["A", "B", "C", "D"]);
        rng.shuffle(&mut countries);
        assert_eq!(countries, names(&["D", "A", "C", "B"]));

        // Script exhausted: order is kept.
        rng.shuffle(&mut countries);
        assert_eq!(countries, names(&["D", "A", "C", "B"]));
    }

    #[test]
    fn test_sequence_keep_order_consumes_a_shuffle() {
        let mut rng = SequenceRandomizer::new()
            .keep_order()
            .with_shuffles([vec![1, 0]]);
        let mut countries = names(&["A", "B"]);
        rng.shuffle(&mut countries);
        assert_eq!(countries, names(&["A", "B"]));
        rng.shuffle(&mut countries);
        assert_eq!(countries, names(&["B", "A"]));
    }

    #[test]
    fn test_sequence_ignores_invalid_permutation() {
        let mut rng = SequenceRandomizer::new().with_shuffles([vec![0, 0, 1], vec![0, 1]]);
        let mut countries = names(&["A", "B", "C"]);
        rng.shuffle(&mut countries);
        assert_eq!(countries, names(&["A", "B", "C"]));
        rng.shuffle(&mut countries);
        assert_eq!(countries, names(&["A", "B", "C"]));
    }

    #[test]
    fn test_sequence_picks_wrap_and_default_to_zero() {
        let mut rng = SequenceRandomizer::new().with_picks([2, 5]);
        assert_eq!(rng.pick_index(4), 2);
        assert_eq!(rng.pick_index(4), 1);
        assert_eq!(rng.pick_index(4), 0);
    }

    #[test]
    fn test_rng_randomizer_stays_in_range() {
        let mut rng = RngRandomizer::new(StdRng::seed_from_u64(7));
        for _ in 0..200 {
            assert!(rng.pick_index(4) < 4);
        }

        let mut countries = names(&["A", "B", "C", "D", "E", "F"]);
        rng.shuffle(&mut countries);
        let mut sorted = countries.clone();
        sorted.sort();
        assert_eq!(sorted, names(&["A", "B", "C", "D", "E", "F"]));
    }
}
