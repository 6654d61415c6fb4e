// SPDX-License-Identifier: MPL-2.0
//! Shuffled tip rotation.
//!
//! The deck plays every tip once in a random order, then reshuffles. A
//! reshuffle never starts with the tip that just played, so the visible tip
//! always changes on rotation as long as there are at least two tips.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Builds a shuffled play order over `0..len`.
///
/// When `last` is given and the shuffle happens to start with it, the first
/// entry is swapped with the first entry that differs. Decks of zero or one
/// tips are returned unshuffled.
pub fn build_order<R: Rng + ?Sized>(len: usize, last: Option<usize>, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    if len <= 1 {
        return order;
    }
    order.shuffle(rng);
    if let Some(last) = last {
        if order[0] == last {
            if let Some(swap) = order.iter().position(|&index| index != last) {
                order.swap(0, swap);
            }
        }
    }
    order
}

/// Endless rotation over a fixed number of tips.
#[derive(Debug, Clone)]
pub struct TipDeck<R = StdRng> {
    len: usize,
    order: Vec<usize>,
    cursor: usize,
    rng: R,
}

impl TipDeck<StdRng> {
    /// Creates a deck seeded from the operating system.
    #[must_use]
    pub fn shuffled(len: usize) -> Self {
        Self::with_rng(len, StdRng::from_os_rng())
    }
}

impl<R: Rng> TipDeck<R> {
    /// Creates a deck drawing its shuffles from `rng`.
    pub fn with_rng(len: usize, mut rng: R) -> Self {
        let order = build_order(len, None, &mut rng);
        Self {
            len,
            order,
            cursor: 0,
            rng,
        }
    }

    /// Number of tips in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the tip currently shown, or `None` for an empty deck.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    /// Moves to the next tip, reshuffling once the order is exhausted.
    ///
    /// A single-tip deck never moves.
    pub fn advance(&mut self) -> Option<usize> {
        if self.len <= 1 {
            return self.current();
        }
        self.cursor += 1;
        if self.cursor >= self.order.len() {
            let last = self.order.last().copied();
            self.order = build_order(self.len, last, &mut self.rng);
            self.cursor = 0;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(len: usize, seed: u64) -> TipDeck<StdRng> {
        TipDeck::with_rng(len, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn build_order_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut order = build_order(12, None, &mut rng);
        order.sort_unstable();
        assert_eq!(order, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn build_order_never_starts_with_last() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let order = build_order(3, Some(1), &mut rng);
            assert_ne!(order[0], 1, "seed {seed}");
        }
    }

    #[test]
    fn tiny_decks_are_not_shuffled() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_order(0, None, &mut rng).is_empty());
        assert_eq!(build_order(1, Some(0), &mut rng), vec![0]);
    }

    #[test]
    fn rotation_never_repeats_consecutively() {
        for seed in 0..20 {
            let mut deck = seeded(12, seed);
            let mut previous = deck.current();
            for _ in 0..200 {
                let next = deck.advance();
                assert_ne!(next, previous, "seed {seed}");
                previous = next;
            }
        }
    }

    #[test]
    fn two_tip_deck_alternates() {
        let mut deck = seeded(2, 3);
        let mut previous = deck.current();
        for _ in 0..50 {
            let next = deck.advance();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn each_pass_plays_every_tip_once() {
        let mut deck = seeded(5, 11);
        let mut pass = vec![deck.current().expect("non-empty deck")];
        for _ in 1..5 {
            pass.push(deck.advance().expect("non-empty deck"));
        }
        pass.sort_unstable();
        assert_eq!(pass, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn single_tip_deck_stays_put() {
        let mut deck = seeded(1, 5);
        assert_eq!(deck.current(), Some(0));
        for _ in 0..10 {
            assert_eq!(deck.advance(), Some(0));
        }
    }

    #[test]
    fn empty_deck_has_no_current_tip() {
        let mut deck = seeded(0, 5);
        assert!(deck.is_empty());
        assert_eq!(deck.current(), None);
        assert_eq!(deck.advance(), None);
    }
}
