//! Hand representation and point totals.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Sums the point values of `cards`, keeping only the ones digit.
///
/// Baccarat totals are always taken modulo 10, so the result is in `0..=9`.
#[must_use]
pub fn total_points(cards: &[Card]) -> u8 {
    let sum: u8 = cards.iter().map(|card| card.points()).sum();
    sum % 10
}

/// One side's cards during a hand.
///
/// A hand holds two cards after the initial deal and at most three after the
/// draw phase. The total is recomputed from the cards on every read.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the point total of the hand, in `0..=9`.
    #[must_use]
    pub fn total(&self) -> u8 {
        total_points(&self.cards)
    }

    /// Returns whether the hand is a natural (two cards totalling 8 or 9).
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() >= 8
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
