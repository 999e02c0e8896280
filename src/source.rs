//! Sequential card supply for a single hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::CardError;

/// An ordered, finite supply of cards.
///
/// The source hands out its cards one at a time in construction order. The
/// cursor only moves forward; once the cards run out the source is exhausted
/// for good. A hand needs at most six cards, so a longer sequence simply
/// leaves an unused tail.
///
/// # Example
///
/// ```
/// use bacrs::CardSource;
///
/// let mut source = CardSource::from_tokens(["Ac", "Td"]).unwrap();
/// assert_eq!(source.next_card().unwrap().to_string(), "Ac");
/// assert_eq!(source.remaining(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CardSource {
    /// The supplied cards, in deal order.
    cards: Vec<Card>,
    /// Index of the next card to hand out.
    cursor: usize,
}

impl CardSource {
    /// Creates a source from pre-built cards.
    #[must_use]
    pub fn new(cards: impl Into<Vec<Card>>) -> Self {
        Self {
            cards: cards.into(),
            cursor: 0,
        }
    }

    /// Creates a source by parsing card tokens.
    ///
    /// # Errors
    ///
    /// Returns the first [`CardError`] hit while parsing; no source is
    /// constructed from a sequence with a malformed token.
    pub fn from_tokens<I>(tokens: I) -> Result<Self, CardError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let cards = tokens
            .into_iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<Card>, CardError>>()?;
        Ok(Self::new(cards))
    }

    /// Returns the next unconsumed card and advances the cursor.
    ///
    /// Returns `None` once every card has been handed out. There is no peek,
    /// rewind, or replenishment.
    pub fn next_card(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    /// Returns the number of unconsumed cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }
}

impl Iterator for CardSource {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        self.next_card()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
