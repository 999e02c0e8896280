//! Error types for card parsing and hand play.

use thiserror::Error;

/// Errors that can occur when parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank character is not one of the thirteen rank symbols.
    #[error("rank invalid")]
    RankInvalid,
    /// The suit character is not one of the four suit letters.
    #[error("suit invalid")]
    SuitInvalid,
}

/// Errors that can occur while playing out a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The engine has already played its hand.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The card source ran out before the hand could be completed. Misdeal.
    #[error("not enough cards to complete the hand")]
    Exhausted,
}
