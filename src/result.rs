//! Outcome types for a completed hand.

extern crate alloc;

use alloc::string::String;

/// The side a finished hand was declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winner {
    /// No winner has been declared. This is the engine's state before
    /// evaluation and after an aborted hand.
    #[default]
    Undetermined,
    /// The player hand won.
    Player,
    /// The banker hand won.
    Banker,
    /// Both hands finished on the same total.
    Tie,
}

/// The terminal result of a completed hand.
///
/// Produced exactly once per hand by [`Game::play_hand`](crate::Game::play_hand)
/// and immutable thereafter. An aborted hand produces no outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The winning side. Never `Undetermined` in a produced outcome.
    pub winner: Winner,
    /// Whether the hand ended on a natural.
    pub natural: bool,
    /// The player's final total.
    pub player_total: u8,
    /// The banker's final total.
    pub banker_total: u8,
    /// Human-readable summary, e.g. `Player, Natural 9 over 8` or `Tie, 3`.
    pub description: String,
}
