//! A baccarat hand solver with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays out a single hand from a
//! supplied card ordering: the interleaved initial deal, the natural
//! shortcut, both third-card draw rules, and the final comparison. Supplying
//! the cards — a shoe, a shuffled pool, a remote dealer — is the caller's
//! business; the engine only consumes them in order.
//!
//! # Example
//!
//! ```
//! use bacrs::{CardSource, Game, Winner};
//!
//! let source = CardSource::from_tokens(["Js", "Td", "3h", "2c", "3c", "7h"]).unwrap();
//! let mut game = Game::new(source);
//! let outcome = game.play_hand().unwrap();
//!
//! assert_eq!(outcome.winner, Winner::Banker);
//! assert_eq!(outcome.banker_total, 9);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod rules;
pub mod sink;
pub mod source;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use error::{CardError, DealError};
pub use game::{Game, GameState};
pub use hand::{Hand, total_points};
pub use result::{Outcome, Winner};
pub use rules::{banker_draws, player_draws};
#[cfg(feature = "log")]
pub use sink::FacadeLog;
pub use sink::{DealerLog, SilentLog};
pub use source::CardSource;
