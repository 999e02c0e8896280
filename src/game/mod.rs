//! Game engine and hand flow.

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::DealError;
use crate::hand::Hand;
use crate::result::{Outcome, Winner};
use crate::rules;
use crate::sink::{DealerLog, SilentLog};
use crate::source::CardSource;

pub mod state;

pub use state::GameState;

/// A baccarat engine that plays out exactly one hand.
///
/// The engine owns its [`CardSource`] and both hands. [`Game::play_hand`] runs
/// the whole hand in one call; afterwards the hands, totals, winner, and
/// description stay readable on the engine, whether the hand completed or
/// aborted on an exhausted source. One engine evaluates one hand and is not
/// reused.
///
/// # Example
///
/// ```
/// use bacrs::{CardSource, Game, Winner};
///
/// let source = CardSource::from_tokens(["Js", "5d", "9h", "3c"]).unwrap();
/// let mut game = Game::new(source);
/// let outcome = game.play_hand().unwrap();
///
/// assert_eq!(outcome.winner, Winner::Player);
/// assert_eq!(outcome.description, "Player, Natural 9 over 8");
/// ```
pub struct Game {
    /// The card supply for this hand.
    source: CardSource,
    /// The player's hand.
    player: Hand,
    /// The banker's hand.
    banker: Hand,
    /// Current phase.
    state: GameState,
    /// Whether the initial deal produced a natural.
    natural: bool,
    /// The declared winner, `Undetermined` until evaluation.
    winner: Winner,
    /// The declared description, empty until evaluation.
    descr: String,
    /// Commentary sink.
    log: Box<dyn DealerLog>,
}

impl Game {
    /// Creates an engine over the given source, with commentary discarded.
    #[must_use]
    pub fn new(source: CardSource) -> Self {
        Self::with_log(source, Box::new(SilentLog))
    }

    /// Creates an engine that sends dealer commentary to `log`.
    #[must_use]
    pub fn with_log(source: CardSource, log: Box<dyn DealerLog>) -> Self {
        Self {
            source,
            player: Hand::new(),
            banker: Hand::new(),
            state: GameState::Initial,
            natural: false,
            winner: Winner::Undetermined,
            descr: String::new(),
            log,
        }
    }

    /// Walks through the entire hand and declares a winner.
    ///
    /// Deals two cards to each side in the fixed Player, Banker, Player,
    /// Banker order, stops immediately on a natural 8 or 9, otherwise applies
    /// the player's draw rule and then the banker's (which needs the player's
    /// third-card value), and finally compares totals.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] if the source runs out of cards at any
    /// draw; the hand is then aborted and no outcome exists, though whatever
    /// was dealt remains inspectable. Returns [`DealError::InvalidState`] if
    /// the engine has already played its hand.
    pub fn play_hand(&mut self) -> Result<Outcome, DealError> {
        if self.state != GameState::Initial {
            return Err(DealError::InvalidState);
        }

        // Indices 0 and 2 of the source go to the player, 1 and 3 to the banker.
        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.banker.add_card(card);
        }
        self.state = GameState::Dealt;

        let player_total = self.player.total();
        let banker_total = self.banker.total();
        self.emit(&format!("Player shows {player_total}"));
        self.emit(&format!("Banker has {banker_total}"));

        // If either side is at 8 or 9 the hand is over; neither side draws.
        self.state = GameState::NaturalCheck;
        if player_total >= 8 || banker_total >= 8 {
            self.natural = true;
            self.emit("Natural hand");
            return Ok(self.declare_winner());
        }

        self.state = GameState::PlayerDraw;
        let mut third_points = None;
        if rules::player_draws(player_total) {
            self.emit("Player draws");
            let card = self.draw()?;
            self.player.add_card(card);
            third_points = Some(card.points());
        } else {
            self.emit("Player stands");
        }

        // The banker's decision is only made once the player's is final.
        self.state = GameState::BankerDraw;
        if rules::banker_draws(banker_total, third_points) {
            self.emit("Banker draws");
            let card = self.draw()?;
            self.banker.add_card(card);
        } else {
            self.emit("Banker stands");
        }

        Ok(self.declare_winner())
    }

    /// Takes the next card, aborting the hand if the source is exhausted.
    fn draw(&mut self) -> Result<Card, DealError> {
        match self.source.next_card() {
            Some(card) => Ok(card),
            None => {
                self.state = GameState::Aborted;
                Err(DealError::Exhausted)
            }
        }
    }

    /// Totals both hands, declares the winner, and builds the outcome.
    fn declare_winner(&mut self) -> Outcome {
        let player_total = self.player.total();
        let banker_total = self.banker.total();
        let tag = if self.natural { "Natural " } else { "" };

        let (winner, description) = match player_total.cmp(&banker_total) {
            Ordering::Greater => (
                Winner::Player,
                format!("Player, {tag}{player_total} over {banker_total}"),
            ),
            Ordering::Less => (
                Winner::Banker,
                format!("Banker, {tag}{banker_total} over {player_total}"),
            ),
            Ordering::Equal => (Winner::Tie, format!("Tie, {tag}{player_total}")),
        };

        self.state = GameState::Evaluated;
        self.winner = winner;
        self.descr.clone_from(&description);
        self.emit(&description);

        Outcome {
            winner,
            natural: self.natural,
            player_total,
            banker_total,
            description,
        }
    }

    fn emit(&mut self, text: &str) {
        self.log.message(text);
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the banker's hand.
    #[must_use]
    pub const fn banker_hand(&self) -> &Hand {
        &self.banker
    }

    /// Returns the player's current total.
    #[must_use]
    pub fn player_total(&self) -> u8 {
        self.player.total()
    }

    /// Returns the banker's current total.
    #[must_use]
    pub fn banker_total(&self) -> u8 {
        self.banker.total()
    }

    /// Returns the number of cards left in the source.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.source.remaining()
    }

    /// Returns whether the initial deal produced a natural.
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        self.natural
    }

    /// Returns the declared winner, or [`Winner::Undetermined`] if the hand
    /// has not been evaluated.
    #[must_use]
    pub const fn winner(&self) -> Winner {
        self.winner
    }

    /// Returns the declared description, empty until the hand is evaluated.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.descr
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }
}
