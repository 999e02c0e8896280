//! CLI baccarat example.
//!
//! Shuffles a fresh deck for every hand and feeds it to the engine. The
//! shuffle happens out here, not in the engine; the engine only ever consumes
//! the ordering it is given.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bacrs::{Card, CardSource, DealerLog, Game, Rank, Suit};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

struct StdoutLog;

impl DealerLog for StdoutLog {
    fn message(&mut self, text: &str) {
        println!("  {text}");
    }
}

fn shuffled_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards.shuffle(rng);
    cards
}

fn render_hand(cards: &[Card]) -> String {
    let rendered: Vec<String> = cards.iter().map(ToString::to_string).collect();
    rendered.join(" ")
}

fn main() {
    println!("Baccarat CLI example (press Enter to deal, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() || line.trim() == "q" {
            println!("Goodbye.");
            break;
        }

        let source = CardSource::new(shuffled_deck(&mut rng));
        let mut game = Game::with_log(source, Box::new(StdoutLog));

        match game.play_hand() {
            Ok(outcome) => {
                println!("Player: {}", render_hand(game.player_hand().cards()));
                println!("Banker: {}", render_hand(game.banker_hand().cards()));
                println!("Result: {}", outcome.description);
            }
            Err(err) => println!("Misdeal: {err:?}"),
        }
    }
}
