//! deck-vector: playing-card and 2D vector value types
//!
//! Goals:
//! - Small value types with explicit, testable ordering rules
//! - A 52-card deck that only ever reorders its cards
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: sort a shuffled deck
//! ```
//! use deck_vector::cards::{Card, Rank, Suit};
//! use deck_vector::deck::{cards_by_suit, Deck};
//!
//! let mut deck = Deck::standard();
//! deck.shuffle_seeded(7);
//! deck.sort(true);
//! assert_eq!(deck.get(0).unwrap(), Card::new(Rank::Two, Suit::Spades));
//! assert_eq!(cards_by_suit(&deck, Suit::Clubs).len(), 13);
//! ```
//!
//! ## Quick start: vectors
//! ```
//! use deck_vector::vector::Vector;
//!
//! let v = Vector::new(3, 4);
//! assert_eq!(v.magnitude(), 5.0);
//! assert!(v.normalized().is_ok());
//! assert!(Vector::zero().normalized().is_err());
//! ```
//!
//! ## TUI
//! Browse the deck interactively with:
//! ```sh
//! cargo run --bin deck-vector
//! ```

pub mod cards;
pub mod deck;
pub mod error;
pub mod tui;
pub mod vector;

pub use error::ErrorKind;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
