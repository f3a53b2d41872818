// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(ah.name(), "Ace of Hearts");
//! ```
//!
//! a [Deck] type that can hold one or more 52 cards decks, and the [CardSource]
//! trait used by the game to open shuffled decks and draw cards from them:
//!
//! ```
//! # use holdem_cards::{CardSource, ShoeSource};
//! let mut source = ShoeSource::with_seed(101);
//! let deck = source.new_deck(6).unwrap();
//! let cards = source.draw(deck, 2).unwrap();
//! assert_eq!(cards.len(), 2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod source;
pub use source::{CardSource, DeckHandle, ShoeSource, SourceError};
