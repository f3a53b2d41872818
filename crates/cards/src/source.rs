// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card sources that open shuffled decks and draw cards from them.
use ahash::AHashMap;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::{Card, Deck};

/// A handle to a deck opened by a [CardSource].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckHandle(u32);

impl DeckHandle {
    /// Creates a handle with the given id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for DeckHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card source errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// A shoe must have at least one deck.
    #[error("invalid deck count {0}")]
    InvalidDeckCount(u8),
    /// The deck handle doesn't refer to an open deck.
    #[error("deck {0} is not open")]
    UnknownDeck(DeckHandle),
    /// The deck doesn't have enough cards for the draw.
    #[error("deck {deck} has {remaining} cards left, {requested} requested")]
    Exhausted {
        /// The deck.
        deck: DeckHandle,
        /// Cards requested.
        requested: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
    /// The source cannot serve requests.
    #[error("card source unavailable: {0}")]
    Unavailable(String),
}

/// A source of shuffled decks.
///
/// Draws are without replacement and a deck is reshuffled only when a new deck
/// is opened.
pub trait CardSource {
    /// Opens a new shuffled shoe made of `deck_count` decks.
    fn new_deck(&mut self, deck_count: u8) -> Result<DeckHandle, SourceError>;

    /// Draws `count` cards in order from an open deck.
    fn draw(&mut self, deck: DeckHandle, count: usize) -> Result<Vec<Card>, SourceError>;

    /// Releases a deck, further draws from it fail.
    fn close_deck(&mut self, _deck: DeckHandle) {}
}

/// A local card source that shuffles decks with a random generator.
#[derive(Debug)]
pub struct ShoeSource<R = StdRng> {
    rng: R,
    decks: AHashMap<DeckHandle, Deck>,
    last_id: u32,
}

impl ShoeSource<StdRng> {
    /// Creates a source seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a source with a seeded generator for reproducible shuffles.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ShoeSource<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: rand::Rng> ShoeSource<R> {
    /// Creates a source with user initialized randomness.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            decks: AHashMap::default(),
            last_id: 0,
        }
    }

    /// Number of cards left in a deck.
    pub fn remaining(&self, deck: DeckHandle) -> Option<usize> {
        self.decks.get(&deck).map(Deck::count)
    }
}

impl<R: rand::Rng> CardSource for ShoeSource<R> {
    fn new_deck(&mut self, deck_count: u8) -> Result<DeckHandle, SourceError> {
        if deck_count == 0 {
            return Err(SourceError::InvalidDeckCount(deck_count));
        }

        let mut deck = Deck::with_decks(deck_count);
        deck.shuffle(&mut self.rng);

        self.last_id = self.last_id.wrapping_add(1);
        let handle = DeckHandle::new(self.last_id);
        self.decks.insert(handle, deck);

        Ok(handle)
    }

    fn draw(&mut self, handle: DeckHandle, count: usize) -> Result<Vec<Card>, SourceError> {
        let deck = self
            .decks
            .get_mut(&handle)
            .ok_or(SourceError::UnknownDeck(handle))?;

        let remaining = deck.count();
        deck.deal_many(count).ok_or(SourceError::Exhausted {
            deck: handle,
            requested: count,
            remaining,
        })
    }

    fn close_deck(&mut self, deck: DeckHandle) {
        self.decks.remove(&deck);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn draws_without_replacement() {
        let mut source = ShoeSource::with_seed(42);
        let deck = source.new_deck(1).unwrap();

        let mut seen = HashSet::default();
        for _ in 0..26 {
            for card in source.draw(deck, 2).unwrap() {
                assert!(seen.insert(card), "card {card} drawn twice");
            }
        }

        assert_eq!(seen.len(), Deck::SIZE);
        assert_eq!(source.remaining(deck), Some(0));
    }

    #[test]
    fn exhausted_deck() {
        let mut source = ShoeSource::with_seed(1);
        let deck = source.new_deck(1).unwrap();
        source.draw(deck, 50).unwrap();

        let err = source.draw(deck, 3).unwrap_err();
        assert_eq!(
            err,
            SourceError::Exhausted {
                deck,
                requested: 3,
                remaining: 2
            }
        );

        // A failed draw doesn't consume cards.
        assert_eq!(source.draw(deck, 2).unwrap().len(), 2);
    }

    #[test]
    fn closed_and_invalid_decks() {
        let mut source = ShoeSource::with_seed(3);
        assert_eq!(source.new_deck(0), Err(SourceError::InvalidDeckCount(0)));

        let deck = source.new_deck(6).unwrap();
        assert_eq!(source.remaining(deck), Some(6 * Deck::SIZE));

        source.close_deck(deck);
        assert_eq!(source.draw(deck, 1), Err(SourceError::UnknownDeck(deck)));
    }

    #[test]
    fn seeded_sources_shuffle_alike() {
        let mut s1 = ShoeSource::with_seed(9);
        let mut s2 = ShoeSource::with_seed(9);
        let (d1, d2) = (s1.new_deck(2).unwrap(), s2.new_deck(2).unwrap());
        assert_eq!(s1.draw(d1, 10).unwrap(), s2.draw(d2, 10).unwrap());

        // Each new deck is reshuffled.
        let d3 = s1.new_deck(2).unwrap();
        assert_ne!(d1, d3);
    }
}
