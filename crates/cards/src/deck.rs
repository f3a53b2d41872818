// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and decks definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A playing card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards deck, possibly made of multiple 52 cards decks (a shoe).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a single deck.
    pub const SIZE: usize = 52;

    /// Creates an ordered shoe with `count` 52 cards decks.
    pub fn with_decks(count: u8) -> Self {
        let cards = (0..count)
            .flat_map(|_| Suit::suits().flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s))))
            .collect();
        Self { cards }
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `count` cards in order, leaves the deck untouched if there are not
    /// enough cards.
    pub fn deal_many(&mut self, count: usize) -> Option<Vec<Card>> {
        if count > self.cards.len() {
            return None;
        }

        let at = self.cards.len() - count;
        let mut cards = self.cards.split_off(at);
        // Cards are dealt from the top that is the end of the vector.
        cards.reverse();
        Some(cards)
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn deck_has_unique_cards() {
        let mut deck = Deck::with_decks(1);
        deck.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.deal_many(Deck::SIZE).unwrap();
        let unique = cards.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);
        assert_eq!(deck.count(), 0);
    }

    #[test]
    fn shoe_with_many_decks() {
        let mut deck = Deck::with_decks(6);
        assert_eq!(deck.count(), 6 * Deck::SIZE);

        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        let cards = deck.deal_many(6 * Deck::SIZE).unwrap();
        assert_eq!(cards.iter().filter(|c| **c == ace_spades).count(), 6);
    }

    #[test]
    fn deal_many_from_top() {
        let mut deck = Deck::with_decks(1);
        let top = deck.clone().deal_many(1).unwrap()[0];

        let cards = deck.deal_many(3).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], top);
        assert_eq!(deck.count(), Deck::SIZE - 3);

        // Not enough cards leaves the deck untouched.
        assert!(deck.deal_many(Deck::SIZE).is_none());
        assert_eq!(deck.count(), Deck::SIZE - 3);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");
        assert_eq!(format!("{c:?}"), "Card(5S)");
    }
}
