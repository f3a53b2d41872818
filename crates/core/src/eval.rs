// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand strength evaluation.
//!
//! The table compares hands through the [HandEvaluator] trait so that the
//! evaluation can be replaced without touching the betting or the pot logic.
//! The default [HighCardEvaluator] scores a hand with its highest card value:
//! it ignores suits, pairs, straights, and flushes, so many hands tie.
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::{Card, Rank};

/// A comparable hand strength, higher is better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StrengthValue(u32);

impl StrengthValue {
    /// Creates a strength with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The strength value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StrengthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Evaluates the strength of a seat hand.
pub trait HandEvaluator {
    /// Evaluates the hole cards together with the community cards.
    fn evaluate(&self, hole_cards: &[Card], community: &[Card]) -> StrengthValue;
}

/// Evaluates a hand as the value of its highest card.
///
/// Number cards are worth their face value, Jack, Queen, and King are worth
/// 10, and Ace is worth 11.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighCardEvaluator;

impl HighCardEvaluator {
    /// The value of a single card.
    pub fn card_value(card: Card) -> u32 {
        match card.rank() {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            rank => rank as u32 + 2,
        }
    }
}

impl HandEvaluator for HighCardEvaluator {
    fn evaluate(&self, hole_cards: &[Card], community: &[Card]) -> StrengthValue {
        hole_cards
            .iter()
            .chain(community)
            .map(|&c| Self::card_value(c))
            .max()
            .map(StrengthValue)
            .unwrap_or_default()
    }
}
