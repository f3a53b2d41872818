// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Test helpers: scripted strategies and a card source with a fixed order.
use std::collections::VecDeque;

use holdem_cards::{Card, CardSource, DeckHandle, Rank, SourceError, Suit};

use crate::{ActionRequest, Chips, PlayerAction, Seat, Strategy};

/// A strategy that plays a fixed list of actions.
#[derive(Debug, Default)]
pub struct Scripted {
    actions: VecDeque<PlayerAction>,
}

impl Scripted {
    pub fn new(actions: &[PlayerAction]) -> Self {
        Self {
            actions: actions.iter().copied().collect(),
        }
    }
}

impl Strategy for Scripted {
    fn execute(&mut self, _req: &ActionRequest) -> Option<PlayerAction> {
        self.actions.pop_front()
    }
}

/// Boxes one scripted strategy for each actions list.
pub fn players(scripts: &[&[PlayerAction]]) -> Vec<Box<dyn Strategy>> {
    scripts
        .iter()
        .map(|s| Box::new(Scripted::new(s)) as Box<dyn Strategy>)
        .collect()
}

/// A card source that deals cards in the given order.
#[derive(Debug)]
pub struct FixedSource {
    cards: VecDeque<Card>,
    fail_at_draw: Option<usize>,
    draws: usize,
    pub opened: usize,
    pub closed: usize,
}

impl FixedSource {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
            fail_at_draw: None,
            draws: 0,
            opened: 0,
            closed: 0,
        }
    }

    /// Fails the draw with the given zero based index.
    pub fn failing_at(mut self, draw: usize) -> Self {
        self.fail_at_draw = Some(draw);
        self
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl CardSource for FixedSource {
    fn new_deck(&mut self, _deck_count: u8) -> Result<DeckHandle, SourceError> {
        self.opened += 1;
        Ok(DeckHandle::new(self.opened as u32))
    }

    fn draw(&mut self, deck: DeckHandle, count: usize) -> Result<Vec<Card>, SourceError> {
        let draw = self.draws;
        self.draws += 1;

        if self.fail_at_draw == Some(draw) {
            return Err(SourceError::Unavailable("connection reset".to_string()));
        }

        if count > self.cards.len() {
            return Err(SourceError::Exhausted {
                deck,
                requested: count,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..count).collect())
    }

    fn close_deck(&mut self, _deck: DeckHandle) {
        self.closed += 1;
    }
}

/// Cards with the given ranks and cycling suits.
pub fn cards(ranks: &[Rank]) -> Vec<Card> {
    let suits = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
    ranks
        .iter()
        .zip(suits.iter().cycle())
        .map(|(&r, &s)| Card::new(r, s))
        .collect()
}

/// The deal order for two seats: hole cards for seat 0 and 1, then the board.
pub fn deal_order(hole0: &[Rank], hole1: &[Rank], board: &[Rank]) -> Vec<Card> {
    let mut deck = cards(hole0);
    deck.extend(cards(hole1));
    deck.extend(cards(board));
    deck
}

/// Seats with the given stacks named `Player 1`, `Player 2`, ...
pub fn seats(stacks: &[u32]) -> Vec<Seat> {
    stacks
        .iter()
        .enumerate()
        .map(|(idx, &chips)| Seat::new(format!("Player {}", idx + 1), Chips::new(chips)))
        .collect()
}
