// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table seat types.
use serde::{Deserialize, Serialize};

use holdem_cards::Card;

use crate::Chips;

/// The seat hole cards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleCards {
    /// The seat has no cards.
    #[default]
    None,
    /// The seat cards.
    Cards(Card, Card),
}

impl HoleCards {
    /// Returns the cards as a vector, empty if there are no cards.
    pub fn to_vec(&self) -> Vec<Card> {
        match self {
            HoleCards::None => Vec::new(),
            HoleCards::Cards(c1, c2) => vec![*c1, *c2],
        }
    }
}

/// The last action a seat took in the current street.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatAction {
    /// The seat hasn't acted yet.
    #[default]
    Waiting,
    /// The seat called.
    Called,
    /// The seat raised.
    Raised,
    /// The seat folded.
    Folded,
    /// The seat called with all its chips.
    AllIn,
    /// The seat was skipped because it had no chips or had folded.
    Skipped,
}

impl SeatAction {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            SeatAction::Waiting => "",
            SeatAction::Called => "CALL",
            SeatAction::Raised => "RAISE",
            SeatAction::Folded => "FOLD",
            SeatAction::AllIn => "ALL-IN",
            SeatAction::Skipped => "SKIP",
        }
    }
}

/// A table seat.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    chips: Chips,
    bet: Chips,
    contributed: Chips,
    hole_cards: HoleCards,
    action: SeatAction,
    folded: bool,
}

impl Seat {
    /// Creates a seat with the given name and stack.
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            bet: Chips::ZERO,
            contributed: Chips::ZERO,
            hole_cards: HoleCards::None,
            action: SeatAction::Waiting,
            folded: false,
        }
    }

    /// This seat name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This seat chips stack.
    pub fn chips(&self) -> Chips {
        self.chips
    }

    /// The chips this seat put in the pot in the current street.
    pub fn bet(&self) -> Chips {
        self.bet
    }

    /// This seat hole cards.
    pub fn hole_cards(&self) -> HoleCards {
        self.hole_cards
    }

    /// The last action in the current street.
    pub fn action(&self) -> SeatAction {
        self.action
    }

    /// Checks if this seat folded in the current round.
    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Checks if this seat put all its chips in the pot in the current round.
    pub fn is_all_in(&self) -> bool {
        !self.folded && self.chips.is_zero() && !self.contributed.is_zero()
    }

    /// Checks if this seat can still win the pot.
    pub fn is_live(&self) -> bool {
        !self.folded
    }

    /// Checks if this seat can act in a street.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.chips.is_zero()
    }

    /// Moves chips from the stack to the street bet.
    pub(crate) fn take_chips(&mut self, amount: Chips) {
        debug_assert!(amount <= self.chips);
        self.chips -= amount;
        self.bet += amount;
        self.contributed += amount;
    }

    pub(crate) fn add_chips(&mut self, amount: Chips) {
        self.chips += amount;
    }

    pub(crate) fn set_action(&mut self, action: SeatAction) {
        self.action = action;
    }

    pub(crate) fn deal(&mut self, c1: Card, c2: Card) {
        self.hole_cards = HoleCards::Cards(c1, c2);
    }

    /// Sets this seat in fold state, a folded seat never acts again in the round.
    pub(crate) fn fold(&mut self) {
        self.folded = true;
        self.action = SeatAction::Folded;
    }

    /// Reset state for a new round, the stack carries over.
    pub(crate) fn start_round(&mut self) {
        self.bet = Chips::ZERO;
        self.contributed = Chips::ZERO;
        self.hole_cards = HoleCards::None;
        self.action = SeatAction::Waiting;
        self.folded = false;
    }

    /// Reset state for a new street.
    pub(crate) fn start_street(&mut self) {
        self.bet = Chips::ZERO;
        if !self.folded {
            self.action = SeatAction::Waiting;
        }
    }
}
