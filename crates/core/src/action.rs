// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player actions and the strategy interface used to request them.
use serde::{Deserialize, Serialize};

use holdem_cards::Card;

use crate::{ActionError, Chips, HoleCards, Street};

/// A Player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Match the street highest bet, or go all in if the stack is short.
    Call,
    /// Raise the street highest bet by the given amount.
    Raise(Chips),
    /// Give up the round.
    Fold,
}

/// A request for a seat to act.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    /// The seat index.
    pub seat: usize,
    /// The seat name.
    pub name: String,
    /// The current street.
    pub street: Street,
    /// The seat stack.
    pub chips: Chips,
    /// The chips the seat put in the pot in this street.
    pub bet: Chips,
    /// The street highest bet.
    pub highest_bet: Chips,
    /// The chips in the pot.
    pub pot: Chips,
    /// The seat hole cards.
    pub hole_cards: HoleCards,
    /// The community cards.
    pub community: Vec<Card>,
}

impl ActionRequest {
    /// The chips needed to match the highest bet.
    pub fn to_call(&self) -> Chips {
        self.highest_bet - self.bet
    }

    /// The largest raise increment the stack can cover.
    pub fn max_raise(&self) -> Chips {
        self.chips - self.to_call()
    }

    /// Checks if the seat can raise by at least one chip.
    pub fn can_raise(&self) -> bool {
        !self.max_raise().is_zero()
    }
}

/// Chooses the actions for a seat.
pub trait Strategy {
    /// Returns the action for the request, or `None` if no more actions are
    /// available (for example the input has been closed).
    fn execute(&mut self, req: &ActionRequest) -> Option<PlayerAction>;

    /// Called when the action returned by `execute` was rejected, the seat will
    /// be asked to act again.
    fn rejected(&mut self, _req: &ActionRequest, _err: &ActionError) {}
}
