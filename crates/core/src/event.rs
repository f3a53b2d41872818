// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table events and read-only snapshots for rendering a round.
use serde::{Deserialize, Serialize};

use holdem_cards::Card;

use crate::{
    ActionError, ActionOutcome, Chips, HoleCards, RoundOutcome, Seat, SeatAction, ShowdownHand,
    Street,
};

/// A seat state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    /// The seat name.
    pub name: String,
    /// The seat stack.
    pub chips: Chips,
    /// The chips the seat put in the pot in the current street.
    pub bet: Chips,
    /// The last seat action in the current street.
    pub action: SeatAction,
    /// The seat hole cards.
    pub hole_cards: HoleCards,
    /// The seat has folded.
    pub is_folded: bool,
    /// The seat is all in.
    pub is_all_in: bool,
}

impl From<&Seat> for SeatSnapshot {
    fn from(seat: &Seat) -> Self {
        Self {
            name: seat.name().to_string(),
            chips: seat.chips(),
            bet: seat.bet(),
            action: seat.action(),
            hole_cards: seat.hole_cards(),
            is_folded: seat.is_folded(),
            is_all_in: seat.is_all_in(),
        }
    }
}

/// A table state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// The current street, `None` before the hole cards are dealt.
    pub street: Option<Street>,
    /// The community cards.
    pub community: Vec<Card>,
    /// The chips in the pot.
    pub pot: Chips,
    /// The seats in seat order.
    pub seats: Vec<SeatSnapshot>,
}

impl TableSnapshot {
    /// Creates a snapshot of the table.
    pub fn new(street: Option<Street>, seats: &[Seat], community: &[Card], pot: Chips) -> Self {
        Self {
            street,
            community: community.to_vec(),
            pot,
            seats: seats.iter().map(SeatSnapshot::from).collect(),
        }
    }

    /// Returns the seats that haven't folded.
    pub fn live_seats(&self) -> impl Iterator<Item = &SeatSnapshot> {
        self.seats.iter().filter(|s| !s.is_folded)
    }
}

/// Why a seat was skipped in a street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The seat folded in a previous street.
    Folded,
    /// The seat has no chips left.
    OutOfChips,
}

/// An event emitted while a round is played.
#[derive(Debug, Clone)]
pub enum TableEvent {
    /// A round started.
    RoundStarted(TableSnapshot),
    /// Cards were dealt for a street, hole cards for the pre-flop.
    Dealt {
        /// The street.
        street: Street,
        /// The table after the deal.
        snapshot: TableSnapshot,
    },
    /// A seat was skipped.
    SeatSkipped {
        /// The seat index.
        seat: usize,
        /// The seat name.
        name: String,
        /// Why the seat was skipped.
        reason: SkipReason,
    },
    /// A seat acted.
    ActionTaken {
        /// The seat index.
        seat: usize,
        /// The seat name.
        name: String,
        /// The action outcome.
        outcome: ActionOutcome,
        /// The chips moved from the seat stack into the pot.
        delta: Chips,
        /// The table after the action.
        snapshot: TableSnapshot,
    },
    /// A seat action was rejected, the seat acts again.
    ActionRejected {
        /// The seat index.
        seat: usize,
        /// The seat name.
        name: String,
        /// The rejection reason.
        error: ActionError,
    },
    /// The live hands were compared.
    Showdown(Vec<ShowdownHand>),
    /// The round has ended.
    Settled(RoundOutcome),
}

/// Receives the events of a round.
pub trait TableObserver {
    /// Handles a table event.
    fn on_event(&mut self, event: &TableEvent);
}

/// An observer that ignores all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl TableObserver for NullObserver {
    fn on_event(&mut self, _event: &TableEvent) {}
}

impl TableObserver for Vec<TableEvent> {
    fn on_event(&mut self, event: &TableEvent) {
        self.push(event.clone());
    }
}
