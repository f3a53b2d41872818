// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Error types for ledger operations, player actions, and rounds.
use thiserror::Error;

use holdem_cards::SourceError;

use crate::Chips;

/// Pot ledger errors, a failed operation leaves the ledger unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The seat stack doesn't cover the contribution.
    #[error("insufficient funds: {required} required, stack is {stack}")]
    InsufficientFunds {
        /// Chips required.
        required: Chips,
        /// Chips in the seat stack.
        stack: Chips,
    },
    /// The award is larger than the pot.
    #[error("cannot award {amount} from a pot of {pot}")]
    PotOverdraw {
        /// Chips to award.
        amount: Chips,
        /// Chips in the pot.
        pot: Chips,
    },
    /// A split needs at least one winner.
    #[error("pot split without winners")]
    NoWinners,
    /// The seat index is not at the table.
    #[error("unknown seat {0}")]
    UnknownSeat(usize),
    /// The contribution would overflow the pot.
    #[error("cannot add {amount} to a pot of {pot}")]
    PotOverflow {
        /// Chips to add.
        amount: Chips,
        /// Chips in the pot.
        pot: Chips,
    },
}

/// A rejected player action, the seat is asked to act again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Malformed or out of range action.
    #[error("invalid action: {0}")]
    InputRejected(String),
    /// The raise requires more chips than the seat has.
    #[error("not enough chips to raise: {required} required, stack is {stack}")]
    InsufficientFunds {
        /// Chips the raise requires.
        required: Chips,
        /// Chips in the seat stack.
        stack: Chips,
    },
}

/// Errors that abandon a round or prevent a table from starting.
#[derive(Debug, Error)]
pub enum TableError {
    /// The card source failed, the round is abandoned.
    #[error(transparent)]
    SourceUnavailable(#[from] SourceError),
    /// A seat strategy stopped answering action requests.
    #[error("no action from {seat}, input closed")]
    InputClosed {
        /// The seat name.
        seat: String,
    },
    /// A ledger precondition was violated.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// The table must have exactly two seats.
    #[error("a table needs 2 seats, got {0}")]
    SeatCount(usize),
    /// One strategy is needed for each seat.
    #[error("{strategies} strategies for {seats} seats")]
    StrategyCount {
        /// Number of seats.
        seats: usize,
        /// Number of strategies.
        strategies: usize,
    },
    /// A shoe needs at least one deck.
    #[error("invalid deck count {0}")]
    DeckCount(u8),
    /// The chips at the table don't fit in a chips amount.
    #[error("total chips at the table exceed {max}", max = Chips::MAX)]
    ChipsOverflow,
}

impl TableError {
    /// Checks if the error abandoned a round but leaves the table playable.
    pub fn is_round_scoped(&self) -> bool {
        matches!(
            self,
            TableError::SourceUnavailable(_) | TableError::Ledger(_)
        )
    }
}
