// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pot accounting for a round.
//!
//! The ledger only moves chips between the seats stacks, the pot, and the
//! forfeited bucket, so `pot + forfeited + stacks` stays constant across all
//! operations. A seat street bet is the tally of chips it moved into the pot
//! in the current street.
use log::debug;

use crate::{Chips, LedgerError, Seat};

/// The result of a pot split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// The chips awarded to each winner.
    pub share: Chips,
    /// The chips left over by the integer division.
    pub remainder: Chips,
}

/// The pot ledger for a round.
#[derive(Debug, Default, Clone)]
pub struct PotLedger {
    pot: Chips,
    forfeited: Chips,
}

impl PotLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The chips in the pot.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The chips dropped by splits that couldn't be divided evenly.
    pub fn forfeited(&self) -> Chips {
        self.forfeited
    }

    /// The total chips accounted by the ledger and the seats, `None` if the
    /// total overflows.
    pub fn total_in_play(&self, seats: &[Seat]) -> Option<Chips> {
        seats
            .iter()
            .map(Seat::chips)
            .try_fold(self.pot.checked_add(self.forfeited)?, Chips::checked_add)
    }

    /// Clears the seats street bets, the pot and stacks are not touched.
    pub fn reset_for_street(&mut self, seats: &mut [Seat]) {
        seats.iter_mut().for_each(Seat::start_street);
    }

    /// Moves `amount` chips from the seat stack into the pot.
    pub fn contribute(&mut self, seat: &mut Seat, amount: Chips) -> Result<(), LedgerError> {
        if amount > seat.chips() {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                stack: seat.chips(),
            });
        }

        let pot = self
            .pot
            .checked_add(amount)
            .ok_or(LedgerError::PotOverflow {
                amount,
                pot: self.pot,
            })?;

        seat.take_chips(amount);
        self.pot = pot;

        Ok(())
    }

    /// Moves `amount` chips from the pot into the seat stack.
    pub fn award(&mut self, seat: &mut Seat, amount: Chips) -> Result<(), LedgerError> {
        if amount > self.pot {
            return Err(LedgerError::PotOverdraw {
                amount,
                pot: self.pot,
            });
        }

        self.pot -= amount;
        seat.add_chips(amount);

        debug!("Awarded {amount} to {}", seat.name());

        Ok(())
    }

    /// Moves the whole pot into the seat stack and returns the amount.
    pub fn award_all(&mut self, seat: &mut Seat) -> Chips {
        let amount = self.pot;
        self.pot = Chips::ZERO;
        seat.add_chips(amount);
        amount
    }

    /// Splits the pot evenly between the `winners` seats indices.
    ///
    /// The remainder of the division is not awarded to anyone and is moved to
    /// the forfeited chips.
    pub fn split(&mut self, seats: &mut [Seat], winners: &[usize]) -> Result<Split, LedgerError> {
        if winners.is_empty() {
            return Err(LedgerError::NoWinners);
        }

        if let Some(&idx) = winners.iter().find(|&&idx| idx >= seats.len()) {
            return Err(LedgerError::UnknownSeat(idx));
        }

        let count = winners.len() as u32;
        let share = self.pot / count;
        let remainder = self.pot % count;

        for &idx in winners {
            self.award(&mut seats[idx], share)?;
        }

        self.pot -= remainder;
        self.forfeited += remainder;

        Ok(Split { share, remainder })
    }
}
