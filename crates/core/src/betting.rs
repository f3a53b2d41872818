// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Street betting state machine.
//!
//! Each street is a single pass in seat order: every seat that has not folded
//! and has chips acts once, a raise doesn't give earlier seats another turn.
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::Card;

use crate::{
    ActionError, ActionRequest, Chips, LedgerError, PlayerAction, PotLedger, Seat, SeatAction,
    SkipReason, Strategy, TableError, TableEvent, TableObserver, TableSnapshot,
};

/// A betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Betting after the hole cards are dealt.
    PreFlop,
    /// Betting after the first three community cards.
    Flop,
    /// Betting after the fourth community card.
    Turn,
    /// Betting after the fifth community card.
    River,
}

impl Street {
    /// All streets in order.
    pub const ALL: [Street; 4] = [Street::PreFlop, Street::Flop, Street::Turn, Street::River];

    /// Number of community cards dealt when entering this street.
    pub fn community_cards(&self) -> usize {
        match self {
            Street::PreFlop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    /// The street name.
    pub fn name(&self) -> &'static str {
        match self {
            Street::PreFlop => "Pre-flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The outcome of an accepted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The seat matched the highest bet paying the given chips.
    Called(Chips),
    /// The seat couldn't match the highest bet and put all its chips in.
    AllIn(Chips),
    /// The seat raised.
    Raised {
        /// The new street highest bet.
        to: Chips,
        /// The chips paid for the raise.
        paid: Chips,
    },
    /// The seat folded.
    Folded,
}

impl ActionOutcome {
    /// The chips this action moved into the pot.
    pub fn chips(&self) -> Chips {
        match self {
            ActionOutcome::Called(c) | ActionOutcome::AllIn(c) => *c,
            ActionOutcome::Raised { paid, .. } => *paid,
            ActionOutcome::Folded => Chips::ZERO,
        }
    }
}

/// How a street ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetExit {
    /// All seats but one folded, the winner takes the pot without showdown.
    AllFolded {
        /// The index of the only seat left.
        winner: usize,
    },
    /// All seats acted, move to the next street or to showdown.
    StreetComplete,
}

/// The betting state for one street.
#[derive(Debug)]
pub struct BettingRound {
    street: Street,
    highest_bet: Chips,
}

impl BettingRound {
    /// Creates the betting state for a street.
    pub fn new(street: Street) -> Self {
        Self {
            street,
            highest_bet: Chips::ZERO,
        }
    }

    /// The street highest bet.
    pub fn highest_bet(&self) -> Chips {
        self.highest_bet
    }

    /// Applies a seat action.
    ///
    /// A call that the stack cannot cover puts all the seat chips in the pot.
    /// A raise that the stack cannot cover is rejected and leaves all the state
    /// unchanged.
    pub fn apply(
        &mut self,
        ledger: &mut PotLedger,
        seat: &mut Seat,
        action: PlayerAction,
    ) -> Result<ActionOutcome, ActionError> {
        if seat.is_folded() {
            return Err(ActionError::InputRejected(format!(
                "{} has already folded",
                seat.name()
            )));
        }

        match action {
            PlayerAction::Call => {
                let required = self.highest_bet - seat.bet();
                if seat.chips() >= required {
                    Self::contribute(ledger, seat, required)?;
                    seat.set_action(SeatAction::Called);
                    Ok(ActionOutcome::Called(required))
                } else {
                    let stack = seat.chips();
                    Self::contribute(ledger, seat, stack)?;
                    seat.set_action(SeatAction::AllIn);
                    Ok(ActionOutcome::AllIn(stack))
                }
            }
            PlayerAction::Raise(amount) => {
                if amount.is_zero() {
                    return Err(ActionError::InputRejected(
                        "raise amount must be positive".to_string(),
                    ));
                }

                let to = self.highest_bet + amount;
                let required = to - seat.bet();
                if required > seat.chips() {
                    return Err(ActionError::InsufficientFunds {
                        required,
                        stack: seat.chips(),
                    });
                }

                Self::contribute(ledger, seat, required)?;
                seat.set_action(SeatAction::Raised);
                self.highest_bet = to;

                Ok(ActionOutcome::Raised { to, paid: required })
            }
            PlayerAction::Fold => {
                seat.fold();
                Ok(ActionOutcome::Folded)
            }
        }
    }

    /// Runs the street betting pass.
    ///
    /// Clears the street bets, then asks each seat that can act for an action
    /// until it is accepted. Returns early when a single seat is left.
    pub fn run(
        &mut self,
        seats: &mut [Seat],
        ledger: &mut PotLedger,
        community: &[Card],
        players: &mut [Box<dyn Strategy>],
        observer: &mut dyn TableObserver,
    ) -> Result<StreetExit, TableError> {
        if players.len() != seats.len() {
            return Err(TableError::StrategyCount {
                seats: seats.len(),
                strategies: players.len(),
            });
        }

        ledger.reset_for_street(seats);
        self.highest_bet = Chips::ZERO;

        for idx in 0..seats.len() {
            if let Some(winner) = Self::sole_live_seat(seats) {
                return Ok(StreetExit::AllFolded { winner });
            }

            let seat = &mut seats[idx];
            if !seat.can_act() {
                let reason = if seat.is_folded() {
                    SkipReason::Folded
                } else {
                    seat.set_action(SeatAction::Skipped);
                    SkipReason::OutOfChips
                };

                debug!("{} skipped in {}: {reason:?}", seat.name(), self.street);
                observer.on_event(&TableEvent::SeatSkipped {
                    seat: idx,
                    name: seat.name().to_string(),
                    reason,
                });
                continue;
            }

            let outcome = loop {
                let req = self.request(idx, &seats[idx], ledger.pot(), community);
                let Some(action) = players[idx].execute(&req) else {
                    return Err(TableError::InputClosed { seat: req.name });
                };

                match self.apply(ledger, &mut seats[idx], action) {
                    Ok(outcome) => break outcome,
                    Err(error) => {
                        info!("{} action {action:?} rejected: {error}", req.name);
                        players[idx].rejected(&req, &error);
                        observer.on_event(&TableEvent::ActionRejected {
                            seat: idx,
                            name: req.name,
                            error,
                        });
                    }
                }
            };

            debug!("{} {outcome:?} in {}", seats[idx].name(), self.street);
            observer.on_event(&TableEvent::ActionTaken {
                seat: idx,
                name: seats[idx].name().to_string(),
                outcome,
                delta: outcome.chips(),
                snapshot: TableSnapshot::new(Some(self.street), seats, community, ledger.pot()),
            });
        }

        Ok(match Self::sole_live_seat(seats) {
            Some(winner) => StreetExit::AllFolded { winner },
            None => StreetExit::StreetComplete,
        })
    }

    fn request(&self, idx: usize, seat: &Seat, pot: Chips, community: &[Card]) -> ActionRequest {
        ActionRequest {
            seat: idx,
            name: seat.name().to_string(),
            street: self.street,
            chips: seat.chips(),
            bet: seat.bet(),
            highest_bet: self.highest_bet,
            pot,
            hole_cards: seat.hole_cards(),
            community: community.to_vec(),
        }
    }

    fn contribute(ledger: &mut PotLedger, seat: &mut Seat, amount: Chips) -> Result<(), ActionError> {
        ledger.contribute(seat, amount).map_err(|e| match e {
            LedgerError::InsufficientFunds { required, stack } => {
                ActionError::InsufficientFunds { required, stack }
            }
            e => ActionError::InputRejected(e.to_string()),
        })
    }

    /// Returns the only seat that hasn't folded if there is one.
    fn sole_live_seat(seats: &[Seat]) -> Option<usize> {
        let mut live = seats.iter().enumerate().filter(|(_, s)| s.is_live());
        match (live.next(), live.next()) {
            (Some((idx, _)), None) => Some(idx),
            _ => None,
        }
    }
}
