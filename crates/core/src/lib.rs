// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem round engine for a two seats table.
//!
//! A [Table] plays rounds with cards from a [CardSource](holdem_cards::CardSource)
//! and asks a [Strategy] for each seat action. Every round goes through the
//! pre-flop, flop, turn, and river betting streets and ends either when all
//! seats but one fold or at showdown, where a [HandEvaluator] compares the live
//! hands.
//!
//! ```
//! # use holdem_cards::ShoeSource;
//! # use holdem_core::*;
//! struct AlwaysCall;
//!
//! impl Strategy for AlwaysCall {
//!     fn execute(&mut self, _req: &ActionRequest) -> Option<PlayerAction> {
//!         Some(PlayerAction::Call)
//!     }
//! }
//!
//! let mut table = Table::new(TableConfig::default()).unwrap();
//! let mut source = ShoeSource::with_seed(42);
//! let mut players: Vec<Box<dyn Strategy>> = vec![Box::new(AlwaysCall), Box::new(AlwaysCall)];
//!
//! let outcome = table
//!     .play_round(&mut source, &mut players, &mut NullObserver)
//!     .unwrap();
//! assert_eq!(outcome.snapshot.community.len(), 5);
//! assert_eq!(table.total_chips() + outcome.forfeited, Chips::new(2_000));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod action;
pub use action::{ActionRequest, PlayerAction, Strategy};

mod betting;
pub use betting::{ActionOutcome, BettingRound, Street, StreetExit};

mod chips;
pub use chips::Chips;

mod config;
pub use config::TableConfig;

mod error;
pub use error::{ActionError, LedgerError, TableError};

mod eval;
pub use eval::{HandEvaluator, HighCardEvaluator, StrengthValue};

mod event;
pub use event::{NullObserver, SeatSnapshot, SkipReason, TableEvent, TableObserver, TableSnapshot};

mod ledger;
pub use ledger::{PotLedger, Split};

mod round;
pub use round::{Payout, Round, RoundOutcome, RoundState, Settlement, ShowdownHand};

mod seat;
pub use seat::{HoleCards, Seat, SeatAction};

mod table;
pub use table::Table;

#[cfg(test)]
mod testing;
