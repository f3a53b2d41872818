// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem automated players and a bot against bot simulator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use log::{debug, info, warn};

use holdem_cards::ShoeSource;
use holdem_core::{Chips, NullObserver, Settlement, Strategy, Table, TableConfig};

pub use holdem_core as core;

mod strategy;
pub use strategy::{AlwaysCall, BotKind, HighCard, RandomStrategy, UnknownBot};

/// Simulator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The table configuration.
    pub table: TableConfig,
    /// Maximum number of rounds to play.
    pub rounds: u32,
    /// The shuffle seed, random if `None`.
    pub seed: Option<u64>,
}

/// The simulation results.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// Settled rounds.
    pub rounds: u32,
    /// Rounds abandoned because of a card source failure.
    pub abandoned: u32,
    /// Rounds won by each seat, a split counts for every winner.
    pub wins: Vec<u32>,
    /// Rounds settled at showdown.
    pub showdowns: u32,
    /// Rounds with a split pot.
    pub splits: u32,
    /// Chips lost to split remainders.
    pub forfeited: Chips,
    /// Final seat names and stacks.
    pub stacks: Vec<(String, Chips)>,
}

/// Plays rounds until the limit is reached or a seat runs out of chips.
///
/// The factory is called with each seat index to create the seat strategy.
/// Fails if a strategy stops answering or if the chips on the table are not
/// conserved.
pub fn run<F>(config: Config, factory: F) -> Result<Summary>
where
    F: Fn(usize) -> Box<dyn Strategy>,
{
    let mut table = Table::new(config.table)?;
    let mut source = match config.seed {
        Some(seed) => ShoeSource::with_seed(seed),
        None => ShoeSource::new(),
    };

    let mut players = (0..table.seats().len()).map(factory).collect::<Vec<_>>();
    let initial = table.total_chips();

    let mut summary = Summary {
        wins: vec![0; players.len()],
        ..Summary::default()
    };

    for _ in 0..config.rounds {
        if table.count_with_chips() < Table::SEATS {
            info!("A seat is out of chips, stopping");
            break;
        }

        let outcome = match table.play_round(&mut source, &mut players, &mut NullObserver) {
            Ok(outcome) => outcome,
            Err(e) if e.is_round_scoped() => {
                warn!("Round abandoned: {e}");
                summary.abandoned += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        summary.rounds += 1;
        summary.forfeited += outcome.forfeited;
        if matches!(outcome.settlement, Settlement::Showdown { .. }) {
            summary.showdowns += 1;
        }

        if outcome.is_split() {
            summary.splits += 1;
        }

        for seat in outcome.winners() {
            summary.wins[seat] += 1;
        }

        debug!(
            "Round {} pot {} won by {:?}",
            summary.rounds,
            outcome.pot,
            outcome.payouts.iter().map(|p| &p.name).collect::<Vec<_>>()
        );

        if table.total_chips() + summary.forfeited != initial {
            bail!(
                "Chips not conserved after round {}: {} on the table, {} forfeited, {} at start",
                summary.rounds,
                table.total_chips(),
                summary.forfeited,
                initial
            );
        }
    }

    summary.stacks = table
        .seats()
        .iter()
        .map(|s| (s.name().to_string(), s.chips()))
        .collect();

    info!(
        "Played {} rounds, {} showdowns, {} splits, {} abandoned",
        summary.rounds, summary.showdowns, summary.splits, summary.abandoned
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rounds: u32, seed: u64) -> Config {
        Config {
            table: TableConfig::default(),
            rounds,
            seed: Some(seed),
        }
    }

    #[test]
    fn always_call_plays_every_round() {
        let summary = run(config(50, 1), |_| Box::new(AlwaysCall)).unwrap();

        // Nobody bets, every round goes to showdown with an empty pot.
        assert_eq!(summary.rounds, 50);
        assert_eq!(summary.showdowns, 50);
        assert_eq!(summary.forfeited, Chips::ZERO);
        assert!(
            summary
                .stacks
                .iter()
                .all(|(_, chips)| *chips == TableConfig::STARTING_CHIPS)
        );
    }

    #[test]
    fn mixed_bots_conserve_chips() {
        let summary = run(config(300, 42), |seat| match seat {
            0 => BotKind::Random.strategy(Some(7)),
            _ => BotKind::HighCard.strategy(None),
        })
        .unwrap();

        let total = summary.stacks.iter().map(|(_, c)| *c).sum::<Chips>();
        assert_eq!(total + summary.forfeited, Chips::new(2_000));
        assert!(summary.rounds > 0);
        assert_eq!(summary.abandoned, 0);
    }

    #[test]
    fn invalid_table_is_an_error() {
        let mut config = config(1, 1);
        config.table.deck_count = 0;
        assert!(run(config, |_| Box::new(AlwaysCall)).is_err());
    }
}
