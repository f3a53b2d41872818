// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem terminal game for two seats.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use std::io;

use holdem_cards::ShoeSource;
use holdem_core::{Chips, Strategy, Table, TableConfig};

pub mod terminal;
use terminal::{Console, HumanPlayer, PlayerKind, SessionConfig};

#[derive(Debug, Parser)]
struct Cli {
    /// The first seat name.
    #[clap(long, default_value = "Player 1")]
    first_name: String,
    /// The second seat name.
    #[clap(long, default_value = "Player 2")]
    second_name: String,
    /// Who plays the first seat: human, call, random, or high-card.
    #[clap(long, default_value = "human")]
    first: PlayerKind,
    /// Who plays the second seat: human, call, random, or high-card.
    #[clap(long, default_value = "human")]
    second: PlayerKind,
    /// Starting chips for each seat.
    #[clap(
        long,
        short,
        default_value_t = 1_000,
        value_parser = clap::value_parser!(u32).range(1..=Table::MAX_STARTING_CHIPS as i64)
    )]
    chips: u32,
    /// Number of decks in the shoe.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=8))]
    decks: u8,
    /// Maximum number of rounds.
    #[clap(long, short)]
    rounds: Option<u32>,
    /// Seed for reproducible shuffles.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Log verbosity, repeat for more logs.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = TableConfig {
        seats: vec![cli.first_name, cli.second_name],
        starting_chips: Chips::new(cli.chips),
        deck_count: cli.decks,
    };

    let mut table = Table::new(config)?;
    let mut source = match cli.seed {
        Some(seed) => ShoeSource::with_seed(seed),
        None => ShoeSource::new(),
    };

    let console = Console::shared(io::stdin().lock(), io::stdout());
    let kinds = [cli.first, cli.second];
    let mut players = kinds
        .iter()
        .enumerate()
        .map(|(seat, kind)| match kind {
            PlayerKind::Human => Box::new(HumanPlayer::new(console.clone())) as Box<dyn Strategy>,
            PlayerKind::Bot(bot) => {
                bot.strategy(cli.seed.map(|s| s.wrapping_add(seat as u64 + 1)))
            }
        })
        .collect::<Vec<_>>();

    let session = SessionConfig {
        max_rounds: cli.rounds,
        confirm: kinds.contains(&PlayerKind::Human),
    };

    terminal::run(&mut table, &mut source, &mut players, console, session)?;

    Ok(())
}
