// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Plays two bots against each other.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use holdem_bot::{
    BotKind, Config,
    core::{Chips, Table, TableConfig},
};

#[derive(Debug, Parser)]
struct Cli {
    /// Strategy for the first seat: call, random, or high-card.
    #[clap(long, default_value = "random")]
    first: BotKind,
    /// Strategy for the second seat: call, random, or high-card.
    #[clap(long, default_value = "high-card")]
    second: BotKind,
    /// Number of rounds to play.
    #[clap(long, short, default_value_t = 1_000)]
    rounds: u32,
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
    /// Seed for reproducible shuffles and bot decisions.
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

    let kinds = [cli.first, cli.second];

    let config = Config {
        table: TableConfig {
            seats: kinds
                .iter()
                .enumerate()
                .map(|(idx, kind)| format!("{kind} {}", idx + 1))
                .collect(),
            starting_chips: Chips::new(cli.chips),
            deck_count: cli.decks,
        },
        rounds: cli.rounds,
        seed: cli.seed,
    };

    info!("Playing {} against {}", cli.first, cli.second);

    let seed = cli.seed;
    let summary = holdem_bot::run(config, |seat| {
        kinds[seat].strategy(seed.map(|s| s.wrapping_add(seat as u64 + 1)))
    })?;

    println!(
        "Played {} rounds, {} showdowns, {} splits, {} abandoned",
        summary.rounds, summary.showdowns, summary.splits, summary.abandoned
    );

    for ((name, chips), wins) in summary.stacks.iter().zip(&summary.wins) {
        println!("{name}: {chips} chips, {wins} rounds won");
    }

    if !summary.forfeited.is_zero() {
        println!("{} chips lost to split remainders", summary.forfeited);
    }

    Ok(())
}
