// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table configuration.
use crate::Chips;

/// Table configuration.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// The seats names in seat order.
    pub seats: Vec<String>,
    /// The chips each seat starts with.
    pub starting_chips: Chips,
    /// The number of 52 cards decks in the shoe.
    pub deck_count: u8,
}

impl TableConfig {
    /// The default stack size.
    pub const STARTING_CHIPS: Chips = Chips::new(1_000);
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: vec!["Player 1".to_string(), "Player 2".to_string()],
            starting_chips: Self::STARTING_CHIPS,
            deck_count: 1,
        }
    }
}
