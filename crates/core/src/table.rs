// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A two seats table that plays rounds carrying the stacks over.
use log::{info, warn};

use holdem_cards::CardSource;

use crate::{
    Chips, HandEvaluator, HighCardEvaluator, Round, RoundOutcome, Seat, Strategy, TableConfig,
    TableError, TableObserver,
};

/// A table with two seats.
pub struct Table {
    seats: Vec<Seat>,
    deck_count: u8,
    evaluator: Box<dyn HandEvaluator>,
    rounds_played: u32,
}

impl Table {
    /// The number of seats at the table.
    pub const SEATS: usize = 2;

    /// The largest starting stack, all the table chips must fit in [Chips].
    pub const MAX_STARTING_CHIPS: u32 = u32::MAX / Self::SEATS as u32;

    /// Creates a table that compares hands by their highest card.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        Self::with_evaluator(config, Box::new(HighCardEvaluator))
    }

    /// Creates a table with a custom hand evaluator.
    pub fn with_evaluator(
        config: TableConfig,
        evaluator: Box<dyn HandEvaluator>,
    ) -> Result<Self, TableError> {
        if config.seats.len() != Self::SEATS {
            return Err(TableError::SeatCount(config.seats.len()));
        }

        if config.deck_count == 0 {
            return Err(TableError::DeckCount(config.deck_count));
        }

        if config.starting_chips.amount() > Self::MAX_STARTING_CHIPS {
            return Err(TableError::ChipsOverflow);
        }

        let seats = config
            .seats
            .into_iter()
            .map(|name| Seat::new(name, config.starting_chips))
            .collect();

        Ok(Self {
            seats,
            deck_count: config.deck_count,
            evaluator,
            rounds_played: 0,
        })
    }

    /// The seats in seat order, with the state of the last settled round.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The number of settled rounds.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The number of seats that still have chips.
    pub fn count_with_chips(&self) -> usize {
        self.seats.iter().filter(|s| !s.chips().is_zero()).count()
    }

    /// The chips in all the stacks.
    pub fn total_chips(&self) -> Chips {
        self.seats.iter().map(Seat::chips).sum()
    }

    /// Plays a round.
    ///
    /// The stacks are updated only when the round settles, if the card source
    /// fails or a strategy stops answering the stacks are left as they were
    /// before the round.
    pub fn play_round(
        &mut self,
        source: &mut dyn CardSource,
        players: &mut [Box<dyn Strategy>],
        observer: &mut dyn TableObserver,
    ) -> Result<RoundOutcome, TableError> {
        let round = self.rounds_played + 1;
        let mut seats = self.seats.clone();

        let res = Round::new(&mut seats, self.evaluator.as_ref(), self.deck_count).play(
            source,
            players,
            observer,
        );

        match res {
            Ok(outcome) => {
                self.seats = seats;
                self.rounds_played = round;

                let stacks = self
                    .seats
                    .iter()
                    .map(|s| format!("{} {}", s.name(), s.chips()))
                    .collect::<Vec<_>>();
                info!("Round {round} settled, stacks: {}", stacks.join(", "));

                Ok(outcome)
            }
            Err(e) => {
                warn!("Round {round} abandoned: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        NullObserver, PlayerAction,
        testing::{FixedSource, deal_order, players as scripted},
    };
    use holdem_cards::{Rank::*, SourceError};

    use PlayerAction::{Call, Fold, Raise};

    fn config(chips: u32) -> TableConfig {
        TableConfig {
            starting_chips: Chips::new(chips),
            ..TableConfig::default()
        }
    }

    #[test]
    fn table_needs_two_seats() {
        let config = TableConfig {
            seats: vec!["Alice".to_string()],
            ..TableConfig::default()
        };
        assert!(matches!(Table::new(config), Err(TableError::SeatCount(1))));

        let config = TableConfig {
            seats: vec!["A".into(), "B".into(), "C".into()],
            ..TableConfig::default()
        };
        assert!(matches!(Table::new(config), Err(TableError::SeatCount(3))));

        let config = TableConfig {
            deck_count: 0,
            ..TableConfig::default()
        };
        assert!(matches!(Table::new(config), Err(TableError::DeckCount(0))));
    }

    #[test]
    fn starting_chips_must_fit() {
        let res = Table::new(config(u32::MAX));
        assert!(matches!(res, Err(TableError::ChipsOverflow)));

        let res = Table::new(config(Table::MAX_STARTING_CHIPS + 1));
        assert!(matches!(res, Err(TableError::ChipsOverflow)));
    }

    #[test]
    fn largest_stacks_all_in_showdown() {
        let stack = Table::MAX_STARTING_CHIPS;
        let mut table = Table::new(config(stack)).unwrap();
        let initial = table.total_chips();
        assert_eq!(initial, Chips::new(stack * 2));

        let mut source = FixedSource::new(deal_order(
            &[Ace, Deuce],
            &[Four, Five],
            &[Six, Seven, Eight, Nine, Ten],
        ));
        let mut players = scripted(&[&[Raise(Chips::new(stack))], &[Call]]);
        let outcome = table
            .play_round(&mut source, &mut players, &mut NullObserver)
            .unwrap();

        assert_eq!(outcome.pot, initial);
        assert_eq!(table.seats()[0].chips(), initial);
        assert!(table.seats()[1].chips().is_zero());
        assert_eq!(table.total_chips(), initial);
    }

    #[test]
    fn stacks_carry_over() {
        let mut table = Table::new(config(100)).unwrap();
        assert_eq!(table.total_chips(), Chips::new(200));

        // Seat 0 has the Ace and wins the first round.
        let mut source = FixedSource::new(deal_order(
            &[Ace, Deuce],
            &[Four, Five],
            &[Six, Seven, Eight, Nine, Ten],
        ));
        let mut players = scripted(&[
            &[Raise(Chips::new(30)), Call, Call, Call],
            &[Call, Call, Call, Call],
        ]);
        let outcome = table
            .play_round(&mut source, &mut players, &mut NullObserver)
            .unwrap();
        assert_eq!(outcome.winners().collect::<Vec<_>>(), vec![0]);
        assert_eq!(table.seats()[0].chips(), Chips::new(130));
        assert_eq!(table.seats()[1].chips(), Chips::new(70));
        assert_eq!(table.rounds_played(), 1);

        // The second round starts from the carried stacks.
        let mut source = FixedSource::new(deal_order(&[Deuce, Trey], &[Four, Five], &[]));
        let mut players = scripted(&[&[Raise(Chips::new(10))], &[Fold]]);
        table
            .play_round(&mut source, &mut players, &mut NullObserver)
            .unwrap();
        assert_eq!(table.seats()[0].chips(), Chips::new(130));
        assert_eq!(table.seats()[1].chips(), Chips::new(70));
        assert_eq!(table.rounds_played(), 2);
        assert_eq!(table.total_chips(), Chips::new(200));
    }

    #[test]
    fn failed_round_restores_stacks() {
        let mut table = Table::new(config(100)).unwrap();

        let deck = deal_order(&[Ace, Deuce], &[Four, Five], &[Six, Seven, Eight]);
        let mut source = FixedSource::new(deck).failing_at(2);
        let mut players = scripted(&[&[Raise(Chips::new(50))], &[Call]]);

        let res = table.play_round(&mut source, &mut players, &mut NullObserver);
        assert!(matches!(
            res,
            Err(TableError::SourceUnavailable(SourceError::Unavailable(_)))
        ));
        assert!(res.is_err_and(|e| e.is_round_scoped()));

        assert_eq!(table.seats()[0].chips(), Chips::new(100));
        assert_eq!(table.seats()[1].chips(), Chips::new(100));
        assert_eq!(table.rounds_played(), 0);

        // The table is still playable.
        let mut source = FixedSource::new(deal_order(&[Deuce, Trey], &[Four, Five], &[]));
        let mut players = scripted(&[&[Fold], &[]]);
        assert!(
            table
                .play_round(&mut source, &mut players, &mut NullObserver)
                .is_ok()
        );
        assert_eq!(table.rounds_played(), 1);
    }

    #[test]
    fn broke_seat_is_counted() {
        let mut table = Table::new(config(20)).unwrap();

        let mut source = FixedSource::new(deal_order(
            &[Ace, Deuce],
            &[Four, Five],
            &[Six, Seven, Eight, Nine, Ten],
        ));
        let mut players = scripted(&[&[Raise(Chips::new(20)), Call, Call, Call], &[Call]]);
        table
            .play_round(&mut source, &mut players, &mut NullObserver)
            .unwrap();

        assert_eq!(table.count_with_chips(), 1);
        assert_eq!(table.seats()[0].chips(), Chips::new(40));
        assert!(table.seats()[1].chips().is_zero());
    }
}
