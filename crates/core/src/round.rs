// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round orchestration from the deal to the settlement.
use log::{debug, info};

use holdem_cards::{Card, CardSource, DeckHandle, SourceError};

use crate::{
    BettingRound, Chips, HandEvaluator, HoleCards, PotLedger, Seat, Strategy, Street, StreetExit,
    StrengthValue, TableError, TableEvent, TableObserver, TableSnapshot,
};

/// The round progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Hole cards dealt, pre-flop betting.
    PreFlop,
    /// Flop betting.
    Flop,
    /// Turn betting.
    Turn,
    /// River betting.
    River,
    /// Comparing the live hands.
    Showdown,
    /// The pot has been awarded.
    Settled,
}

impl From<Street> for RoundState {
    fn from(street: Street) -> Self {
        match street {
            Street::PreFlop => RoundState::PreFlop,
            Street::Flop => RoundState::Flop,
            Street::Turn => RoundState::Turn,
            Street::River => RoundState::River,
        }
    }
}

/// A live hand compared at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownHand {
    /// The seat index.
    pub seat: usize,
    /// The seat name.
    pub name: String,
    /// The seat hole cards.
    pub hole_cards: HoleCards,
    /// The hand strength.
    pub strength: StrengthValue,
}

/// How the pot was settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// All other seats folded.
    Default {
        /// The winning seat.
        winner: usize,
        /// The street where the last fold happened.
        street: Street,
    },
    /// The live hands were compared.
    Showdown {
        /// The compared hands.
        hands: Vec<ShowdownHand>,
        /// The seats with the highest strength.
        winners: Vec<usize>,
    },
}

/// Chips awarded to a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    /// The seat index.
    pub seat: usize,
    /// The seat name.
    pub name: String,
    /// The chips awarded.
    pub chips: Chips,
}

/// The result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// How the pot was settled.
    pub settlement: Settlement,
    /// The pot before the payouts.
    pub pot: Chips,
    /// The chips awarded to each winner.
    pub payouts: Vec<Payout>,
    /// Split remainder that was not awarded.
    pub forfeited: Chips,
    /// The table after the payouts.
    pub snapshot: TableSnapshot,
}

impl RoundOutcome {
    /// Checks if the pot was split between more than one seat.
    pub fn is_split(&self) -> bool {
        self.payouts.len() > 1
    }

    /// The winners seat indices.
    pub fn winners(&self) -> impl Iterator<Item = usize> + '_ {
        self.payouts.iter().map(|p| p.seat)
    }
}

/// A single round played on a set of seats.
///
/// The round deals from a fresh deck, runs the four betting streets, and
/// settles the pot either by default when one seat is left or at showdown.
/// Stacks are modified in place, the caller decides what to keep on failure.
pub struct Round<'a> {
    seats: &'a mut [Seat],
    evaluator: &'a dyn HandEvaluator,
    deck_count: u8,
    ledger: PotLedger,
    community: Vec<Card>,
    state: RoundState,
}

impl<'a> Round<'a> {
    /// Creates a round, clearing the seats round state.
    pub fn new(seats: &'a mut [Seat], evaluator: &'a dyn HandEvaluator, deck_count: u8) -> Self {
        seats.iter_mut().for_each(Seat::start_round);

        Self {
            seats,
            evaluator,
            deck_count,
            ledger: PotLedger::new(),
            community: Vec::with_capacity(5),
            state: RoundState::PreFlop,
        }
    }

    /// The round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// The chips in the pot.
    pub fn pot(&self) -> Chips {
        self.ledger.pot()
    }

    /// The community cards dealt so far.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// Plays the round to settlement.
    ///
    /// The deck is closed whether the round settles or not. On error the
    /// seats may hold a partial round.
    pub fn play(
        mut self,
        source: &mut dyn CardSource,
        players: &mut [Box<dyn Strategy>],
        observer: &mut dyn TableObserver,
    ) -> Result<RoundOutcome, TableError> {
        if players.len() != self.seats.len() {
            return Err(TableError::StrategyCount {
                seats: self.seats.len(),
                strategies: players.len(),
            });
        }

        let Some(total) = self.ledger.total_in_play(self.seats) else {
            return Err(TableError::ChipsOverflow);
        };
        observer.on_event(&TableEvent::RoundStarted(self.snapshot(None)));

        let deck = source.new_deck(self.deck_count)?;
        let res = self.play_streets(source, deck, players, observer);
        source.close_deck(deck);
        let outcome = res?;

        debug_assert_eq!(self.ledger.total_in_play(self.seats), Some(total));

        observer.on_event(&TableEvent::Settled(outcome.clone()));
        Ok(outcome)
    }

    fn play_streets(
        &mut self,
        source: &mut dyn CardSource,
        deck: DeckHandle,
        players: &mut [Box<dyn Strategy>],
        observer: &mut dyn TableObserver,
    ) -> Result<RoundOutcome, TableError> {
        for street in Street::ALL {
            self.state = street.into();
            self.deal(street, source, deck)?;

            observer.on_event(&TableEvent::Dealt {
                street,
                snapshot: self.snapshot(Some(street)),
            });

            let exit = BettingRound::new(street).run(
                self.seats,
                &mut self.ledger,
                &self.community,
                players,
                observer,
            )?;

            if let StreetExit::AllFolded { winner } = exit {
                return Ok(self.settle_default(street, winner));
            }
        }

        self.showdown(observer)
    }

    fn deal(
        &mut self,
        street: Street,
        source: &mut dyn CardSource,
        deck: DeckHandle,
    ) -> Result<(), TableError> {
        if street == Street::PreFlop {
            for seat in self.seats.iter_mut() {
                let cards = draw(source, deck, 2)?;
                if let &[c1, c2] = cards.as_slice() {
                    seat.deal(c1, c2);
                }
            }
        } else {
            let cards = draw(source, deck, street.community_cards())?;
            self.community.extend(cards);
        }

        debug!("Dealt {street}, community {:?}", self.community);
        Ok(())
    }

    fn settle_default(&mut self, street: Street, winner: usize) -> RoundOutcome {
        let pot = self.ledger.pot();
        let seat = &mut self.seats[winner];
        let chips = self.ledger.award_all(seat);
        info!("{} wins {chips} chips in the {street}, all other seats folded", seat.name());

        let payout = Payout {
            seat: winner,
            name: seat.name().to_string(),
            chips,
        };

        self.state = RoundState::Settled;
        RoundOutcome {
            settlement: Settlement::Default { winner, street },
            pot,
            payouts: vec![payout],
            forfeited: Chips::ZERO,
            snapshot: self.snapshot(Some(street)),
        }
    }

    fn showdown(&mut self, observer: &mut dyn TableObserver) -> Result<RoundOutcome, TableError> {
        self.state = RoundState::Showdown;

        let hands = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.is_live())
            .map(|(idx, seat)| ShowdownHand {
                seat: idx,
                name: seat.name().to_string(),
                hole_cards: seat.hole_cards(),
                strength: self
                    .evaluator
                    .evaluate(&seat.hole_cards().to_vec(), &self.community),
            })
            .collect::<Vec<_>>();

        observer.on_event(&TableEvent::Showdown(hands.clone()));

        let best = hands.iter().map(|h| h.strength).max();
        let winners = hands
            .iter()
            .filter(|h| Some(h.strength) == best)
            .map(|h| h.seat)
            .collect::<Vec<_>>();

        let pot = self.ledger.pot();
        let payouts = if let &[winner] = winners.as_slice() {
            let chips = self.ledger.award_all(&mut self.seats[winner]);
            info!("{} wins {chips} chips at showdown", self.seats[winner].name());
            vec![Payout {
                seat: winner,
                name: self.seats[winner].name().to_string(),
                chips,
            }]
        } else {
            let split = self.ledger.split(self.seats, &winners)?;
            info!(
                "Pot of {pot} split between {} seats, {} each, {} forfeited",
                winners.len(),
                split.share,
                split.remainder
            );

            winners
                .iter()
                .map(|&idx| Payout {
                    seat: idx,
                    name: self.seats[idx].name().to_string(),
                    chips: split.share,
                })
                .collect()
        };

        self.state = RoundState::Settled;
        Ok(RoundOutcome {
            settlement: Settlement::Showdown { hands, winners },
            pot,
            payouts,
            forfeited: self.ledger.forfeited(),
            snapshot: self.snapshot(Some(Street::River)),
        })
    }

    fn snapshot(&self, street: Option<Street>) -> TableSnapshot {
        TableSnapshot::new(street, &*self.seats, &self.community, self.ledger.pot())
    }
}

/// Draws exactly `count` cards, a short draw is a source failure.
fn draw(
    source: &mut dyn CardSource,
    deck: DeckHandle,
    count: usize,
) -> Result<Vec<Card>, SourceError> {
    let cards = source.draw(deck, count)?;
    if cards.len() != count {
        return Err(SourceError::Unavailable(format!(
            "expected {count} cards, got {}",
            cards.len()
        )));
    }

    Ok(cards)
}
