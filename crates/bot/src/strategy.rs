// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Automated seat strategies.
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{fmt, str::FromStr};
use thiserror::Error;

use holdem_core::{
    ActionError, ActionRequest, Chips, HandEvaluator, HighCardEvaluator, PlayerAction, Strategy,
};

/// Always calls, going all in when the stack is short.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysCall;

impl Strategy for AlwaysCall {
    fn execute(&mut self, _req: &ActionRequest) -> Option<PlayerAction> {
        Some(PlayerAction::Call)
    }
}

/// Picks actions at random.
#[derive(Debug)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
    fold_probability: f64,
    raise_probability: f64,
}

impl RandomStrategy<StdRng> {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a strategy with a seeded generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a strategy that folds 10% and raises 20% of the times.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            fold_probability: 0.1,
            raise_probability: 0.2,
        }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn execute(&mut self, req: &ActionRequest) -> Option<PlayerAction> {
        let p = self.rng.random::<f64>();

        // Never fold when calling is free.
        if p < self.fold_probability && !req.to_call().is_zero() {
            Some(PlayerAction::Fold)
        } else if p < self.fold_probability + self.raise_probability && req.can_raise() {
            let limit = req.max_raise().amount().min(req.pot.amount().max(10));
            let amount = self.rng.random_range(1..=limit);
            Some(PlayerAction::Raise(Chips::new(amount)))
        } else {
            Some(PlayerAction::Call)
        }
    }
}

/// Bets on the value of the highest card it can see.
///
/// Raises half the pot with an Ace, folds to a bet with nothing better than a
/// seven, and calls otherwise.
#[derive(Debug, Clone, Copy)]
pub struct HighCard {
    raise_at: u32,
    fold_below: u32,
    rejected: bool,
}

impl HighCard {
    /// Creates a strategy with custom thresholds.
    pub fn new(raise_at: u32, fold_below: u32) -> Self {
        Self {
            raise_at,
            fold_below,
            rejected: false,
        }
    }
}

impl Default for HighCard {
    fn default() -> Self {
        Self::new(11, 8)
    }
}

impl Strategy for HighCard {
    fn execute(&mut self, req: &ActionRequest) -> Option<PlayerAction> {
        let strength = HighCardEvaluator
            .evaluate(&req.hole_cards.to_vec(), &req.community)
            .value();

        // After a rejected raise fall back to a call.
        if std::mem::take(&mut self.rejected) {
            return Some(PlayerAction::Call);
        }

        if strength >= self.raise_at && req.can_raise() {
            let half_pot = (req.pot / 2).max(Chips::new(1));
            Some(PlayerAction::Raise(half_pot.min(req.max_raise())))
        } else if strength < self.fold_below && !req.to_call().is_zero() {
            Some(PlayerAction::Fold)
        } else {
            Some(PlayerAction::Call)
        }
    }

    fn rejected(&mut self, _req: &ActionRequest, _err: &ActionError) {
        self.rejected = true;
    }
}

/// The automated strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotKind {
    /// [AlwaysCall]
    Call,
    /// [RandomStrategy]
    Random,
    /// [HighCard]
    HighCard,
}

impl BotKind {
    /// Creates a boxed strategy, the seed is used by the random strategy.
    pub fn strategy(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            BotKind::Call => Box::new(AlwaysCall),
            BotKind::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::with_seed(seed)),
                None => Box::new(RandomStrategy::new()),
            },
            BotKind::HighCard => Box::new(HighCard::default()),
        }
    }

    /// The strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            BotKind::Call => "call",
            BotKind::Random => "random",
            BotKind::HighCard => "high-card",
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An unknown strategy name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown strategy {0:?}, expected call, random or high-card")]
pub struct UnknownBot(String);

impl FromStr for BotKind {
    type Err = UnknownBot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(BotKind::Call),
            "random" => Ok(BotKind::Random),
            "high-card" | "highcard" => Ok(BotKind::HighCard),
            _ => Err(UnknownBot(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::{Card, Rank, Suit};
    use holdem_core::{HoleCards, Street};

    fn request(hole: (Rank, Rank), chips: u32, to_call: u32, pot: u32) -> ActionRequest {
        ActionRequest {
            seat: 0,
            name: "Alice".to_string(),
            street: Street::PreFlop,
            chips: Chips::new(chips),
            bet: Chips::ZERO,
            highest_bet: Chips::new(to_call),
            pot: Chips::new(pot),
            hole_cards: HoleCards::Cards(
                Card::new(hole.0, Suit::Hearts),
                Card::new(hole.1, Suit::Clubs),
            ),
            community: Vec::new(),
        }
    }

    #[test]
    fn random_actions_are_valid() {
        let mut strategy = RandomStrategy::with_seed(7);
        let mut raises = 0;

        for pot in 0..500 {
            let req = request((Rank::Deuce, Rank::Trey), 100, pot % 3 * 10, pot);
            match strategy.execute(&req) {
                Some(PlayerAction::Raise(amount)) => {
                    raises += 1;
                    assert!(!amount.is_zero());
                    assert!(amount <= req.max_raise());
                }
                Some(PlayerAction::Fold) => assert!(!req.to_call().is_zero()),
                Some(PlayerAction::Call) => {}
                None => panic!("random strategy stopped"),
            }
        }

        assert!(raises > 0);
    }

    #[test]
    fn random_never_raises_without_chips() {
        let mut strategy = RandomStrategy::with_seed(11);
        let req = request((Rank::Ace, Rank::Ace), 20, 20, 40);
        assert!(!req.can_raise());

        for _ in 0..200 {
            assert!(!matches!(
                strategy.execute(&req),
                Some(PlayerAction::Raise(_))
            ));
        }
    }

    #[test]
    fn high_card_actions() {
        let mut strategy = HighCard::default();

        let req = request((Rank::Ace, Rank::Deuce), 100, 10, 40);
        assert_eq!(
            strategy.execute(&req),
            Some(PlayerAction::Raise(Chips::new(20)))
        );

        let req = request((Rank::Ace, Rank::Deuce), 15, 10, 40);
        assert_eq!(
            strategy.execute(&req),
            Some(PlayerAction::Raise(Chips::new(5)))
        );

        let req = request((Rank::Five, Rank::Deuce), 100, 10, 40);
        assert_eq!(strategy.execute(&req), Some(PlayerAction::Fold));

        let req = request((Rank::Five, Rank::Deuce), 100, 0, 40);
        assert_eq!(strategy.execute(&req), Some(PlayerAction::Call));

        let req = request((Rank::King, Rank::Deuce), 100, 10, 40);
        assert_eq!(strategy.execute(&req), Some(PlayerAction::Call));
    }

    #[test]
    fn high_card_calls_after_rejection() {
        let mut strategy = HighCard::default();
        let req = request((Rank::Ace, Rank::Deuce), 100, 10, 40);

        let err = ActionError::InputRejected("test".to_string());
        strategy.rejected(&req, &err);
        assert_eq!(strategy.execute(&req), Some(PlayerAction::Call));
        assert!(matches!(
            strategy.execute(&req),
            Some(PlayerAction::Raise(_))
        ));
    }

    #[test]
    fn parse_bot_kind() {
        assert_eq!("call".parse(), Ok(BotKind::Call));
        assert_eq!(" Random ".parse(), Ok(BotKind::Random));
        assert_eq!("high-card".parse(), Ok(BotKind::HighCard));
        assert!("human".parse::<BotKind>().is_err());
        assert_eq!(BotKind::HighCard.to_string(), "high-card");
    }
}
