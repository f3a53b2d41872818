// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, bail};
use crossterm::style::Stylize;
use log::{error, info};
use std::{
    cell::RefCell,
    fmt,
    io::{self, BufRead, Write},
    rc::Rc,
};

use holdem_bot::BotKind;
use holdem_cards::{Card, CardSource};
use holdem_core::{
    ActionError, ActionOutcome, ActionRequest, Chips, PlayerAction, SeatAction, Settlement,
    SkipReason, Strategy, Table, TableError, TableEvent, TableObserver, TableSnapshot,
};

/// Line based terminal input and output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// A console shared by the human players and the transcript.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Creates a console that can be shared.
    pub fn shared(input: R, output: W) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(Self::new(input, output)))
    }

    /// Prints a prompt and reads a trimmed line, `None` if the input is closed.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", text.bold())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Prints a line.
    pub fn say(&mut self, line: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Returns the console output.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// A parsed action command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A complete action.
    Action(PlayerAction),
    /// A raise without amount.
    Raise,
}

/// Parses an action command: `call`, `raise <amount>`, `raise`, or `fold`.
pub fn parse_action(line: &str) -> Result<Command, ActionError> {
    let line = line.trim().to_ascii_lowercase();
    let mut words = line.split_whitespace();

    let command = match (words.next(), words.next()) {
        (Some("call" | "c"), None) => Command::Action(PlayerAction::Call),
        (Some("fold" | "f"), None) => Command::Action(PlayerAction::Fold),
        (Some("raise" | "r"), None) => Command::Raise,
        (Some("raise" | "r"), Some(amount)) => {
            Command::Action(PlayerAction::Raise(parse_amount(amount)?))
        }
        _ => {
            return Err(ActionError::InputRejected(format!(
                "unknown action {:?}, type call, raise <amount>, or fold",
                line
            )));
        }
    };

    if words.next().is_some() {
        return Err(ActionError::InputRejected(format!(
            "unexpected input after the action in {line:?}"
        )));
    }

    Ok(command)
}

/// Parses a positive raise amount.
pub fn parse_amount(amount: &str) -> Result<Chips, ActionError> {
    match amount.trim().parse::<u32>() {
        Ok(0) => Err(ActionError::InputRejected(
            "raise amount must be positive".to_string(),
        )),
        Ok(n) => Ok(Chips::new(n)),
        Err(_) => Err(ActionError::InputRejected(format!(
            "invalid raise amount {amount:?}"
        ))),
    }
}

/// A seat played from the terminal.
pub struct HumanPlayer<R, W> {
    console: SharedConsole<R, W>,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a player that reads actions from the console.
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console }
    }

    fn read_action(&mut self, req: &ActionRequest) -> io::Result<Option<PlayerAction>> {
        let mut console = self.console.borrow_mut();

        let to_call = if req.to_call().is_zero() {
            "nothing to call".to_string()
        } else {
            format!("{} to call", req.to_call())
        };

        let text = format!(
            "{}, {} chips, {to_call}. Call, raise <amount>, or fold?",
            req.name, req.chips
        );

        loop {
            let Some(line) = console.prompt(&text)? else {
                return Ok(None);
            };

            let command = match parse_action(&line) {
                Ok(Command::Raise) => {
                    let text = format!("Raise by how much (up to {})?", req.max_raise());
                    let Some(line) = console.prompt(&text)? else {
                        return Ok(None);
                    };

                    parse_amount(&line).map(|amount| Command::Action(PlayerAction::Raise(amount)))
                }
                res => res,
            };

            match command {
                Ok(Command::Action(action)) => return Ok(Some(action)),
                Ok(Command::Raise) => {}
                Err(e) => console.say(e.to_string().red())?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Strategy for HumanPlayer<R, W> {
    fn execute(&mut self, req: &ActionRequest) -> Option<PlayerAction> {
        match self.read_action(req) {
            Ok(action) => action,
            Err(e) => {
                error!("Terminal error: {e}");
                None
            }
        }
    }
}

/// Prints the table events on the console.
pub struct Transcript<R, W> {
    console: SharedConsole<R, W>,
    round: u32,
}

impl<R: BufRead, W: Write> Transcript<R, W> {
    /// Creates a transcript.
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console, round: 0 }
    }

    fn print_event(&mut self, event: &TableEvent) -> io::Result<()> {
        let mut console = self.console.borrow_mut();

        match event {
            TableEvent::RoundStarted(_) => {
                self.round += 1;
                console.say("")?;
                console.say(format!("=== Round {} ===", self.round).bold())?;
            }
            TableEvent::Dealt { street, snapshot } => {
                console.say(format!("--- {street} ---").dark_cyan())?;
                print_table(&mut console, snapshot)?;
            }
            TableEvent::SeatSkipped {
                name,
                reason: SkipReason::OutOfChips,
                ..
            } => {
                console.say(format!("{name} is out of chips and cannot bet").dark_yellow())?;
            }
            TableEvent::SeatSkipped { .. } => {}
            TableEvent::ActionTaken {
                name,
                outcome,
                snapshot,
                ..
            } => {
                let text = match outcome {
                    ActionOutcome::Called(chips) if chips.is_zero() => format!("{name} calls"),
                    ActionOutcome::Called(chips) => format!("{name} calls {chips}"),
                    ActionOutcome::AllIn(chips) => format!("{name} goes all in with {chips}"),
                    ActionOutcome::Raised { to, .. } => format!("{name} raises to {to}"),
                    ActionOutcome::Folded => format!("{name} folds"),
                };

                console.say(format!("{text}, pot is {}", snapshot.pot).dark_green())?;
            }
            TableEvent::ActionRejected { error, .. } => {
                console.say(error.to_string().red())?;
            }
            TableEvent::Showdown(hands) => {
                console.say("--- Showdown ---".dark_cyan())?;
                for hand in hands {
                    console.say(format!(
                        "{} shows {}, high card value {}",
                        hand.name,
                        cards_text(&hand.hole_cards.to_vec()),
                        hand.strength
                    ))?;
                }
            }
            TableEvent::Settled(outcome) => {
                let text = match (&outcome.settlement, outcome.payouts.as_slice()) {
                    (Settlement::Default { .. }, [payout]) => format!(
                        "{} wins the pot of {} chips, everyone else folded",
                        payout.name, outcome.pot
                    ),
                    (_, [payout]) => {
                        format!("{} wins the pot of {} chips", payout.name, outcome.pot)
                    }
                    (_, payouts) => {
                        let names = payouts
                            .iter()
                            .map(|p| p.name.as_str())
                            .collect::<Vec<_>>()
                            .join(" and ");
                        let share = payouts.first().map(|p| p.chips).unwrap_or_default();
                        format!(
                            "Split pot of {} chips between {names}, {share} each",
                            outcome.pot
                        )
                    }
                };

                console.say(text.bold().green())?;
                if !outcome.forfeited.is_zero() {
                    console.say(format!("{} odd chips are forfeited", outcome.forfeited))?;
                }

                console.say("Chip counts:")?;
                for seat in &outcome.snapshot.seats {
                    console.say(format!("  {:<12} {:>8}", seat.name, seat.chips.to_string()))?;
                }
            }
        }

        Ok(())
    }
}

impl<R: BufRead, W: Write> TableObserver for Transcript<R, W> {
    fn on_event(&mut self, event: &TableEvent) {
        if let Err(e) = self.print_event(event) {
            error!("Terminal error: {e}");
        }
    }
}

fn print_table<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    snapshot: &TableSnapshot,
) -> io::Result<()> {
    for seat in snapshot.live_seats() {
        let action = if seat.is_all_in {
            SeatAction::AllIn
        } else {
            seat.action
        };

        let mut line = format!(
            "{}: {} ({} chips)",
            seat.name,
            cards_text(&seat.hole_cards.to_vec()),
            seat.chips
        );
        if !action.label().is_empty() {
            line.push_str(&format!(" {}", action.label()));
        }

        console.say(line)?;
    }

    if !snapshot.community.is_empty() {
        console.say(format!("Board: {}", cards_text(&snapshot.community)))?;
    }

    console.say(format!("Pot: {}", snapshot.pot))
}

fn cards_text(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Who plays a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// A player at the terminal.
    Human,
    /// An automated player.
    Bot(BotKind),
}

impl std::str::FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            return Ok(PlayerKind::Human);
        }

        s.parse::<BotKind>()
            .map(PlayerKind::Bot)
            .map_err(|_| anyhow::anyhow!("unknown player {s:?}, expected human, call, random or high-card"))
    }
}

/// Session limits.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Maximum number of rounds, unlimited if `None`.
    pub max_rounds: Option<u32>,
    /// Ask before dealing each new round.
    pub confirm: bool,
}

/// Why a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// A seat has no chips left.
    OutOfChips(String),
    /// The rounds limit was reached.
    RoundLimit,
    /// The user didn't want another round.
    Declined,
    /// The input was closed.
    InputClosed,
}

/// Consecutive abandoned rounds before giving up.
const MAX_ABANDONED: u32 = 3;

/// Plays rounds until a seat is broke, the limit is reached, or the user stops.
pub fn run<R: BufRead, W: Write>(
    table: &mut Table,
    source: &mut dyn CardSource,
    players: &mut [Box<dyn Strategy>],
    console: SharedConsole<R, W>,
    config: SessionConfig,
) -> Result<SessionEnd> {
    let mut transcript = Transcript::new(console.clone());
    let mut abandoned = 0;

    let end = loop {
        if let Some(seat) = table.seats().iter().find(|s| s.chips().is_zero()) {
            break SessionEnd::OutOfChips(seat.name().to_string());
        }

        if config.max_rounds.is_some_and(|max| table.rounds_played() >= max) {
            break SessionEnd::RoundLimit;
        }

        if config.confirm && table.rounds_played() > 0 {
            match console.borrow_mut().prompt("Play another round? [Y/n]")? {
                None => break SessionEnd::InputClosed,
                Some(answer) if answer.to_ascii_lowercase().starts_with('n') => {
                    break SessionEnd::Declined;
                }
                Some(_) => {}
            }
        }

        match table.play_round(source, players, &mut transcript) {
            Ok(_) => abandoned = 0,
            Err(TableError::InputClosed { seat }) => {
                info!("Input closed for {seat}");
                break SessionEnd::InputClosed;
            }
            Err(e) if e.is_round_scoped() => {
                abandoned += 1;
                console
                    .borrow_mut()
                    .say(format!("Round abandoned: {e}, stacks restored").red())?;

                if abandoned >= MAX_ABANDONED {
                    bail!("Giving up after {abandoned} abandoned rounds: {e}");
                }
            }
            Err(e) => return Err(e.into()),
        }
    };

    let mut console = console.borrow_mut();
    console.say("")?;
    match &end {
        SessionEnd::OutOfChips(name) => console.say(format!("{name} is out of chips"))?,
        SessionEnd::RoundLimit => console.say("Round limit reached")?,
        SessionEnd::Declined | SessionEnd::InputClosed => {}
    }

    console.say(format!("Final chip counts after {} rounds:", table.rounds_played()).bold())?;
    for seat in table.seats() {
        console.say(format!("  {:<12} {:>8}", seat.name(), seat.chips().to_string()))?;
    }

    Ok(end)
}
