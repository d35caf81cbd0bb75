//! Match engine: card selection, pair comparison, mismatch lock and completion.
//!
//! The board is a plain state machine. Anything that happens "later" (hiding a
//! mismatched pair, announcing completion, reshuffling after a restart) is handed
//! to a [`Scheduler`] as a [`Deferred`] task and comes back through
//! [`Board::run`] when the timer fires. In the browser that is a `setTimeout`;
//! in tests it is [`timeline::ManualTimers`].

mod card;
pub mod timeline;

pub use card::{Card, CardFace};

use crate::config::BoardConfig;
use crate::rng::GameRng;

/// Cards picked in the current pair attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Empty,
    One(usize),
    /// A mismatched pair waiting to be hidden again.
    Pair(usize, usize),
}

/// Follow-up work scheduled by the board. Each task carries the round it was
/// scheduled in so timers outliving a restart are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    Conceal { round: u64, first: usize, second: usize },
    Celebrate { round: u64 },
    Reshuffle { round: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Click had no effect (locked, repeated first pick, matched card, bad index).
    Ignored,
    FirstPick(usize),
    Matched { pairs: usize, complete: bool },
    Mismatched,
    Concealed,
    Completed,
    Reshuffled,
    /// Deferred task from an earlier round.
    Stale,
}

pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, task: Deferred);
}

pub struct Board {
    cards: Vec<Card>,
    selection: Selection,
    locked: bool,
    matched_pairs: usize,
    total_pairs: usize,
    round: u64,
    celebrated: bool,
    config: BoardConfig,
    rng: GameRng,
}

impl Board {
    /// Build a board from pair tokens in DOM order and give it its first shuffle.
    pub fn new<I, S>(tokens: I, config: &BoardConfig, rng: GameRng) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cards: Vec<Card> = tokens.into_iter().map(Card::new).collect();
        let total_pairs = cards.len() / 2;
        let mut board = Self {
            cards,
            selection: Selection::Empty,
            locked: false,
            matched_pairs: 0,
            total_pairs,
            round: 0,
            celebrated: false,
            config: config.clone(),
            rng,
        };
        board.shuffle();
        board
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn select<S: Scheduler>(&mut self, index: usize, scheduler: &mut S) -> Outcome {
        if self.locked {
            return Outcome::Ignored;
        }
        let Some(card) = self.cards.get(index) else {
            return Outcome::Ignored;
        };
        if card.is_matched() {
            return Outcome::Ignored;
        }
        let first = match self.selection {
            Selection::One(first) if first == index => return Outcome::Ignored,
            Selection::One(first) => first,
            // Pair only exists while locked.
            Selection::Empty | Selection::Pair(..) => {
                self.cards[index].reveal();
                self.selection = Selection::One(index);
                return Outcome::FirstPick(index);
            }
        };

        self.cards[index].reveal();
        if self.cards[first].token() == self.cards[index].token() {
            self.cards[first].mark_matched();
            self.cards[index].mark_matched();
            self.matched_pairs += 1;
            self.selection = Selection::Empty;
            let complete = self.is_complete();
            if complete {
                scheduler.schedule(
                    self.config.completion_delay_ms,
                    Deferred::Celebrate { round: self.round },
                );
            }
            Outcome::Matched { pairs: self.matched_pairs, complete }
        } else {
            self.locked = true;
            self.selection = Selection::Pair(first, index);
            scheduler.schedule(
                self.config.mismatch_delay_ms,
                Deferred::Conceal { round: self.round, first, second: index },
            );
            Outcome::Mismatched
        }
    }

    /// Execute a deferred task whose timer has fired.
    pub fn run(&mut self, task: Deferred) -> Outcome {
        let round = match task {
            Deferred::Conceal { round, .. }
            | Deferred::Celebrate { round }
            | Deferred::Reshuffle { round } => round,
        };
        if round != self.round {
            return Outcome::Stale;
        }
        match task {
            Deferred::Conceal { first, second, .. } => {
                for index in [first, second] {
                    if let Some(card) = self.cards.get_mut(index) {
                        card.conceal();
                    }
                }
                self.selection = Selection::Empty;
                self.locked = false;
                Outcome::Concealed
            }
            Deferred::Celebrate { .. } => {
                if self.celebrated || !self.is_complete() {
                    return Outcome::Ignored;
                }
                self.celebrated = true;
                Outcome::Completed
            }
            Deferred::Reshuffle { .. } => {
                self.shuffle();
                Outcome::Reshuffled
            }
        }
    }

    /// Give every card a fresh random order value in `[0, order_slots)`.
    /// Values may repeat; ties fall back to DOM order in the flex layout.
    pub fn shuffle(&mut self) {
        let slots = self.config.order_slots as usize;
        for card in &mut self.cards {
            let order = self.rng.index(slots) as u32;
            card.set_order(order);
        }
    }

    /// Start a new round: all cards hidden and selectable, counters cleared,
    /// reshuffle after `reshuffle_delay_ms`.
    pub fn restart<S: Scheduler>(&mut self, scheduler: &mut S) {
        for card in &mut self.cards {
            card.reset();
        }
        self.selection = Selection::Empty;
        self.locked = false;
        self.matched_pairs = 0;
        self.celebrated = false;
        self.round += 1;
        scheduler.schedule(self.config.reshuffle_delay_ms, Deferred::Reshuffle { round: self.round });
    }
}
