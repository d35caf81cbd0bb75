//! Virtual-clock scheduler for driving a [`Board`](super::Board) without a browser.
//!
//! Tasks are released by [`ManualTimers::advance`] in due-time order, ties broken
//! by scheduling order, mirroring how browser timeouts fire.

use super::{Board, Deferred, Outcome, Scheduler};

#[derive(Debug, Default)]
pub struct ManualTimers {
    now_ms: u64,
    seq: u64,
    queue: Vec<Pending>,
}

#[derive(Debug)]
struct Pending {
    due_ms: u64,
    seq: u64,
    task: Deferred,
}

impl Scheduler for ManualTimers {
    fn schedule(&mut self, delay_ms: u32, task: Deferred) {
        self.queue.push(Pending { due_ms: self.now_ms + u64::from(delay_ms), seq: self.seq, task });
        self.seq += 1;
    }
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Move the clock forward and return every task that came due.
    pub fn advance(&mut self, ms: u64) -> Vec<Deferred> {
        self.now_ms += ms;
        let now = self.now_ms;
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.queue.drain(..).partition(|p| p.due_ms <= now);
        self.queue = rest;
        due.sort_by_key(|p| (p.due_ms, p.seq));
        due.into_iter().map(|p| p.task).collect()
    }

    /// Advance the clock and run the released tasks against `board`.
    pub fn run_due(&mut self, board: &mut Board, ms: u64) -> Vec<Outcome> {
        self.advance(ms).into_iter().map(|task| board.run(task)).collect()
    }
}
