//! Score reporting at game over
//!
//! Reporting is fire-and-forget: the game loop hands over a `ScoreReport` and
//! moves on. Ledger failures are logged here and never reach the game.

use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

use serde::{Deserialize, Serialize};

use crate::ledger::ScoreLedger;

/// Final score crossing to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub final_score: u32,
}

/// Receives final scores from the game
pub trait ScoreReporter {
    /// Must not block the tick loop or fail
    fn report(&mut self, report: ScoreReport);
}

/// Reports straight into a ledger on the calling thread
#[derive(Debug, Default)]
pub struct LedgerReporter<L> {
    ledger: L,
}

impl<L: ScoreLedger> LedgerReporter<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn into_inner(self) -> L {
        self.ledger
    }
}

impl<L: ScoreLedger> ScoreReporter for LedgerReporter<L> {
    fn report(&mut self, report: ScoreReport) {
        record(&mut self.ledger, report);
    }
}

fn record<L: ScoreLedger + ?Sized>(ledger: &mut L, report: ScoreReport) {
    match ledger.record_game_score(report.final_score) {
        Ok(outcome) => {
            if outcome.new_high_score {
                log::info!("New high score: {}", report.final_score);
            }
        }
        Err(e) => log::warn!("Dropping score {}: {}", report.final_score, e),
    }
}

/// Reports on a worker thread so slow storage never stalls the game
pub struct BackgroundReporter {
    sender: Option<Sender<ScoreReport>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundReporter {
    /// Move `ledger` to a worker thread that records every report it receives
    pub fn spawn<L>(mut ledger: L) -> Self
    where
        L: ScoreLedger + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<ScoreReport>();
        let worker = std::thread::Builder::new()
            .name("score-reporter".into())
            .spawn(move || {
                for report in receiver {
                    record(&mut ledger, report);
                }
            });

        match worker {
            Ok(worker) => Self {
                sender: Some(sender),
                worker: Some(worker),
            },
            Err(e) => {
                log::warn!("Score reporter thread unavailable, scores will be dropped: {}", e);
                Self {
                    sender: None,
                    worker: None,
                }
            }
        }
    }

    /// Stop accepting reports and wait for queued ones to be recorded
    pub fn shutdown(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("Score reporter thread panicked");
            }
        }
    }
}

impl ScoreReporter for BackgroundReporter {
    fn report(&mut self, report: ScoreReport) {
        let sent = self
            .sender
            .as_ref()
            .is_some_and(|sender| sender.send(report).is_ok());
        if !sent {
            log::warn!("Score reporter closed, dropping score {}", report.final_score);
        }
    }
}

impl Drop for BackgroundReporter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
