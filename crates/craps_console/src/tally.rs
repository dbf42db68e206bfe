//! Running totals across a session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_craps::Outcome;
use tracing::{debug, instrument};

/// Games played, won and lost so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    played: u32,
    won: u32,
    lost: u32,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the next game to be played, counting from 1.
    pub fn next_game(&self) -> u32 {
        self.played + 1
    }

    /// Records a finished round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        self.played += 1;
        match outcome {
            Outcome::Won => self.won += 1,
            Outcome::Lost => self.lost += 1,
        }
        debug!(played = self.played, won = self.won, lost = self.lost, "Tally updated");
    }
}
