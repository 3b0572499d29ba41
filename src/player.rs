//! Participant state: a name, a score, the player's own board and what the
//! player has observed of the opponent.

use alloc::string::String;

use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::TOTAL_SHIP_CELLS;
use crate::placement::place_fleet;
use crate::resolver::{resolve_shot, ShotReport};

pub struct Player {
    name: String,
    score: u32,
    board: Board,
    observed: Board,
}

impl Player {
    /// Create a player with two empty boards and a zero score.
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            score: 0,
            board: Board::new(),
            observed: Board::new(),
        }
    }

    /// Randomly place this player's fleet on their own board.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        place_fleet(rng, &mut self.board)
    }

    /// Fire at the opponent's board, updating this player's observation
    /// board and score.
    pub fn fire_at(&mut self, defender: &Board, x: u8, y: u8) -> Result<ShotReport, GameError> {
        let report = resolve_shot(&mut self.observed, defender, self.score, x, y)?;
        self.score = report.score;
        Ok(report)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Count of opponent ship cells this player has hit.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The board holding this player's own ships.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the player's own board for manual ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// What this player knows of the opponent: hits and misses only.
    pub fn observed(&self) -> &Board {
        &self.observed
    }

    pub fn has_won(&self) -> bool {
        self.score >= TOTAL_SHIP_CELLS
    }
}
