//! Shared types: game errors and shot outcomes.

use crate::ship::ShipKind;

/// Classification of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot struck a ship cell of the given kind.
    Hit(ShipKind),
    /// Shot struck open water.
    Miss,
    /// Coordinate was already fired upon by this attacker.
    AlreadyHit,
}

/// Errors returned by board, placement and resolver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the 10x10 board.
    OutOfBounds,
    /// Resolver received a coordinate outside the board.
    InvalidCoordinate,
    /// Fleet placement exhausted its attempt budget.
    PlacementExhausted,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            GameError::InvalidCoordinate => write!(f, "Shot coordinate is outside the board"),
            GameError::PlacementExhausted => {
                write!(f, "Unable to place fleet within the attempt budget")
            }
        }
    }
}
