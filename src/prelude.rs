//! Commonly used types and utilities for ease of import.

pub use crate::{
    place_fleet, resolve_shot, Board, GameError, Match, MatchStatus, Player, ShipKind,
    ShotOutcome, ShotReport, TurnResult,
};

#[cfg(feature = "std")]
pub use crate::{parse_coord, ConsoleInput, ConsoleView};
