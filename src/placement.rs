//! Randomized, non-overlapping fleet placement.

use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, FLEET};
use crate::ship::{Orientation, ShipKind};

/// Upper bound on placement attempts per ship. Expected retries are small
/// with at most 15 occupied cells; the bound only breaks a pathological
/// loop.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Place the whole fleet onto `board`, longest ship first.
pub fn place_fleet<R: Rng>(rng: &mut R, board: &mut Board) -> Result<(), GameError> {
    for kind in FLEET {
        place_ship(rng, board, kind)?;
    }
    Ok(())
}

/// Place a single ship: draw a random origin and orientation, reject spans
/// that leave the board or touch an occupied cell, retry until valid.
pub fn place_ship<R: Rng>(rng: &mut R, board: &mut Board, kind: ShipKind) -> Result<(), GameError> {
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if span_is_free(board, x, y, orientation, kind.length())? {
            for (cx, cy) in span_cells(x, y, orientation, kind.length()) {
                board.place(cx, cy, kind)?;
            }
            log::debug!(
                "placed {} at ({}, {}) {:?} after {} attempt(s)",
                kind.name(),
                x,
                y,
                orientation,
                attempt
            );
            return Ok(());
        }
    }
    Err(GameError::PlacementExhausted)
}

/// The `length` cells starting at the origin and extending +x or +y.
fn span_cells(
    x: u8,
    y: u8,
    orientation: Orientation,
    length: u8,
) -> impl Iterator<Item = (u8, u8)> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (x + i, y),
        Orientation::Vertical => (x, y + i),
    })
}

/// A span is valid when it lies entirely on the board and every cell is
/// empty. Spans reaching past index 9 are rejected, never clamped.
fn span_is_free(
    board: &Board,
    x: u8,
    y: u8,
    orientation: Orientation,
    length: u8,
) -> Result<bool, GameError> {
    let fits = match orientation {
        Orientation::Horizontal => x + length <= BOARD_SIZE,
        Orientation::Vertical => y + length <= BOARD_SIZE,
    };
    if !fits {
        return Ok(false);
    }
    for (cx, cy) in span_cells(x, y, orientation, length) {
        if !board.is_free(cx, cy)? {
            return Ok(false);
        }
    }
    Ok(true)
}
