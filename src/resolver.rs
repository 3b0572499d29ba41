//! Shot resolution: classify a fired coordinate against a defender board
//! and record what the attacker learned.

use crate::board::{Board, Occupant};
use crate::common::{GameError, ShotOutcome};
use crate::config::{in_bounds, TOTAL_SHIP_CELLS};

/// Everything the controller needs to know about a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub outcome: ShotOutcome,
    /// Attacker's score after the shot.
    pub score: u32,
    /// A hit earns another shot unless it won the match.
    pub grants_extra_shot: bool,
    pub match_won: bool,
}

/// Resolve one shot at (`x`, `y`).
///
/// `observed` is the attacker's view of the defender; it receives the
/// `Hit`/`Miss` mark. The defender board is only read. Duplicate shots are
/// detected on the observation board and change nothing.
pub fn resolve_shot(
    observed: &mut Board,
    defender: &Board,
    score: u32,
    x: u8,
    y: u8,
) -> Result<ShotReport, GameError> {
    if !in_bounds(x, y) {
        return Err(GameError::InvalidCoordinate);
    }

    match observed.tile_at(x, y)?.occupant {
        Occupant::Hit(_) | Occupant::Miss => {
            log::debug!("shot at ({x}, {y}) repeats a used coordinate");
            return Ok(ShotReport {
                outcome: ShotOutcome::AlreadyHit,
                score,
                grants_extra_shot: false,
                match_won: false,
            });
        }
        Occupant::Empty | Occupant::Ship(_) => {}
    }

    match defender.tile_at(x, y)?.occupant {
        Occupant::Ship(kind) => {
            observed.mark(x, y, Occupant::Hit(kind))?;
            let score = score + 1;
            let match_won = score >= TOTAL_SHIP_CELLS;
            log::debug!("shot at ({x}, {y}) hit {} (score {score})", kind.name());
            Ok(ShotReport {
                outcome: ShotOutcome::Hit(kind),
                score,
                grants_extra_shot: !match_won,
                match_won,
            })
        }
        // Defender boards never hold marks themselves; anything other than
        // a ship cell is open water.
        Occupant::Empty | Occupant::Hit(_) | Occupant::Miss => {
            observed.mark(x, y, Occupant::Miss)?;
            log::debug!("shot at ({x}, {y}) missed");
            Ok(ShotReport {
                outcome: ShotOutcome::Miss,
                score,
                grants_extra_shot: false,
                match_won: false,
            })
        }
    }
}
