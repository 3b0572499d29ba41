//! The 10x10 grid a player owns, addressed row-major by (x, y).

use core::fmt;

use crate::common::GameError;
use crate::config::{in_bounds, BOARD_SIZE};
use crate::ship::ShipKind;

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// What a board cell holds. A cell set to `Hit` or `Miss` is final; the
/// resolver is the only writer of those states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Ship(ShipKind),
    /// Struck ship cell, keeping the kind so its tag can be displayed.
    Hit(ShipKind),
    Miss,
}

impl Occupant {
    /// Character used when printing a board.
    pub fn symbol(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::Ship(kind) | Occupant::Hit(kind) => kind.tag(),
            Occupant::Miss => '!',
        }
    }
}

/// One grid cell: its position and occupant. Returned by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub x: u8,
    pub y: u8,
    pub occupant: Occupant,
}

/// A player's 10x10 board. Cells start `Empty`; placement writes `Ship`
/// cells, the resolver writes `Hit`/`Miss` marks on observation boards.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Occupant; CELLS],
}

impl Board {
    /// Create a board with all 100 cells empty.
    pub fn new() -> Self {
        Board {
            cells: [Occupant::Empty; CELLS],
        }
    }

    fn index(x: u8, y: u8) -> usize {
        y as usize * BOARD_SIZE as usize + x as usize
    }

    /// Returns `true` iff the cell holds `Empty`.
    pub fn is_free(&self, x: u8, y: u8) -> Result<bool, GameError> {
        if !in_bounds(x, y) {
            return Err(GameError::OutOfBounds);
        }
        Ok(self.cells[Self::index(x, y)] == Occupant::Empty)
    }

    /// Set a single cell to `Ship(kind)`. The caller has already verified
    /// the whole span is free.
    pub fn place(&mut self, x: u8, y: u8, kind: ShipKind) -> Result<(), GameError> {
        if !in_bounds(x, y) {
            return Err(GameError::OutOfBounds);
        }
        self.cells[Self::index(x, y)] = Occupant::Ship(kind);
        Ok(())
    }

    /// Read access to a single cell.
    pub fn tile_at(&self, x: u8, y: u8) -> Result<Tile, GameError> {
        if !in_bounds(x, y) {
            return Err(GameError::OutOfBounds);
        }
        Ok(Tile {
            x,
            y,
            occupant: self.cells[Self::index(x, y)],
        })
    }

    /// Overwrite a cell with a resolver mark.
    pub(crate) fn mark(&mut self, x: u8, y: u8, occupant: Occupant) -> Result<(), GameError> {
        if !in_bounds(x, y) {
            return Err(GameError::OutOfBounds);
        }
        self.cells[Self::index(x, y)] = occupant;
        Ok(())
    }

    /// Row-major iterator over all 100 tiles.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..BOARD_SIZE).flat_map(move |y| {
            (0..BOARD_SIZE).map(move |x| Tile {
                x,
                y,
                occupant: self.cells[Self::index(x, y)],
            })
        })
    }

    /// Number of cells holding a ship.
    pub fn ship_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|o| matches!(o, Occupant::Ship(_)))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for y in 0..BOARD_SIZE {
            write!(f, "  ")?;
            for x in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[Self::index(x, y)].symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
