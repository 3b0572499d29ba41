//! Ship kinds and placement orientation.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The five fixed ship kinds, each with a fixed length and a one-character
/// display tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// Number of board cells the ship occupies.
    pub const fn length(self) -> u8 {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 1,
        }
    }

    /// Single-character tag shown on a board.
    pub const fn tag(self) -> char {
        match self {
            ShipKind::Carrier => 'A',
            ShipKind::Battleship => 'B',
            ShipKind::Cruiser => 'C',
            ShipKind::Destroyer => 'D',
            ShipKind::Submarine => 'S',
        }
    }

    /// Ship's name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Aircraft Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
        }
    }
}
