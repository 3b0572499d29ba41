use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// The fixed fleet, placed in descending-length order.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Submarine,
];

/// Total number of ship cells on a fresh board; also the win threshold.
pub const TOTAL_SHIP_CELLS: u32 = 5 + 4 + 3 + 2 + 1;

/// Returns `true` when (`x`, `y`) addresses a board cell.
pub const fn in_bounds(x: u8, y: u8) -> bool {
    x < BOARD_SIZE && y < BOARD_SIZE
}
