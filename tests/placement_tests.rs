use broadside::{
    place_fleet, place_ship, Board, GameError, Occupant, ShipKind, BOARD_SIZE, FLEET,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Fixed-sequence generator standing in for the production RNG.
struct StubRng {
    state: u64,
}

impl StubRng {
    fn new(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for StubRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

fn cells_of(board: &Board, kind: ShipKind) -> Vec<(u8, u8)> {
    board
        .tiles()
        .filter(|t| t.occupant == Occupant::Ship(kind))
        .map(|t| (t.x, t.y))
        .collect()
}

/// A ship's cells must form one horizontal or vertical run.
fn assert_contiguous(cells: &[(u8, u8)], kind: ShipKind) {
    assert_eq!(cells.len(), kind.length() as usize, "{:?}", kind);
    let (x0, y0) = cells[0];
    let horizontal = cells.iter().all(|&(_, y)| y == y0);
    let vertical = cells.iter().all(|&(x, _)| x == x0);
    assert!(horizontal || vertical, "{:?} cells not aligned: {:?}", kind, cells);
    // tiles() yields row-major order, so runs come out sorted
    for (i, &(x, y)) in cells.iter().enumerate() {
        if horizontal && cells.len() > 1 {
            assert_eq!((x, y), (x0 + i as u8, y0), "{:?} not contiguous", kind);
        } else if vertical && cells.len() > 1 {
            assert_eq!((x, y), (x0, y0 + i as u8), "{:?} not contiguous", kind);
        }
    }
}

#[test]
fn test_fresh_fleet_counts() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    place_fleet(&mut rng, &mut board).unwrap();

    assert_eq!(board.ship_cells(), TOTAL_SHIP_CELLS as usize);
    for kind in FLEET {
        let cells = cells_of(&board, kind);
        assert_contiguous(&cells, kind);
        for (x, y) in cells {
            assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        }
    }
}

#[test]
fn test_same_seed_same_fleet() {
    let mut board_a = Board::new();
    let mut board_b = Board::new();
    place_fleet(&mut SmallRng::seed_from_u64(7), &mut board_a).unwrap();
    place_fleet(&mut SmallRng::seed_from_u64(7), &mut board_b).unwrap();
    assert_eq!(board_a, board_b);
}

#[test]
fn test_stub_rng_is_deterministic() {
    let mut board_a = Board::new();
    let mut board_b = Board::new();
    place_fleet(&mut StubRng::new(99), &mut board_a).unwrap();
    place_fleet(&mut StubRng::new(99), &mut board_b).unwrap();
    assert_eq!(board_a, board_b);
    assert_eq!(board_a.ship_cells(), TOTAL_SHIP_CELLS as usize);
}

#[test]
fn test_single_ship_placement() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    place_ship(&mut rng, &mut board, ShipKind::Carrier).unwrap();
    let cells = cells_of(&board, ShipKind::Carrier);
    assert_contiguous(&cells, ShipKind::Carrier);
}

#[test]
fn test_placement_exhausted_on_full_board() {
    let mut board = Board::new();
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            board.place(x, y, ShipKind::Carrier).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        place_ship(&mut rng, &mut board, ShipKind::Submarine).unwrap_err(),
        GameError::PlacementExhausted
    );
}

#[test]
fn test_ships_never_overlap_across_seeds() {
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        place_fleet(&mut rng, &mut board).unwrap();
        // 15 occupied cells means no two ships shared a cell
        assert_eq!(board.ship_cells(), TOTAL_SHIP_CELLS as usize, "seed {}", seed);
    }
}
