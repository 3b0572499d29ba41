use broadside::{
    place_fleet, resolve_shot, Board, Occupant, ShotOutcome, BOARD_SIZE, FLEET, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_fleet(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_fleet(&mut rng, &mut board).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_occupies_exactly_fifteen_cells(seed in any::<u64>()) {
        let board = random_fleet(seed);
        prop_assert_eq!(board.ship_cells(), TOTAL_SHIP_CELLS as usize);
        for kind in FLEET {
            let count = board
                .tiles()
                .filter(|t| t.occupant == Occupant::Ship(kind))
                .count();
            prop_assert_eq!(count, kind.length() as usize);
        }
    }

    #[test]
    fn firing_everywhere_yields_fifteen_hits(seed in any::<u64>()) {
        let defender = random_fleet(seed);
        let mut observed = Board::new();
        let mut score = 0;
        let mut hits = 0;
        let mut misses = 0;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let report = resolve_shot(&mut observed, &defender, score, x, y).unwrap();
                score = report.score;
                match report.outcome {
                    ShotOutcome::Hit(_) => hits += 1,
                    ShotOutcome::Miss => misses += 1,
                    ShotOutcome::AlreadyHit => prop_assert!(false, "fresh cell reported as used"),
                }
            }
        }
        prop_assert_eq!(hits, 15u32);
        prop_assert_eq!(misses, 85u32);
        prop_assert_eq!(score, TOTAL_SHIP_CELLS);
    }

    #[test]
    fn refire_never_scores_twice(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE,
        y in 0..BOARD_SIZE,
    ) {
        let defender = random_fleet(seed);
        let mut observed = Board::new();
        let first = resolve_shot(&mut observed, &defender, 0, x, y).unwrap();
        let second = resolve_shot(&mut observed, &defender, first.score, x, y).unwrap();
        prop_assert_eq!(second.outcome, ShotOutcome::AlreadyHit);
        prop_assert_eq!(second.score, first.score);
        prop_assert!(!second.match_won);
    }
}
