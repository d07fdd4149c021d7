use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{Board, Cell, Difficulty, GameSettings, Ship};

fn chebyshev(a: (usize, usize), b: (usize, usize)) -> usize {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

fn preset_board(seed: u64, difficulty: Difficulty) -> Board {
    let settings = difficulty.settings();
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::new(settings.width, settings.height, settings.ships, &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_never_touch(seed in any::<u64>(), width in 3usize..=10, height in 3usize..=10, ships in 1usize..=5) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let built = Board::new(width, height, ships, &mut rng);
        // Construction succeeds exactly when the settings validate.
        let valid = GameSettings::custom(width, height, ships).validate().is_ok();
        prop_assert_eq!(built.is_ok(), valid);
        prop_assume!(valid);
        let board = built.unwrap();

        prop_assert_eq!(board.ships().len(), ships);
        let all = board.ships();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                for &ca in a.cells() {
                    for &cb in b.cells() {
                        prop_assert!(chebyshev(ca, cb) >= 2);
                    }
                }
            }
        }
        let occupied = board.cells().iter().filter(|c| c.is_ship()).count();
        let expected: usize = all.iter().map(Ship::len).sum();
        prop_assert_eq!(occupied, expected);
    }

    #[test]
    fn presets_always_place(seed in any::<u64>()) {
        for difficulty in Difficulty::ALL {
            let board = preset_board(seed, difficulty);
            prop_assert_eq!(board.ships().len(), difficulty.settings().ships);
        }
    }

    #[test]
    fn shoot_idempotent(seed in any::<u64>(), row in 0usize..8, col in 0usize..8) {
        let mut board = preset_board(seed, Difficulty::Normal);
        board.shoot(row, col);
        let after_first = board.clone();
        prop_assert!(!board.shoot(row, col));
        prop_assert_eq!(&board, &after_first);
        prop_assert!(board.cell(row, col).unwrap().is_shot());
    }

    #[test]
    fn sunk_iff_every_ship_cell_hit(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = preset_board(seed, Difficulty::Easy);
        let mut targets: Vec<(usize, usize)> = board
            .ships()
            .iter()
            .flat_map(|s| s.cells().iter().copied())
            .collect();
        // Random misses along the way never finish the game.
        for _ in 0..10 {
            let r = rng.random_range(0..board.height());
            let c = rng.random_range(0..board.width());
            if board.cell(r, c) == Some(Cell::Empty) {
                board.shoot(r, c);
            }
        }
        prop_assert!(!board.all_ships_sunk());
        let last = targets.pop().unwrap();
        for (r, c) in targets {
            prop_assert!(board.shoot(r, c));
        }
        prop_assert!(!board.all_ships_sunk());
        prop_assert_eq!(board.ships_remaining(), 1);
        prop_assert!(board.shoot(last.0, last.1));
        prop_assert!(board.all_ships_sunk());
        prop_assert_eq!(board.ships_remaining(), 0);
    }
}
