use seabattle::{
    Board, BoardError, Cell, ConfigError, GameSettings, Orientation, Ship, ShotResult,
    HEIGHT_MAX, HEIGHT_MIN, SHIPS_MAX, SHIPS_MIN, WIDTH_MAX, WIDTH_MIN,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn board_with_destroyer() -> Board {
    let mut board = Board::empty(5, 5);
    board
        .place(Ship::new(Orientation::Horizontal, 0, 0, 2).unwrap())
        .unwrap();
    board
}

#[test]
fn test_forced_ship_hit_hit_sunk() {
    let mut board = board_with_destroyer();
    assert_eq!(board.ships_remaining(), 1);
    assert!(!board.all_ships_sunk());

    assert!(board.shoot(0, 0));
    assert!(!board.all_ships_sunk());
    assert!(board.shoot(0, 1));

    assert!(board.all_ships_sunk());
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_guess_reports_sunk_on_last_segment() {
    let mut board = board_with_destroyer();
    assert_eq!(board.guess(0, 1).unwrap(), ShotResult::Hit);
    assert_eq!(board.guess(0, 0).unwrap(), ShotResult::Sunk);
    assert_eq!(board.guess(3, 3).unwrap(), ShotResult::Miss);
}

#[test]
fn test_repeated_shot_is_rejected_without_change() {
    let mut board = board_with_destroyer();
    assert!(board.shoot(0, 0));
    let before = board.clone();
    assert!(!board.shoot(0, 0));
    assert_eq!(board, before);
    assert_eq!(
        board.guess(0, 0).unwrap_err(),
        BoardError::AlreadyShot { row: 0, col: 0 }
    );

    assert!(!board.shoot(4, 4));
    assert!(!board.shoot(4, 4));
    assert_eq!(board.cell(4, 4), Some(Cell::Miss));
}

#[test]
fn test_out_of_range_shot_is_noop() {
    let mut board = board_with_destroyer();
    let before = board.clone();
    assert!(!board.shoot(5, 0));
    assert!(!board.shoot(0, 5));
    assert_eq!(board, before);
    assert_eq!(
        board.guess(7, 2).unwrap_err(),
        BoardError::OutOfBounds { row: 7, col: 2 }
    );
    assert_eq!(board.cell(7, 2), None);
}

#[test]
fn test_place_rejects_touching_and_out_of_bounds() {
    let mut board = board_with_destroyer();
    // diagonal neighbour of (0, 1)
    let touching = Ship::new(Orientation::Vertical, 1, 2, 2).unwrap();
    assert_eq!(board.place(touching).unwrap_err(), BoardError::ShipTooClose);
    let overlapping = Ship::new(Orientation::Vertical, 0, 1, 3).unwrap();
    assert_eq!(board.place(overlapping).unwrap_err(), BoardError::ShipTooClose);
    let off_edge = Ship::new(Orientation::Horizontal, 4, 3, 3).unwrap();
    assert_eq!(board.place(off_edge).unwrap_err(), BoardError::ShipOutOfBounds);

    let spaced = Ship::new(Orientation::Vertical, 2, 0, 3).unwrap();
    board.place(spaced).unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_ship_length_bounds() {
    assert_eq!(
        Ship::new(Orientation::Horizontal, 0, 0, 1).unwrap_err(),
        BoardError::InvalidShipLength(1)
    );
    assert_eq!(
        Ship::new(Orientation::Horizontal, 0, 0, 5).unwrap_err(),
        BoardError::InvalidShipLength(5)
    );
}

#[test]
fn test_random_board_places_requested_ships() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::new(8, 8, 5, &mut rng).unwrap();
    assert_eq!(board.ships().len(), 5);
    let occupied = board.cells().iter().filter(|c| c.is_ship()).count();
    let expected: usize = board.ships().iter().map(Ship::len).sum();
    assert_eq!(occupied, expected);
    for ship in board.ships() {
        assert!((2..=4).contains(&ship.len()));
    }
}

#[test]
fn test_same_seed_same_board() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let b1 = Board::new(10, 10, 7, &mut rng1).unwrap();
    let b2 = Board::new(10, 10, 7, &mut rng2).unwrap();
    assert_eq!(b1, b2);
}

#[test]
fn test_infeasible_board_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Board::new(3, 3, 5, &mut rng).unwrap_err(),
        ConfigError::Infeasible {
            width: 3,
            height: 3,
            ships: 5
        }
    );
    assert_eq!(
        Board::new(0, 4, 1, &mut rng).unwrap_err(),
        ConfigError::InvalidDimensions {
            width: 0,
            height: 4
        }
    );
    assert_eq!(
        Board::new(4, 4, 0, &mut rng).unwrap_err(),
        ConfigError::InvalidShipCount(0)
    );
}

#[test]
fn test_tight_board_always_places() {
    // 4x4 is the smallest square that admits two ships.
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(4, 4, 2, &mut rng).unwrap();
        assert_eq!(board.ships().len(), 2);
    }
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        Board::new(3, 3, 2, &mut rng).unwrap_err(),
        ConfigError::Infeasible {
            width: 3,
            height: 3,
            ships: 2
        }
    );
}

#[test]
fn test_every_valid_command_line_board_places() {
    for width in WIDTH_MIN..=WIDTH_MAX {
        for height in HEIGHT_MIN..=HEIGHT_MAX {
            for ships in SHIPS_MIN..=SHIPS_MAX {
                if GameSettings::custom(width, height, ships).validate().is_err() {
                    continue;
                }
                for seed in 0..20 {
                    let mut rng = SmallRng::seed_from_u64(seed);
                    let built = Board::new(width, height, ships, &mut rng);
                    assert!(
                        built.is_ok(),
                        "{}x{} with {} ships, seed {}: {:?}",
                        width,
                        height,
                        ships,
                        seed,
                        built
                    );
                }
            }
        }
    }
}

#[test]
fn test_render_hides_ships_unless_revealed() {
    let mut board = board_with_destroyer();
    board.shoot(0, 0);
    board.shoot(2, 2);

    let hidden = board.render(false);
    let lines: Vec<&str> = hidden.lines().collect();
    assert_eq!(lines[0], "    0 1 2 3 4 ");
    assert_eq!(lines[1], "  -----------");
    assert_eq!(lines.len(), 2 + 5);
    assert!(lines[2].starts_with("0 | "));
    assert!(lines[2].contains('X'));
    assert!(!hidden.contains('S'));
    assert!(lines[4].contains('o'));

    let revealed = board.render(true);
    assert!(revealed.lines().nth(2).unwrap().contains("S "));
}
