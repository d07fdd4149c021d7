use seabattle::{BoardError, Cell, Orientation, Ship};

#[test]
fn test_cells_and_contains() -> Result<(), BoardError> {
    let ship = Ship::new(Orientation::Vertical, 0, 0, 4)?;
    assert_eq!(ship.cells(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);
    for &(r, c) in ship.cells() {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(4, 0));
    assert_eq!(ship.len(), 4);

    let ship = Ship::new(Orientation::Horizontal, 2, 1, 3)?;
    assert_eq!(ship.cells(), &[(2, 1), (2, 2), (2, 3)]);
    Ok(())
}

#[test]
fn test_sunk_reads_grid() -> Result<(), BoardError> {
    const W: usize = 4;
    let ship = Ship::new(Orientation::Horizontal, 1, 1, 2)?;
    let mut grid = vec![Cell::Empty; W * W];
    grid[W + 1] = Cell::ShipIntact;
    grid[W + 2] = Cell::ShipIntact;
    assert!(!ship.is_sunk(&grid, W));
    assert_eq!(ship.intact(&grid, W), 2);

    grid[W + 1] = Cell::Hit;
    assert!(!ship.is_sunk(&grid, W));
    grid[W + 2] = Cell::Hit;
    assert!(ship.is_sunk(&grid, W));
    Ok(())
}
