//! Game board: cell grid, ship placement and shot resolution.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::common::{BoardError, ConfigError, ShotResult};
use crate::config::{placement_feasible, PLACEMENT_RESTARTS, PLACEMENT_TRIES, SHIP_LEN_MAX, SHIP_LEN_MIN};
use crate::ship::{Orientation, Ship};
use crate::ui;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    ShipIntact,
    Hit,
    Miss,
}

impl Cell {
    /// Cell belongs to a ship, shot or not.
    pub fn is_ship(self) -> bool {
        matches!(self, Cell::ShipIntact | Cell::Hit)
    }

    /// Cell has already received a shot.
    pub fn is_shot(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Main board state: fixed-size grid plus the ships placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create a board with `ships` randomly placed, non-touching ships.
    ///
    /// Configurations without room for the fleet are rejected before any
    /// search. The random search is bounded; when it runs dry the fleet is laid
    /// out on a fixed lattice of shortest ships, which always fits a feasible
    /// configuration.
    pub fn new<R: Rng>(
        width: usize,
        height: usize,
        ships: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || width.max(height) < SHIP_LEN_MIN {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if ships == 0 {
            return Err(ConfigError::InvalidShipCount(ships));
        }
        if !placement_feasible(width, height, ships) {
            return Err(ConfigError::Infeasible {
                width,
                height,
                ships,
            });
        }

        let mut best = 0;
        for restart in 0..PLACEMENT_RESTARTS {
            let mut board = Board::empty(width, height);
            match board.fill_random(rng, ships) {
                Ok(()) => return Ok(board),
                Err(placed) => {
                    log::debug!(
                        "placement restart {}: placed {} of {} ships",
                        restart,
                        placed,
                        ships
                    );
                    best = best.max(placed);
                }
            }
        }

        log::warn!(
            "random placement gave up after {} restarts (best {} of {}), using lattice",
            PLACEMENT_RESTARTS,
            best,
            ships
        );
        let mut board = Board::empty(width, height);
        match board.fill_lattice(ships) {
            Ok(()) => Ok(board),
            Err(placed) => Err(BoardError::UnableToPlaceShips {
                placed: placed.max(best),
                requested: ships,
            }
            .into()),
        }
    }

    /// Create an empty board with no ships.
    pub fn empty(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            grid: vec![Cell::Empty; width * height],
            ships: Vec::new(),
        }
    }

    /// Place ships one by one; on failure returns how many were placed.
    /// The second half of the tries for a ship only draws the shortest length.
    fn fill_random<R: Rng>(&mut self, rng: &mut R, ships: usize) -> Result<(), usize> {
        for placed in 0..ships {
            let ship = (0..PLACEMENT_TRIES)
                .filter_map(|attempt| {
                    let longest = if attempt < PLACEMENT_TRIES / 2 {
                        SHIP_LEN_MAX
                    } else {
                        SHIP_LEN_MIN
                    };
                    self.random_ship(rng, longest)
                })
                .find(|ship| self.check_placement(ship).is_ok())
                .ok_or(placed)?;
            self.commit(ship);
        }
        Ok(())
    }

    /// Shortest ships every other lane, two free cells apart along the lane.
    /// Lanes run along whichever axis holds more of them.
    fn fill_lattice(&mut self, ships: usize) -> Result<(), usize> {
        let across = self.height.div_ceil(2) * ((self.width + 1) / 3);
        let down = self.width.div_ceil(2) * ((self.height + 1) / 3);
        let (orientation, lanes, slots) = if across >= down {
            (Orientation::Horizontal, self.height, self.width)
        } else {
            (Orientation::Vertical, self.width, self.height)
        };
        let anchors = (0..lanes).step_by(2).flat_map(|lane| {
            (0..slots.saturating_sub(SHIP_LEN_MIN - 1))
                .step_by(SHIP_LEN_MIN + 1)
                .map(move |slot| (lane, slot))
        });

        let mut placed = 0;
        for (lane, slot) in anchors.take(ships) {
            let (row, col) = match orientation {
                Orientation::Horizontal => (lane, slot),
                Orientation::Vertical => (slot, lane),
            };
            let ship = Ship::new(orientation, row, col, SHIP_LEN_MIN).map_err(|_| placed)?;
            self.place(ship).map_err(|_| placed)?;
            placed += 1;
        }
        if placed == ships {
            Ok(())
        } else {
            Err(placed)
        }
    }

    /// Draw an orientation, a length up to `longest` and an anchor; the anchor
    /// is pulled back inside the grid when the ship would run off the edge.
    fn random_ship<R: Rng>(&self, rng: &mut R, longest: usize) -> Option<Ship> {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let span = match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        };
        if span < SHIP_LEN_MIN {
            return None;
        }
        let length = rng.random_range(SHIP_LEN_MIN..=longest.min(span));
        let mut row = rng.random_range(0..self.height);
        let mut col = rng.random_range(0..self.width);
        match orientation {
            Orientation::Horizontal if col + length > self.width => col = self.width - length,
            Orientation::Vertical if row + length > self.height => row = self.height - length,
            _ => {}
        }
        Ship::new(orientation, row, col, length).ok()
    }

    /// Place a ship manually, enforcing bounds and the one-cell buffer.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.check_placement(&ship)?;
        self.commit(ship);
        Ok(())
    }

    fn check_placement(&self, ship: &Ship) -> Result<(), BoardError> {
        if ship
            .cells()
            .iter()
            .any(|&(r, c)| r >= self.height || c >= self.width)
        {
            return Err(BoardError::ShipOutOfBounds);
        }
        for &(r, c) in ship.cells() {
            let rows = r.saturating_sub(1)..=(r + 1).min(self.height - 1);
            for nr in rows {
                let cols = c.saturating_sub(1)..=(c + 1).min(self.width - 1);
                for nc in cols {
                    if self.grid[self.index(nr, nc)].is_ship() {
                        return Err(BoardError::ShipTooClose);
                    }
                }
            }
        }
        Ok(())
    }

    fn commit(&mut self, ship: Ship) {
        for &(r, c) in ship.cells() {
            let i = self.index(r, c);
            self.grid[i] = Cell::ShipIntact;
        }
        self.ships.push(ship);
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Process a shot at (row, col), marking the cell and reporting the result.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        if row >= self.height || col >= self.width {
            return Err(BoardError::OutOfBounds { row, col });
        }
        let i = self.index(row, col);
        match self.grid[i] {
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyShot { row, col }),
            Cell::Empty => {
                self.grid[i] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
            Cell::ShipIntact => {
                self.grid[i] = Cell::Hit;
                let sunk = self
                    .ships
                    .iter()
                    .find(|s| s.contains(row, col))
                    .is_some_and(|s| s.is_sunk(&self.grid, self.width));
                Ok(if sunk { ShotResult::Sunk } else { ShotResult::Hit })
            }
        }
    }

    /// Shoot at a cell; `true` only for a fresh hit. Out-of-range and repeated
    /// shots change nothing and report `false`.
    pub fn shoot(&mut self, row: usize, col: usize) -> bool {
        matches!(self.guess(row, col), Ok(result) if result.is_hit())
    }

    /// Returns `true` when every ship has no intact segment left.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships
            .iter()
            .all(|s| s.is_sunk(&self.grid, self.width))
    }

    /// Number of ships with at least one intact segment.
    pub fn ships_remaining(&self) -> usize {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk(&self.grid, self.width))
            .count()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell state at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.grid[self.index(row, col)])
        } else {
            None
        }
    }

    /// Row-major view of the grid.
    pub fn cells(&self) -> &[Cell] {
        &self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Labelled text grid; `reveal` also shows intact ship cells.
    pub fn render(&self, reveal: bool) -> String {
        ui::render_board(self, reveal)
    }
}
