//! Common types for Sea Battle: board errors, configuration errors and shot results.

/// Result of a shot that landed on a fresh, in-range cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot struck an intact ship segment.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk,
    /// Shot landed on open water.
    Miss,
}

impl ShotResult {
    /// Returns `true` for [`ShotResult::Hit`] and [`ShotResult::Sunk`].
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates lie outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Cell was already shot at.
    AlreadyShot { row: usize, col: usize },
    /// Ship length outside the permitted range.
    InvalidShipLength(usize),
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Ship overlaps or touches (including diagonally) another ship.
    ShipTooClose,
    /// Randomized placement exhausted its retry budget.
    UnableToPlaceShips { placed: usize, requested: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinates ({}, {}) are outside the board", row, col)
            }
            BoardError::AlreadyShot { row, col } => {
                write!(f, "Cell ({}, {}) was already shot at", row, col)
            }
            BoardError::InvalidShipLength(len) => write!(f, "Invalid ship length {}", len),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTooClose => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::UnableToPlaceShips { placed, requested } => write!(
                f,
                "Unable to place ships: placed {} of {}",
                placed, requested
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors raised while validating game settings or building a board from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height outside the supported range.
    InvalidDimensions { width: usize, height: usize },
    /// Ship count outside the supported range.
    InvalidShipCount(usize),
    /// Attempt budget must be positive.
    InvalidMaxAttempts(u32),
    /// Requested ships cannot fit on the board with the required buffer.
    Infeasible {
        width: usize,
        height: usize,
        ships: usize,
    },
    /// Board construction failed after validation.
    Placement(BoardError),
}

impl From<BoardError> for ConfigError {
    fn from(err: BoardError) -> Self {
        ConfigError::Placement(err)
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => {
                write!(f, "Invalid board dimensions {}x{}", width, height)
            }
            ConfigError::InvalidShipCount(n) => write!(f, "Invalid number of ships: {}", n),
            ConfigError::InvalidMaxAttempts(n) => {
                write!(f, "Maximum attempts must be positive, got {}", n)
            }
            ConfigError::Infeasible {
                width,
                height,
                ships,
            } => write!(
                f,
                "{} ships cannot fit on a {}x{} board without touching",
                ships, width, height
            ),
            ConfigError::Placement(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
