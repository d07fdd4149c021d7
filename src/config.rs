use crate::common::ConfigError;

pub const WIDTH_DEFAULT: usize = 5;
pub const WIDTH_MIN: usize = 3;
pub const WIDTH_MAX: usize = 10;
pub const HEIGHT_DEFAULT: usize = 5;
pub const HEIGHT_MIN: usize = 3;
pub const HEIGHT_MAX: usize = 10;
pub const SHIPS_DEFAULT: usize = 3;
pub const SHIPS_MIN: usize = 1;
pub const SHIPS_MAX: usize = 5;

/// Upper bound on ships accepted by [`GameSettings::validate`]. Presets may
/// exceed [`SHIPS_MAX`], which only bounds the command line.
pub const SHIPS_LIMIT: usize = 10;

pub const SHIP_LEN_MIN: usize = 2;
pub const SHIP_LEN_MAX: usize = 4;

/// Tries per ship before the whole layout is discarded.
pub const PLACEMENT_TRIES: usize = 200;
/// Layout restarts before board construction gives up.
pub const PLACEMENT_RESTARTS: usize = 64;

/// Default cadence of the background tick, in milliseconds.
pub const TICK_MS_DEFAULT: u64 = 1000;

/// Token that ends the game from the input line.
pub const QUIT_TOKEN: &str = "q";

/// Settings for a single game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub width: usize,
    pub height: usize,
    pub ships: usize,
    pub max_attempts: u32,
}

impl GameSettings {
    /// Custom board; the attempt budget is three quarters of the cell count.
    pub fn custom(width: usize, height: usize, ships: usize) -> Self {
        let max_attempts = (width * height * 3 / 4) as u32;
        Self {
            width,
            height,
            ships,
            max_attempts,
        }
    }

    /// Check bounds and that the ships can be laid out with a one-cell buffer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(WIDTH_MIN..=WIDTH_MAX).contains(&self.width)
            || !(HEIGHT_MIN..=HEIGHT_MAX).contains(&self.height)
        {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(SHIPS_MIN..=SHIPS_LIMIT).contains(&self.ships) {
            return Err(ConfigError::InvalidShipCount(self.ships));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts(self.max_attempts));
        }
        if !placement_feasible(self.width, self.height, self.ships) {
            return Err(ConfigError::Infeasible {
                width: self.width,
                height: self.height,
                ships: self.ships,
            });
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::custom(WIDTH_DEFAULT, HEIGHT_DEFAULT, SHIPS_DEFAULT)
    }
}

/// Room for `ships` buffered ships of any drawable length.
///
/// Grow every ship by one cell to the right and one cell down: buffered ships
/// become disjoint rectangles inside a `(width + 1) x (height + 1)` grid. Each
/// ship is budgeted at the longest length, `(SHIP_LEN_MAX + 1) * 2` cells.
/// Within this bound a lattice of shortest ships always fits, so board
/// construction cannot fail on a configuration that passes.
pub fn placement_feasible(width: usize, height: usize, ships: usize) -> bool {
    let footprint = (SHIP_LEN_MAX + 1) * 2;
    ships * footprint <= (width + 1) * (height + 1)
}

/// Preset difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Fixed board, fleet and budget for the level.
    pub fn settings(self) -> GameSettings {
        match self {
            Difficulty::Easy => GameSettings {
                width: 6,
                height: 6,
                ships: 4,
                max_attempts: 20,
            },
            Difficulty::Normal => GameSettings {
                width: 8,
                height: 8,
                ships: 5,
                max_attempts: 34,
            },
            Difficulty::Hard => GameSettings {
                width: 10,
                height: 10,
                ships: 7,
                max_attempts: 50,
            },
        }
    }

    /// Parse a level by index (`0`..`2`) or by name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(idx) = s.parse::<usize>() {
            return Self::ALL.get(idx).copied();
        }
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}
