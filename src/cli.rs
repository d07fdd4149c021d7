#![cfg(feature = "std")]

//! Command-line surface: argument parsing and the interactive difficulty prompt.

use std::io::{self, BufRead, Write};

use clap::{ArgAction, Parser};

use crate::config::{
    Difficulty, GameSettings, HEIGHT_DEFAULT, HEIGHT_MAX, HEIGHT_MIN, SHIPS_DEFAULT, SHIPS_MAX,
    SHIPS_MIN, TICK_MS_DEFAULT, WIDTH_DEFAULT, WIDTH_MAX, WIDTH_MIN,
};

#[derive(Parser, Debug)]
#[command(
    name = "seabattle",
    author,
    version,
    about = "A single player Sea Battle game",
    long_about = None,
    disable_help_flag = true
)]
pub struct Cli {
    /// Width of the board
    #[arg(short, long, value_parser = clap::value_parser!(u8).range((WIDTH_MIN as i64)..=(WIDTH_MAX as i64)))]
    pub width: Option<u8>,

    /// Height of the board
    #[arg(short = 'h', long, value_parser = clap::value_parser!(u8).range((HEIGHT_MIN as i64)..=(HEIGHT_MAX as i64)))]
    pub height: Option<u8>,

    /// Number of ships
    #[arg(short, long, value_parser = clap::value_parser!(u8).range((SHIPS_MIN as i64)..=(SHIPS_MAX as i64)))]
    pub ships: Option<u8>,

    /// Difficulty preset (0=Easy, 1=Normal, 2=Hard, or by name)
    #[arg(long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    pub seed: Option<u64>,

    /// Print final statistics as JSON
    #[arg(long)]
    pub stats_json: bool,

    /// Background tick interval in milliseconds
    #[arg(long, default_value_t = TICK_MS_DEFAULT, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Show this help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::parse(s).ok_or_else(|| {
        format!(
            "invalid difficulty '{}'; use 0=Easy, 1=Normal, 2=Hard",
            s
        )
    })
}

impl Cli {
    /// Settings implied by the flags alone.
    ///
    /// A difficulty preset wins over custom dimensions. Dimensions only make a
    /// custom board when at least one differs from its default; otherwise the
    /// caller has to ask the player, so `None` is returned.
    pub fn settings(&self) -> Option<GameSettings> {
        if let Some(difficulty) = self.difficulty {
            return Some(difficulty.settings());
        }
        let width = self.width.map_or(WIDTH_DEFAULT, usize::from);
        let height = self.height.map_or(HEIGHT_DEFAULT, usize::from);
        let ships = self.ships.map_or(SHIPS_DEFAULT, usize::from);
        if (width, height, ships) == (WIDTH_DEFAULT, HEIGHT_DEFAULT, SHIPS_DEFAULT) {
            return None;
        }
        Some(GameSettings::custom(width, height, ships))
    }
}

/// Ask for a difficulty until a valid choice is made.
///
/// Returns `None` when the player quits with `q` or input ends.
pub fn prompt_difficulty<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<Difficulty>> {
    let mut line = String::new();
    loop {
        write!(output, "Select difficulty or q to quit:\n1 - Easy\n2 - Normal\n3 - Hard\n> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim();
        if choice.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match choice.parse::<usize>() {
            Ok(n @ 1..=3) => return Ok(Some(Difficulty::ALL[n - 1])),
            Ok(_) => writeln!(output, "Invalid choice!")?,
            Err(_) => writeln!(output, "Invalid input!")?,
        }
    }
}
