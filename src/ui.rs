//! Terminal rendering. Everything here is a pure function of the board and
//! the pending status message.

use alloc::string::String;
use core::fmt::Write;

use crate::board::{Board, Cell};

pub const COLOR_RED: &str = "\x1B[91m";
pub const COLOR_BLUE: &str = "\x1B[94m";
pub const COLOR_RESET: &str = "\x1B[0m";

/// Clear the screen and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub const TITLE: &str = "A single player Sea Battle game";
pub const HELP: &str = "Enter row col or q to quit";

pub const BANNER: &str = concat!(
    "\x1B[96m  ____  _____    _      ____    _  _____ _____ _     _____ \x1B[0m\n",
    "\x1B[94m / ___|| ____|  / \\    | __ )  / \\|_   _|_   _| |   | ____|\x1B[0m\n",
    "\x1B[95m \\___ \\|  _|   / _ \\   |  _ \\ / _ \\ | |   | | | |   |  _|  \x1B[0m\n",
    "\x1B[91m  ___) | |___ / ___ \\  | |_) / ___ \\| |   | | | |___| |___ \x1B[0m\n",
    "\x1B[93m |____/|_____/_/   \\_\\ |____/_/   \\_\\_|   |_| |_____|_____|\x1B[0m\n",
);

/// Draw the grid with row and column labels.
///
/// Hits are red `X`, misses blue `o`. Intact ship cells show as `S` only
/// when `reveal` is set.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..board.width() {
        let _ = write!(out, "{} ", c % 10);
    }
    out.push('\n');

    out.push_str("  ");
    for _ in 0..board.width() * 2 + 1 {
        out.push('-');
    }
    out.push('\n');

    for (r, row) in board.cells().chunks(board.width().max(1)).enumerate() {
        let _ = write!(out, "{} | ", r % 10);
        for cell in row {
            match cell {
                Cell::Hit => {
                    let _ = write!(out, "{}X{} ", COLOR_RED, COLOR_RESET);
                }
                Cell::Miss => {
                    let _ = write!(out, "{}o{} ", COLOR_BLUE, COLOR_RESET);
                }
                Cell::ShipIntact if reveal => out.push_str("S "),
                _ => out.push_str(". "),
            }
        }
        out.push('\n');
    }
    out
}

/// A full redraw: clear, title, banner, help, board and status line.
pub fn render_screen(board: &Board, message: &str) -> String {
    let mut out = String::from(CLEAR_SCREEN);
    let _ = writeln!(out, "{}", TITLE);
    out.push_str(BANNER);
    let _ = writeln!(out, "{}\n", HELP);
    out.push_str(&render_board(board, false));
    if !message.is_empty() {
        let _ = writeln!(out, "{}", message);
    }
    out
}
