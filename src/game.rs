//! Session state machine: one input line at a time, no threads involved.
//!
//! The coordinator wraps a [`SessionState`] in its lock; everything that
//! decides what a line of input does lives here so it can be driven directly.

use alloc::format;
use alloc::string::String;
use rand::Rng;

use crate::board::Board;
use crate::command::{parse_command, Command};
use crate::common::{BoardError, ConfigError, ShotResult};
use crate::config::GameSettings;
use crate::stats::Statistics;
use crate::ui;

pub const MSG_GOODBYE: &str = "Goodbye!";
pub const MSG_INPUT_CLOSED: &str = "Input closed. Goodbye!";
pub const MSG_INVALID_INPUT: &str = "Invalid input! Enter row and col separated by space.";
pub const MSG_LOSE: &str = "You lose! Maximum attempts reached.";

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    Won,
    Lost,
    Quit,
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Finished(Outcome),
}

/// Final result handed back once all activities have stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameReport {
    pub outcome: Outcome,
    pub stats: Statistics,
}

/// Everything the input, render and tick activities share.
#[derive(Debug, Clone)]
pub struct SessionState {
    board: Board,
    max_attempts: u32,
    stats: Statistics,
    status: GameStatus,
    dirty: bool,
    message: String,
}

impl SessionState {
    /// Start a session on `board`. The first frame is pending immediately.
    pub fn new(board: Board, max_attempts: u32) -> Self {
        Self {
            board,
            max_attempts,
            stats: Statistics::default(),
            status: GameStatus::Active,
            dirty: true,
            message: String::new(),
        }
    }

    /// Validate `settings` and build a randomly populated board for them.
    pub fn from_settings<R: Rng>(settings: &GameSettings, rng: &mut R) -> Result<Self, ConfigError> {
        settings.validate()?;
        let board = Board::new(settings.width, settings.height, settings.ships, rng)?;
        Ok(Self::new(board, settings.max_attempts))
    }

    /// Process one line of input. Lines arriving after the session finished
    /// are ignored.
    pub fn handle_line(&mut self, line: &str) {
        if !self.is_running() {
            return;
        }
        match parse_command(line) {
            Some(command) => self.apply(command),
            None => self.post(String::from(MSG_INVALID_INPUT)),
        }
    }

    pub fn apply(&mut self, command: Command) {
        if !self.is_running() {
            return;
        }
        match command {
            Command::Quit => self.finish(Outcome::Quit, String::from(MSG_GOODBYE)),
            Command::Shoot { row, col } => self.fire(row, col),
        }
    }

    fn fire(&mut self, row: i64, col: i64) {
        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
            self.post(self.out_of_range_message());
            return;
        };
        let result = match self.board.guess(r, c) {
            Ok(result) => result,
            Err(BoardError::AlreadyShot { row, col }) => {
                self.post(format!("Already shot at {} {}! Pick another cell.", row, col));
                return;
            }
            Err(_) => {
                self.post(self.out_of_range_message());
                return;
            }
        };
        self.stats.record(result.is_hit());

        if self.board.all_ships_sunk() {
            let msg = format!("You win! Total attempts: {}", self.stats.attempts);
            self.finish(Outcome::Won, msg);
        } else if self.stats.attempts >= self.max_attempts {
            self.finish(Outcome::Lost, String::from(MSG_LOSE));
        } else {
            let verdict = match result {
                ShotResult::Hit => "Hit!",
                ShotResult::Sunk => "Hit! Ship sunk!",
                ShotResult::Miss => "Miss!",
            };
            let msg = format!(
                "{} | Ships remaining: {} | Attempts: {}/{}",
                verdict,
                self.board.ships_remaining(),
                self.stats.attempts,
                self.max_attempts
            );
            self.post(msg);
        }
    }

    fn out_of_range_message(&self) -> String {
        format!(
            "Out of range! Row must be 0-{} and col 0-{}.",
            self.board.height().saturating_sub(1),
            self.board.width().saturating_sub(1)
        )
    }

    /// Input reached end of stream.
    pub fn close_input(&mut self) {
        self.finish(Outcome::Quit, String::from(MSG_INPUT_CLOSED));
    }

    /// Stop the session from outside the input path, e.g. when the terminal
    /// can no longer be written.
    pub fn abort(&mut self, reason: &str) {
        self.finish(Outcome::Quit, String::from(reason));
    }

    /// Active -> Finished. Always leaves a frame pending so a waiting
    /// renderer wakes for the final draw. No-op once finished.
    fn finish(&mut self, outcome: Outcome, message: String) {
        if !self.is_running() {
            return;
        }
        self.status = GameStatus::Finished(outcome);
        self.post(message);
    }

    fn post(&mut self, message: String) {
        self.message = message;
        self.dirty = true;
    }

    /// Compose the next frame, consuming the pending message and clearing
    /// the dirty flag.
    pub fn take_frame(&mut self) -> String {
        let frame = ui::render_screen(&self.board, &self.message);
        self.message.clear();
        self.dirty = false;
        frame
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Message waiting for the next frame.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stats(&self) -> Statistics {
        self.stats
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Final report, available once the session has finished.
    pub fn report(&self) -> Option<GameReport> {
        match self.status {
            GameStatus::Active => None,
            GameStatus::Finished(outcome) => Some(GameReport {
                outcome,
                stats: self.stats,
            }),
        }
    }
}
