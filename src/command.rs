use crate::config::QUIT_TOKEN;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Raw coordinates; may be negative or off the board.
    Shoot { row: i64, col: i64 },
}

/// Parse a line: the quit token, or exactly two whitespace-separated
/// integers. Anything else is `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line == QUIT_TOKEN {
        return Some(Command::Quit);
    }
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Shoot { row, col })
}
