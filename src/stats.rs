//! Per-session shot counters.

use core::fmt;

/// Attempts, hits and misses for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Statistics {
    pub attempts: u32,
    pub hits: u32,
    pub misses: u32,
}

impl Statistics {
    /// Count one resolved shot.
    pub fn record(&mut self, hit: bool) {
        self.attempts += 1;
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    /// Hit percentage, or `None` before the first attempt.
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.hits as f64 / self.attempts as f64 * 100.0)
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Game statistics ---")?;
        writeln!(f, "Attempts: {}", self.attempts)?;
        writeln!(f, "Hits:     {}", self.hits)?;
        writeln!(f, "Misses:   {}", self.misses)?;
        if let Some(accuracy) = self.accuracy() {
            writeln!(f, "Accuracy: {:.1}%", accuracy)?;
        }
        Ok(())
    }
}
