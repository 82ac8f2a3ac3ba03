//! Progress trackers: score with high score, and the move counter.
//!
//! The set of trackers is fixed, so they are gathered in the [`Stat`] enum
//! instead of behind a trait object. Every tracker renders a one-line summary
//! through `Display`.

use std::fmt;

/// Current score plus the best score seen during this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    current: u32,
    high: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` to the current score, raising the high score if it is passed.
    /// Returns the points credited.
    pub fn add_points(&mut self, points: u32) -> u32 {
        self.current = self.current.saturating_add(points);
        if self.current > self.high {
            self.high = self.current;
        }
        points
    }

    /// Credit `floor(points * multiplier)` through [`add_points`](Self::add_points).
    /// Returns the points credited.
    pub fn add_scaled_points(&mut self, points: u32, multiplier: f32) -> u32 {
        let scaled = (f64::from(points) * f64::from(multiplier)).floor();
        // `as` saturates: negative and NaN become 0, overflow becomes u32::MAX.
        self.add_points(scaled as u32)
    }

    /// Current score back to 0; the high score is kept.
    pub fn reset_score(&mut self) {
        self.current = 0;
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn high(&self) -> u32 {
        self.high
    }
}

impl fmt::Display for ScoreTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current Score: {}, High Score: {}", self.current, self.high)
    }
}

/// Number of accepted moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveCounter {
    count: u32,
}

impl MoveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn moves(&self) -> u32 {
        self.count
    }
}

impl fmt::Display for MoveCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moves: {}", self.count)
    }
}

/// Any tracker the session exposes, for rendering them together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Score(ScoreTracker),
    Moves(MoveCounter),
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Score(score) => fmt::Display::fmt(score, f),
            Stat::Moves(moves) => fmt::Display::fmt(moves, f),
        }
    }
}
