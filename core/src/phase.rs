//! Game phases and the transitions between them.

use std::fmt;

use crate::grid::Grid;
use crate::rules::{has_moves, has_won};

/// Which screen the session is on. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    StartScreen,
    Playing,
    Win,
    GameOver,
}

impl Phase {
    /// Only `Playing` processes moves.
    pub fn accepts_moves(self) -> bool {
        self == Phase::Playing
    }

    /// `Win` and `GameOver` have no way back to `Playing`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Win | Phase::GameOver)
    }

    /// Phase after a start signal. Only the start screen reacts to it.
    pub fn on_start(self) -> Phase {
        match self {
            Phase::StartScreen => Phase::Playing,
            other => other,
        }
    }

    /// Phase after an accepted move left the grid in `grid`.
    ///
    /// Win is checked before GameOver, so a move that reaches the target
    /// and fills the board resolves to `Win`.
    pub fn after_move(self, grid: &Grid) -> Phase {
        if self != Phase::Playing {
            return self;
        }
        if has_won(grid) {
            Phase::Win
        } else if !has_moves(grid) {
            Phase::GameOver
        } else {
            Phase::Playing
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::StartScreen => "start screen",
            Phase::Playing => "playing",
            Phase::Win => "win",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}
