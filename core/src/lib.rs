//! # 2048 Game Engine
//!
//! Grid transformation engine and game-progress state machine for the 2048
//! sliding-tile puzzle. Squashing, terminal checks and spawning are pure
//! functions over a [`Grid`]; [`Session`] strings them together with the
//! phase machine and score tracking, drawing spawns from an injectable RNG.
//!
//! ## Example
//!
//! ```rust
//! use game_2048_engine::{Direction, Input, Phase, Session};
//!
//! let mut session = Session::new(42); // seeded, starts on the start screen
//! session.handle(Input::Start);
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! let result = session.handle(Input::Move(Direction::Left));
//! println!("Score: {}, Changed: {}", session.score(), result.changed);
//! ```

pub mod config;
pub mod grid;
pub mod phase;
pub mod rules;
pub mod session;
pub mod spawn;
pub mod squash;
pub mod stats;

pub use config::{ConfigError, EngineConfig, ScoringPolicy};
pub use grid::{Direction, Grid, Line, MoveResult, SIZE, TARGET_TILE};
pub use phase::Phase;
pub use rules::{has_moves, has_won};
pub use session::{Input, Session, StepResult};
pub use spawn::{draw_tile_value, spawn_tile};
pub use squash::{collapse_row, squash};
pub use stats::{MoveCounter, ScoreTracker, Stat};
