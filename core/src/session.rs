//! A single game session: owns the grid, phase, trackers and RNG, and applies
//! presentation input to them one event at a time.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::config::{EngineConfig, ScoringPolicy};
use crate::grid::{Direction, Grid};
use crate::phase::Phase;
use crate::spawn::spawn_tile;
use crate::squash::squash;
use crate::stats::{MoveCounter, ScoreTracker, Stat};

/// One input event from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Leave the start screen.
    Start,
    Move(Direction),
    Quit,
}

/// Result of handling one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the grid changed (and a new tile was spawned).
    pub changed: bool,
    /// Points earned from merges in this move.
    pub points: u32,
    /// Points actually added to the score after the bonus policy.
    pub awarded: u32,
    /// Phase after the input was applied.
    pub phase: Phase,
}

impl StepResult {
    fn unchanged(phase: Phase) -> Self {
        StepResult {
            changed: false,
            points: 0,
            awarded: 0,
            phase,
        }
    }
}

/// The 2048 game session.
///
/// Generic over the RNG so tests can inject a seeded one; the default is
/// `SmallRng`.
#[derive(Debug, Clone)]
pub struct Session<R = SmallRng> {
    grid: Grid,
    phase: Phase,
    score: ScoreTracker,
    moves: MoveCounter,
    scoring: ScoringPolicy,
    rng: R,
    quit: bool,
}

impl Session<SmallRng> {
    /// Create a new session with the given seed and default configuration.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, EngineConfig::default())
    }

    pub fn with_config(seed: u64, config: EngineConfig) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), config)
    }

    /// Create a session whose RNG is seeded from OS entropy.
    pub fn from_entropy(config: EngineConfig) -> Self {
        Self::with_rng(SmallRng::from_entropy(), config)
    }
}

impl<R: Rng> Session<R> {
    /// Create a session drawing spawns from `rng`.
    ///
    /// The grid starts with two random tiles and the session on the start screen.
    pub fn with_rng(rng: R, config: EngineConfig) -> Self {
        let mut session = Session {
            grid: Grid::empty(),
            phase: Phase::StartScreen,
            score: ScoreTracker::new(),
            moves: MoveCounter::new(),
            scoring: config.scoring,
            rng,
            quit: false,
        };
        spawn_tile(&mut session.grid, &mut session.rng);
        spawn_tile(&mut session.grid, &mut session.rng);
        session
    }

    /// Apply one input event. Inputs that do not fit the current phase are ignored.
    pub fn handle(&mut self, input: Input) -> StepResult {
        match input {
            Input::Start => {
                self.start();
                StepResult::unchanged(self.phase)
            }
            Input::Move(direction) => self.step(direction),
            Input::Quit => {
                self.quit = true;
                info!(phase = %self.phase, "quit requested");
                StepResult::unchanged(self.phase)
            }
        }
    }

    /// Leave the start screen. No effect in any other phase.
    pub fn start(&mut self) -> Phase {
        self.set_phase(self.phase.on_start());
        self.phase
    }

    /// Squash the grid toward `direction`.
    ///
    /// If the grid changed, spawn one tile, credit the points, count the move
    /// and re-evaluate the phase. Otherwise nothing happens. Ignored outside
    /// `Playing`.
    pub fn step(&mut self, direction: Direction) -> StepResult {
        if !self.phase.accepts_moves() {
            trace!(%direction, phase = %self.phase, "move ignored");
            return StepResult::unchanged(self.phase);
        }

        let old = self.grid;
        let result = squash(&old, direction);
        if result.grid == old {
            trace!(%direction, "move changed nothing");
            return StepResult::unchanged(self.phase);
        }

        self.grid = result.grid;
        spawn_tile(&mut self.grid, &mut self.rng);

        let awarded = if self.scoring.applies_bonus(result.points) {
            self.score
                .add_scaled_points(result.points, self.scoring.bonus_multiplier)
        } else {
            self.score.add_points(result.points)
        };
        self.moves.increment();
        debug!(
            %direction,
            points = result.points,
            awarded,
            score = self.score.current(),
            "move accepted"
        );

        self.set_phase(self.phase.after_move(&self.grid));

        StepResult {
            changed: true,
            points: result.points,
            awarded,
            phase: self.phase,
        }
    }

    /// Which of [Up, Down, Left, Right] would change the grid.
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::all().map(|direction| squash(&self.grid, direction).grid != self.grid)
    }
}

impl<R> Session<R> {
    fn set_phase(&mut self, next: Phase) {
        if next != self.phase {
            info!(from = %self.phase, to = %next, "phase changed");
            self.phase = next;
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replace the grid, e.g. to set up a known position.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score.current()
    }

    pub fn high_score(&self) -> u32 {
        self.score.high()
    }

    pub fn moves(&self) -> u32 {
        self.moves.moves()
    }

    pub fn scoring(&self) -> &ScoringPolicy {
        &self.scoring
    }

    /// Trackers in display order.
    pub fn stats(&self) -> [Stat; 2] {
        [Stat::Score(self.score), Stat::Moves(self.moves)]
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    pub fn empty_count(&self) -> usize {
        self.grid.empty_count()
    }

    /// Whether a quit signal has been received.
    pub fn is_quit(&self) -> bool {
        self.quit
    }
}
