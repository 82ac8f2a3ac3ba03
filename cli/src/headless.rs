//! Headless simulation: play many sessions with a fixed policy and report statistics.

use std::collections::BTreeMap;
use std::fmt;

use game_2048_engine::{Direction, EngineConfig, Phase, Session};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::{Args, Policy};

/// Aggregated results of a headless run.
#[derive(Debug, Default)]
pub struct Summary {
    policy: Option<Policy>,
    seed: u64,
    max_steps: u32,
    scores: Vec<u32>,
    max_tiles: Vec<u32>,
    wins: u32,
}

impl Summary {
    fn record(&mut self, session: &Session) {
        self.scores.push(session.score());
        self.max_tiles.push(session.max_tile());
        if session.phase() == Phase::Win {
            self.wins += 1;
        }
    }

    fn episodes(&self) -> usize {
        self.scores.len()
    }

    fn average(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let total: u64 = self.scores.iter().map(|&s| u64::from(s)).sum();
        total as f64 / self.scores.len() as f64
    }

    fn median(&self) -> f64 {
        let mut sorted = self.scores.clone();
        sorted.sort_unstable();
        let n = sorted.len();
        match n {
            0 => 0.0,
            _ if n % 2 == 0 => (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0,
            _ => f64::from(sorted[n / 2]),
        }
    }

    fn tile_distribution(&self) -> BTreeMap<u32, u32> {
        let mut counts = BTreeMap::new();
        for &tile in &self.max_tiles {
            *counts.entry(tile).or_insert(0u32) += 1;
        }
        counts
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Simulation Results ===")?;
        writeln!(f, "episodes={}", self.episodes())?;
        if let Some(policy) = self.policy {
            writeln!(f, "policy={:?}", policy)?;
        }
        writeln!(f, "seed={}", self.seed)?;
        writeln!(f, "max_steps={}", self.max_steps)?;
        writeln!(f, "avg_score={:.2}", self.average())?;
        writeln!(f, "median_score={:.2}", self.median())?;
        writeln!(f, "min_score={}", self.scores.iter().min().unwrap_or(&0))?;
        writeln!(f, "max_score={}", self.scores.iter().max().unwrap_or(&0))?;
        writeln!(f, "wins={}", self.wins)?;
        writeln!(
            f,
            "max_tile_overall={}",
            self.max_tiles.iter().max().unwrap_or(&0)
        )?;
        let distribution: Vec<String> = self
            .tile_distribution()
            .iter()
            .map(|(tile, count)| format!("{}:{}", tile, count))
            .collect();
        writeln!(f, "tile_distribution={}", distribution.join(","))
    }
}

/// Play `episodes` sessions seeded `seed, seed + 1, ...`.
pub fn run(args: &Args, config: EngineConfig, seed: u64, episodes: u32) -> Summary {
    let mut summary = Summary {
        policy: Some(args.policy),
        seed,
        max_steps: args.max_steps,
        ..Summary::default()
    };

    // Separate RNG for move selection so policies do not perturb spawns.
    let mut policy_rng = SmallRng::seed_from_u64(seed.wrapping_add(1000));

    for episode in 0..episodes {
        let mut session = Session::with_config(seed.wrapping_add(u64::from(episode)), config);
        session.start();
        let steps = play_episode(&mut session, args, &mut policy_rng);

        debug!(
            episode = episode + 1,
            score = session.score(),
            max_tile = session.max_tile(),
            steps,
            phase = %session.phase(),
            "episode finished"
        );
        summary.record(&session);
    }

    info!(episodes, wins = summary.wins, "simulation complete");
    summary
}

fn play_episode(session: &mut Session, args: &Args, rng: &mut SmallRng) -> u32 {
    let mut steps = 0;
    let mut cycle = 0;

    while session.phase() == Phase::Playing && (args.max_steps == 0 || steps < args.max_steps) {
        let legal = session.legal_moves();
        let direction = match args.policy {
            Policy::Random => select_random(&legal, rng),
            Policy::Cycle => select_cycle(&legal, &mut cycle),
        };
        let Some(direction) = direction else {
            break;
        };

        session.step(direction);
        steps += 1;

        if args.show_boards {
            println!("Step {}: {}", steps, direction);
            print!("{}", session.grid());
        }
    }
    steps
}

/// Pick uniformly among the legal directions.
fn select_random(legal: &[bool; 4], rng: &mut SmallRng) -> Option<Direction> {
    let candidates: Vec<Direction> = Direction::all()
        .into_iter()
        .zip(legal)
        .filter(|(_, ok)| **ok)
        .map(|(d, _)| d)
        .collect();
    candidates.choose(rng).copied()
}

/// Try Left, Down, Right, Up in turn, resuming where the last call stopped.
fn select_cycle(legal: &[bool; 4], cycle: &mut usize) -> Option<Direction> {
    const ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    for _ in 0..4 {
        let direction = ORDER[*cycle % 4];
        *cycle += 1;
        if legal[direction as usize] {
            return Some(direction);
        }
    }
    None
}
