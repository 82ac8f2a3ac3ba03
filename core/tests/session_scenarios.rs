//! End-to-end scenarios driving a seeded `Session` through its phases.

use game_2048_engine::{
    has_moves, has_won, Direction, EngineConfig, Grid, Input, Phase, ScoreTracker, Session,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn playing(rows: [[u32; 4]; 4]) -> Session {
    let mut session = Session::with_rng(SmallRng::seed_from_u64(2048), EngineConfig::default());
    session.handle(Input::Start);
    session.set_grid(Grid::from_rows(rows));
    session
}

#[test]
fn merging_two_1024s_wins() {
    let mut session = playing([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let result = session.handle(Input::Move(Direction::Left));

    assert!(result.changed);
    assert_eq!(session.grid().get(0, 0), 2048);
    assert!(has_won(session.grid()));
    assert_eq!(result.phase, Phase::Win);
    assert_eq!(session.phase(), Phase::Win);
    // 2048 points cross the bonus threshold: floor(2048 * 1.5).
    assert_eq!(session.score(), 3072);
}

#[test]
fn win_takes_precedence_over_full_board() {
    // Left leaves (0, 3) as the only empty cell; whatever spawns there
    // (2 or 4) has no equal neighbor, so the board is also stuck.
    let mut session = playing([
        [1024, 1024, 32, 8],
        [2, 4, 2, 16],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
    ]);
    let result = session.step(Direction::Left);

    assert!(result.changed);
    assert!(!has_moves(session.grid()));
    assert_eq!(session.phase(), Phase::Win);
}

#[test]
fn last_merge_into_stuck_board_is_game_over() {
    let mut session = playing([
        [2, 2, 8, 16],
        [2, 4, 2, 32],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
    ]);
    let result = session.step(Direction::Left);

    assert!(result.changed);
    assert_eq!(result.points, 4);
    assert_eq!(session.grid().row(0)[..3], [4, 8, 16]);
    assert_eq!(result.phase, Phase::GameOver);
}

#[test]
fn terminal_phases_ignore_everything_but_quit() {
    let mut session = playing([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
    session.step(Direction::Left);
    assert_eq!(session.phase(), Phase::Win);

    let grid = *session.grid();
    let moves = session.moves();
    for input in [
        Input::Start,
        Input::Move(Direction::Right),
        Input::Move(Direction::Down),
    ] {
        let result = session.handle(input);
        assert!(!result.changed);
        assert_eq!(result.phase, Phase::Win);
    }
    assert_eq!(*session.grid(), grid);
    assert_eq!(session.moves(), moves);

    session.handle(Input::Quit);
    assert!(session.is_quit());
}

#[test]
fn same_seed_same_game() {
    let mut a = Session::new(54321);
    let mut b = Session::new(54321);
    assert_eq!(a.grid(), b.grid());

    a.start();
    b.start();
    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        let ra = a.step(direction);
        let rb = b.step(direction);
        assert_eq!(ra, rb);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn random_play_keeps_invariants() {
    let mut session = Session::new(7);
    session.start();
    let mut accepted = 0;

    for i in 0..500usize {
        if session.phase() != Phase::Playing {
            break;
        }
        let direction = Direction::all()[i % 4];
        let before = *session.grid();
        let high_before = session.high_score();
        let result = session.step(direction);

        if result.changed {
            accepted += 1;
            // One spawn on top of a sum-preserving squash.
            let added = session.grid().total() - before.total();
            assert!(added == 2 || added == 4);
        } else {
            assert_eq!(*session.grid(), before);
        }
        assert!(session.high_score() >= high_before);
        assert!(session
            .grid()
            .values()
            .all(|v| v == 0 || (v >= 2 && v.is_power_of_two())));
    }
    assert_eq!(session.moves(), accepted);
}

#[test]
fn plain_then_bonus_points() {
    let mut score = ScoreTracker::new();
    score.add_points(100);
    score.add_scaled_points(50, 1.5);
    assert_eq!(score.current(), 175);
    assert_eq!(score.high(), 175);
}
