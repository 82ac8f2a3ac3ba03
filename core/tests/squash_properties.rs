//! Property tests for the row collapse and directional squash.
//!
//! Invariants covered:
//! - Collapse keeps tiles packed toward index 0 and conserves the value sum.
//! - Collapse never chains merges: each output tile is built from at most two inputs.
//! - A collapsed line with no equal neighbors is a fixed point.
//! - Squash conserves the grid's value sum and earns nothing when nothing moves.
//! - A grid with no moves left is a fixed point of every direction.
//! - `has_moves` agrees with "some direction changes the grid" on non-empty grids.

use game_2048_engine::{collapse_row, has_moves, squash, Direction, Grid, Line};
use proptest::prelude::*;

fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), (1u32..=11).prop_map(|exp| 1 << exp)]
}

fn line() -> impl Strategy<Value = Line> {
    prop::array::uniform4(tile())
}

fn grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform4(line()).prop_map(Grid::from_rows)
}

fn direction() -> impl Strategy<Value = Direction> {
    (0u8..4).prop_map(|code| Direction::from_u8(code).unwrap())
}

fn tiles_in(line: &Line) -> usize {
    line.iter().filter(|&&v| v != 0).count()
}

fn has_equal_neighbors(line: &Line) -> bool {
    line.windows(2).any(|pair| pair[0] != 0 && pair[0] == pair[1])
}

proptest! {
    #[test]
    fn collapse_packs_toward_front(row in line()) {
        let (out, _) = collapse_row(row);
        let packed = tiles_in(&out);
        prop_assert!(out[..packed].iter().all(|&v| v != 0));
        prop_assert!(out[packed..].iter().all(|&v| v == 0));
    }

    #[test]
    fn collapse_conserves_sum(row in line()) {
        let (out, points) = collapse_row(row);
        prop_assert_eq!(row.iter().sum::<u32>(), out.iter().sum::<u32>());
        // Every merge adds its result to the points, so points never exceed the sum.
        prop_assert!(points <= out.iter().sum::<u32>());
    }

    #[test]
    fn collapse_never_chains_merges(row in line()) {
        let (out, _) = collapse_row(row);
        let input_tiles = tiles_in(&row);
        prop_assert!(tiles_in(&out) >= (input_tiles + 1) / 2);
        let max_in = row.iter().copied().max().unwrap_or(0);
        let max_out = out.iter().copied().max().unwrap_or(0);
        prop_assert!(max_out <= max_in * 2);
    }

    #[test]
    fn collapse_is_stable_once_nothing_can_merge(row in line()) {
        let (out, _) = collapse_row(row);
        if !has_equal_neighbors(&out) {
            prop_assert_eq!(collapse_row(out), (out, 0));
        }
    }

    #[test]
    fn squash_conserves_sum(g in grid(), d in direction()) {
        let result = squash(&g, d);
        prop_assert_eq!(g.total(), result.grid.total());
    }

    #[test]
    fn unchanged_squash_earns_nothing(g in grid(), d in direction()) {
        let result = squash(&g, d);
        if result.grid == g {
            prop_assert_eq!(result.points, 0);
        }
    }

    #[test]
    fn stuck_grid_is_fixed_point(g in grid(), d in direction()) {
        if !has_moves(&g) {
            let once = squash(&g, d);
            prop_assert_eq!(once.grid, g);
            prop_assert_eq!(once.points, 0);
            prop_assert_eq!(squash(&once.grid, d).grid, g);
        }
    }

    #[test]
    fn has_moves_matches_some_direction_changing(g in grid()) {
        if g.max_tile() > 0 {
            let any_change = Direction::all()
                .into_iter()
                .any(|d| squash(&g, d).grid != g);
            prop_assert_eq!(has_moves(&g), any_change);
        }
    }

    #[test]
    fn left_and_right_mirror_each_other(g in grid()) {
        let mirror = |grid: &Grid| {
            let mut rows = *grid.rows();
            for row in rows.iter_mut() {
                row.reverse();
            }
            Grid::from_rows(rows)
        };
        let left = squash(&g, Direction::Left);
        let right = squash(&mirror(&g), Direction::Right);
        prop_assert_eq!(mirror(&left.grid), right.grid);
        prop_assert_eq!(left.points, right.points);
    }
}

#[test]
fn scenario_rows() {
    assert_eq!(collapse_row([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
    assert_eq!(collapse_row([2, 0, 2, 4]), ([4, 4, 0, 0], 4));
}
