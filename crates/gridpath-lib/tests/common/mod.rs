//! Shared fixtures and oracles for integration tests.

use std::collections::VecDeque;

use gridpath_lib::{CellId, Grid};

/// Reference map from the first scenario: 4x3, path (0,0) -> (1,2) is {1, 5, 9}.
pub const SCENARIO_A: [u8; 12] = [1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1];

/// Reference map from the second scenario: 3x3, (0,2) is walled in.
pub const SCENARIO_B: [u8; 9] = [0, 0, 1, 0, 1, 1, 1, 0, 1];

/// Hand-built maze with dead ends, a loop and an unreachable pocket.
pub const MAZE: &str = "\
S..#......
##.#.####.
...#.#....
.###.#.##.
.....#..#.
.#####.##.
...#...#..
##.#.###.#
...#..##..
.#...#.#T#
";

/// Shortest path lengths from `start` to every cell by plain FIFO BFS, or
/// `None` for cells it cannot reach.
pub fn brute_force_distances(grid: &Grid<'_>, start: CellId) -> Vec<Option<usize>> {
    let mut distances = vec![None; grid.len()];
    if !grid.is_open(start) {
        return distances;
    }
    distances[start] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let cost = distances[current].unwrap_or_default();
        for next in grid.neighbours(current) {
            if distances[next].is_none() {
                distances[next] = Some(cost + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// Assert that `path` walks from `start` to `target` in orthogonal unit steps
/// over open cells.
pub fn assert_contiguous(grid: &Grid<'_>, start: CellId, target: CellId, path: &[CellId]) {
    let mut previous = start;
    for &id in path {
        assert!(grid.is_open(id), "path crosses wall at {id}");
        assert_eq!(
            grid.manhattan(previous, id),
            1,
            "{previous} -> {id} is not a single orthogonal step"
        );
        previous = id;
    }
    assert_eq!(previous, target, "path must end at the target");
}
