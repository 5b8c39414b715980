//! Buffer-writing shortest-path entry points.
//!
//! [`find_path`] is the classic contract: validate the endpoints, search, and
//! write the cell ids of the path (start excluded, target included) into a
//! caller-provided buffer whose length is the capacity. The buffer is never
//! written past its end and is left untouched when the path does not fit.

use serde::Serialize;
use tracing::debug;

use crate::error::{Endpoint, Result};
use crate::grid::{Cell, CellId, Grid};
use crate::planner::select_planner;
use crate::search::{SearchAlgorithm, SearchLimits, SearchStats};

/// Algorithm and limits for a single search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub algorithm: SearchAlgorithm,
    pub limits: SearchLimits,
}

impl SearchOptions {
    pub fn with_algorithm(algorithm: SearchAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }
}

/// Outcome of a search that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    /// The path was written into the first `length` slots of the buffer.
    Found { length: usize },
    /// A path of `length` steps exists but the buffer is too small to hold it.
    FoundButTruncated { length: usize },
    /// The target cannot be reached from the start.
    NotFound,
}

impl PathOutcome {
    /// Path length in steps when a path exists, written or not.
    pub fn length(&self) -> Option<usize> {
        match *self {
            PathOutcome::Found { length } | PathOutcome::FoundButTruncated { length } => {
                Some(length)
            }
            PathOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found { .. })
    }

    /// Integer form of the outcome: the path length, or `-1` when no path
    /// exists. A truncated outcome still reports its true length.
    pub fn legacy_code(&self) -> i64 {
        self.length()
            .map_or(-1, |length| i64::try_from(length).unwrap_or(i64::MAX))
    }
}

/// Outcome together with the instrumentation gathered while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub outcome: PathOutcome,
    pub stats: SearchStats,
}

/// Find the shortest path from `start` to `target` with A*.
///
/// On success the first `length` entries of `out` hold the path. See
/// [`find_path_report`] for the full contract.
pub fn find_path(
    start: Cell,
    target: Cell,
    grid: &Grid<'_>,
    out: &mut [CellId],
) -> Result<PathOutcome> {
    find_path_with(start, target, grid, out, &SearchOptions::default())
}

/// Like [`find_path`] with an explicit algorithm and limits.
pub fn find_path_with(
    start: Cell,
    target: Cell,
    grid: &Grid<'_>,
    out: &mut [CellId],
    options: &SearchOptions,
) -> Result<PathOutcome> {
    find_path_report(start, target, grid, out, options).map(|report| report.outcome)
}

/// Find a path and report search statistics alongside the outcome.
///
/// # Errors
///
/// Fails fast when either endpoint is outside the grid or on a wall, and
/// when a configured [`SearchLimits`] bound is hit. An unreachable target
/// is reported as [`PathOutcome::NotFound`], not as an error.
pub fn find_path_report(
    start: Cell,
    target: Cell,
    grid: &Grid<'_>,
    out: &mut [CellId],
    options: &SearchOptions,
) -> Result<SearchReport> {
    let start_id = grid.endpoint_id(Endpoint::Start, start)?;
    let target_id = grid.endpoint_id(Endpoint::Target, target)?;

    if start_id == target_id {
        return Ok(SearchReport {
            outcome: PathOutcome::Found { length: 0 },
            stats: SearchStats::default(),
        });
    }

    let planner = select_planner(options.algorithm);
    debug!(
        algorithm = %options.algorithm,
        heuristic = planner.uses_heuristic(),
        %start,
        %target,
        capacity = out.len(),
        "starting grid search"
    );

    let tree = planner.search(grid, start_id, target_id, &options.limits)?;
    let stats = tree.stats();

    let outcome = match tree.cost() {
        None => PathOutcome::NotFound,
        Some(length) if length > out.len() => PathOutcome::FoundButTruncated { length },
        Some(length) => {
            tree.backtrack_into(&mut out[..length]);
            PathOutcome::Found { length }
        }
    };

    debug!(
        algorithm = %options.algorithm,
        pops = stats.pops,
        pushes = stats.pushes,
        length = ?outcome.length(),
        "grid search finished"
    );

    Ok(SearchReport { outcome, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn legacy_code_distinguishes_not_found() {
        assert_eq!(PathOutcome::Found { length: 3 }.legacy_code(), 3);
        assert_eq!(PathOutcome::FoundButTruncated { length: 8 }.legacy_code(), 8);
        assert_eq!(PathOutcome::NotFound.legacy_code(), -1);
    }

    #[test]
    fn start_equal_to_target_writes_nothing() {
        let grid = Grid::from_vec(2, 2, vec![1; 4]).expect("valid grid");
        let mut out = [usize::MAX; 2];
        let outcome =
            find_path(Cell::new(1, 1), Cell::new(1, 1), &grid, &mut out).expect("valid input");
        assert_eq!(outcome, PathOutcome::Found { length: 0 });
        assert_eq!(out, [usize::MAX; 2]);
    }

    #[test]
    fn invalid_endpoints_fail_before_searching() {
        let grid = Grid::from_vec(2, 2, vec![1, 0, 1, 1]).expect("valid grid");
        let mut out = [0; 4];
        let err = find_path(Cell::new(0, 0), Cell::new(1, 0), &grid, &mut out)
            .expect_err("target is a wall");
        assert!(matches!(
            err,
            Error::Blocked {
                role: Endpoint::Target,
                ..
            }
        ));

        let err = find_path(Cell::new(2, 0), Cell::new(0, 0), &grid, &mut out)
            .expect_err("start outside");
        assert!(matches!(
            err,
            Error::OutOfBounds {
                role: Endpoint::Start,
                ..
            }
        ));
    }

    #[test]
    fn outcome_serialises_with_status_tag() {
        let json = serde_json::to_string(&PathOutcome::FoundButTruncated { length: 4 })
            .expect("serialise");
        assert_eq!(json, r#"{"status":"found_but_truncated","length":4}"#);
    }
}
