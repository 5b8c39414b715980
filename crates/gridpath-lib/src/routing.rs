//! High-level path planning over a [`Grid`].
//!
//! This module provides:
//! - [`PathRequest`] - endpoints, algorithm, buffer capacity and limits
//! - [`PathPlan`] - outcome, written steps and statistics
//! - [`plan_path`] - single search into a buffer of the requested capacity
//! - [`plan_path_with_growth`] - caller-side retry that grows the buffer
//!
//! # Example
//!
//! ```
//! use gridpath_lib::{plan_path, Cell, Grid, PathRequest};
//!
//! let cells: [u8; 12] = [1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1];
//! let grid = Grid::new(4, 3, &cells)?;
//! let plan = plan_path(&grid, &PathRequest::new(Cell::new(0, 0), Cell::new(1, 2), 12))?;
//! assert_eq!(plan.steps, vec![1, 5, 9]);
//! # Ok::<(), gridpath_lib::Error>(())
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::grid::{Cell, CellId, Grid};
use crate::pathfinder::{find_path_report, PathOutcome, SearchOptions};
use crate::search::{SearchAlgorithm, SearchLimits, SearchStats};

/// High-level path planning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRequest {
    pub start: Cell,
    pub target: Cell,
    pub algorithm: SearchAlgorithm,
    /// Number of path cells the output buffer may hold.
    pub capacity: usize,
    pub limits: SearchLimits,
}

impl PathRequest {
    /// A* request with the given buffer capacity and no limits.
    pub fn new(start: Cell, target: Cell, capacity: usize) -> Self {
        Self {
            start,
            target,
            algorithm: SearchAlgorithm::default(),
            capacity,
            limits: SearchLimits::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            algorithm: self.algorithm,
            limits: self.limits,
        }
    }
}

/// Planned path returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathPlan {
    pub algorithm: SearchAlgorithm,
    pub start: Cell,
    pub target: Cell,
    pub outcome: PathOutcome,
    /// Capacity of the buffer used by the final attempt.
    pub capacity: usize,
    /// Cell ids written by the search (empty unless the outcome is `Found`).
    pub steps: Vec<CellId>,
    pub stats: SearchStats,
    /// Number of searches run to produce this plan.
    pub attempts: usize,
}

impl PathPlan {
    /// Number of moves in the path, if one exists.
    pub fn length(&self) -> Option<usize> {
        self.outcome.length()
    }
}

/// Run a single search into a buffer of `request.capacity` cells.
///
/// A path never has more than `grid.len() - 1` steps, so the buffer is
/// allocated at no more than `grid.len()` cells whatever capacity is asked for.
pub fn plan_path(grid: &Grid<'_>, request: &PathRequest) -> Result<PathPlan> {
    let mut buffer = vec![0; request.capacity.min(grid.len())];
    let report = find_path_report(
        request.start,
        request.target,
        grid,
        &mut buffer,
        &request.options(),
    )?;

    let written = match report.outcome {
        PathOutcome::Found { length } => length,
        _ => 0,
    };
    buffer.truncate(written);

    Ok(PathPlan {
        algorithm: request.algorithm,
        start: request.start,
        target: request.target,
        outcome: report.outcome,
        capacity: request.capacity,
        steps: buffer,
        stats: report.stats,
        attempts: 1,
    })
}

/// Plan a path, doubling the buffer capacity and searching again from scratch
/// while the path does not fit, up to `max_capacity`.
///
/// Every attempt is a fresh call; nothing is carried over between them. When
/// the path still does not fit at `max_capacity` the truncated plan is
/// returned so the caller can see the true length.
pub fn plan_path_with_growth(
    grid: &Grid<'_>,
    request: &PathRequest,
    max_capacity: usize,
) -> Result<PathPlan> {
    let mut attempt = *request;
    let mut attempts = 0;

    loop {
        let mut plan = plan_path(grid, &attempt)?;
        attempts += 1;
        plan.attempts = attempts;

        let PathOutcome::FoundButTruncated { length } = plan.outcome else {
            return Ok(plan);
        };

        if attempt.capacity >= max_capacity {
            warn!(
                length,
                capacity = attempt.capacity,
                max_capacity,
                "path does not fit within the maximum buffer capacity"
            );
            return Ok(plan);
        }

        let grown = attempt.capacity.max(1).saturating_mul(2).min(max_capacity);
        debug!(
            length,
            from = attempt.capacity,
            to = grown,
            "growing path buffer and searching again"
        );
        attempt.capacity = grown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor(len: usize) -> Grid<'static> {
        Grid::from_vec(len, 1, vec![1; len]).expect("valid grid")
    }

    #[test]
    fn plan_keeps_only_written_steps() {
        let grid = corridor(5);
        let plan = plan_path(&grid, &PathRequest::new(Cell::new(0, 0), Cell::new(4, 0), 10))
            .expect("valid request");
        assert_eq!(plan.steps, vec![1, 2, 3, 4]);
        assert_eq!(plan.length(), Some(4));
        assert_eq!(plan.attempts, 1);
    }

    #[test]
    fn growth_doubles_until_the_path_fits() {
        let grid = corridor(12);
        let request = PathRequest::new(Cell::new(0, 0), Cell::new(11, 0), 2);
        let plan = plan_path_with_growth(&grid, &request, 64).expect("valid request");
        assert_eq!(plan.outcome, PathOutcome::Found { length: 11 });
        assert_eq!(plan.capacity, 16);
        assert_eq!(plan.attempts, 4);
        assert_eq!(plan.steps.len(), 11);
    }

    #[test]
    fn growth_stops_at_the_maximum() {
        let grid = corridor(12);
        let request = PathRequest::new(Cell::new(0, 0), Cell::new(11, 0), 0);
        let plan = plan_path_with_growth(&grid, &request, 6).expect("valid request");
        assert_eq!(plan.outcome, PathOutcome::FoundButTruncated { length: 11 });
        assert_eq!(plan.capacity, 6);
        assert!(plan.steps.is_empty());
    }

    #[test]
    fn huge_capacity_allocates_only_what_the_grid_needs() {
        let grid = corridor(5);
        let request = PathRequest::new(Cell::new(0, 0), Cell::new(4, 0), usize::MAX);
        let plan = plan_path(&grid, &request).expect("valid request");
        assert_eq!(plan.outcome, PathOutcome::Found { length: 4 });
        assert_eq!(plan.capacity, usize::MAX);
        assert_eq!(plan.steps, vec![1, 2, 3, 4]);
    }

    #[test]
    fn growth_toward_huge_maximum_stops_once_the_path_fits() {
        let grid = corridor(12);
        let request = PathRequest::new(Cell::new(0, 0), Cell::new(11, 0), 1);
        let plan = plan_path_with_growth(&grid, &request, usize::MAX).expect("valid request");
        assert_eq!(plan.outcome, PathOutcome::Found { length: 11 });
        assert_eq!(plan.capacity, 16);
        assert_eq!(plan.attempts, 5);

        let request = PathRequest::new(Cell::new(0, 0), Cell::new(11, 0), usize::MAX);
        let plan = plan_path_with_growth(&grid, &request, usize::MAX).expect("valid request");
        assert_eq!(plan.outcome, PathOutcome::Found { length: 11 });
        assert_eq!(plan.attempts, 1);
    }

    #[test]
    fn growth_does_not_retry_unreachable_targets() {
        let grid = Grid::from_vec(3, 1, vec![1, 0, 1]).expect("valid grid");
        let request = PathRequest::new(Cell::new(0, 0), Cell::new(2, 0), 1);
        let plan = plan_path_with_growth(&grid, &request, 1024).expect("valid request");
        assert_eq!(plan.outcome, PathOutcome::NotFound);
        assert_eq!(plan.attempts, 1);
    }
}
