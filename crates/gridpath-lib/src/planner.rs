//! Search strategies implementing the Strategy pattern.
//!
//! Each [`SearchAlgorithm`] is wrapped in a [`PathPlanner`] so callers can
//! pick one at runtime without matching on the enum themselves.

use crate::error::Result;
use crate::grid::{CellId, Grid};
use crate::search::{
    search_a_star, search_bfs, search_uniform_cost, SearchAlgorithm, SearchLimits, SearchTree,
};

/// Trait for grid search strategies.
pub trait PathPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Search from `start` to `target`. Both ids must already be validated
    /// as in-bounds and traversable.
    fn search(
        &self,
        grid: &Grid<'_>,
        start: CellId,
        target: CellId,
        limits: &SearchLimits,
    ) -> Result<SearchTree>;

    /// Whether the planner orders its frontier with a distance estimate.
    fn uses_heuristic(&self) -> bool {
        false
    }
}

/// Breadth-first planner. Optimal here because every move costs one step.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPlanner;

impl PathPlanner for BfsPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Bfs
    }

    fn search(
        &self,
        grid: &Grid<'_>,
        start: CellId,
        target: CellId,
        limits: &SearchLimits,
    ) -> Result<SearchTree> {
        search_bfs(grid, start, target, limits)
    }
}

/// Cost-ordered planner that finalizes cells on first pop.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCostPlanner;

impl PathPlanner for UniformCostPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::UniformCost
    }

    fn search(
        &self,
        grid: &Grid<'_>,
        start: CellId,
        target: CellId,
        limits: &SearchLimits,
    ) -> Result<SearchTree> {
        search_uniform_cost(grid, start, target, limits)
    }
}

/// A* planner guided by Manhattan distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl PathPlanner for AStarPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::AStar
    }

    fn search(
        &self,
        grid: &Grid<'_>,
        start: CellId,
        target: CellId,
        limits: &SearchLimits,
    ) -> Result<SearchTree> {
        search_a_star(grid, start, target, limits)
    }

    fn uses_heuristic(&self) -> bool {
        true
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: SearchAlgorithm) -> Box<dyn PathPlanner> {
    match algorithm {
        SearchAlgorithm::Bfs => Box::new(BfsPlanner),
        SearchAlgorithm::UniformCost => Box::new(UniformCostPlanner),
        SearchAlgorithm::AStar => Box::new(AStarPlanner),
    }
}
