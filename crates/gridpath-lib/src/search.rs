use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{CellId, Grid};

/// Distance recorded for cells the search has not reached yet.
const UNKNOWN: usize = usize::MAX;

/// Predecessor recorded for the start cell and for unreached cells.
const NO_PREDECESSOR: CellId = CellId::MAX;

/// Search strategies over a uniform-cost 4-connected grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// FIFO breadth-first search.
    Bfs,
    /// Priority search on cost-so-far with a finalized-cell set.
    UniformCost,
    /// A* with the Manhattan heuristic and lazy stale-entry skipping.
    #[default]
    AStar,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::UniformCost => "uniform-cost",
            SearchAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// Optional bounds on how long a single search may run.
///
/// Limits are checked between frontier pops and never change which path is
/// returned, only whether the search is allowed to finish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of frontier entries the search may pop.
    pub max_pops: Option<usize>,
    /// Wall-clock instant after which the search gives up.
    pub deadline: Option<Instant>,
}

impl SearchLimits {
    fn check(&self, pops: usize) -> Result<()> {
        if self.max_pops.is_some_and(|max| pops >= max) {
            return Err(Error::SearchInterrupted { pops });
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(Error::SearchInterrupted { pops });
        }
        Ok(())
    }
}

/// Per-search instrumentation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Frontier entries removed and inspected.
    pub pops: usize,
    /// Frontier entries inserted, including the start.
    pub pushes: usize,
    /// Popped entries discarded because a cheaper copy was already handled.
    pub stale_skips: usize,
    /// Cells whose neighbours were examined.
    pub expanded: usize,
}

/// Result of running one search strategy: the predecessor tree plus the cost
/// of the target when it was reached.
#[derive(Debug, Clone)]
pub struct SearchTree {
    start: CellId,
    target: CellId,
    cost: Option<usize>,
    predecessors: Vec<CellId>,
    stats: SearchStats,
}

impl SearchTree {
    /// Path length in steps, or `None` when the target is unreachable.
    pub fn cost(&self) -> Option<usize> {
        self.cost
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Walk predecessors back from the target, filling `out` from the end so
    /// that it reads in travel order (start excluded, target included).
    ///
    /// `out` must hold exactly the path length.
    pub(crate) fn backtrack_into(&self, out: &mut [CellId]) {
        let mut current = self.target;
        for slot in out.iter_mut().rev() {
            *slot = current;
            current = self.predecessors[current];
        }
        debug_assert_eq!(current, self.start, "predecessor chain must end at start");
    }

    /// Allocate and return the full path in travel order.
    pub fn path(&self) -> Option<Vec<CellId>> {
        let cost = self.cost?;
        let mut path = vec![0; cost];
        self.backtrack_into(&mut path);
        Some(path)
    }
}

/// Frontier entry ordered so that [`BinaryHeap`] pops the lowest `f` first.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct SearchNode {
    id: CellId,
    g: usize,
    h: usize,
}

impl SearchNode {
    fn new(id: CellId, g: usize, h: usize) -> Self {
        Self { id, g, h }
    }

    fn f(&self) -> usize {
        self.g + self.h
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by f, preferring
        // entries closer to the target and then lower ids.
        other
            .f()
            .cmp(&self.f())
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-known cost and predecessor per cell, sized to the grid.
struct SearchTables {
    distances: Vec<usize>,
    predecessors: Vec<CellId>,
}

impl SearchTables {
    fn new(len: usize, start: CellId) -> Self {
        let mut distances = vec![UNKNOWN; len];
        distances[start] = 0;
        Self {
            distances,
            predecessors: vec![NO_PREDECESSOR; len],
        }
    }

    /// Record `cost` for `cell` via `from` if it strictly improves the table.
    fn relax(&mut self, cell: CellId, from: CellId, cost: usize) -> bool {
        if cost < self.distances[cell] {
            self.distances[cell] = cost;
            self.predecessors[cell] = from;
            true
        } else {
            false
        }
    }

    fn finish(
        self,
        start: CellId,
        target: CellId,
        cost: Option<usize>,
        stats: SearchStats,
    ) -> SearchTree {
        SearchTree {
            start,
            target,
            cost,
            predecessors: self.predecessors,
            stats,
        }
    }
}

/// Run A* with the Manhattan heuristic from `start` to `target`.
///
/// A cell may sit in the frontier several times with different costs; popped
/// entries whose cost exceeds the distance table are stale and skipped. The
/// heuristic is consistent on a uniform-cost grid, so the first time the
/// target is popped its cost is optimal.
pub fn search_a_star(
    grid: &Grid<'_>,
    start: CellId,
    target: CellId,
    limits: &SearchLimits,
) -> Result<SearchTree> {
    let mut tables = SearchTables::new(grid.len(), start);
    let mut stats = SearchStats::default();
    let mut frontier = BinaryHeap::new();

    frontier.push(SearchNode::new(start, 0, grid.manhattan(start, target)));
    stats.pushes += 1;

    while let Some(node) = frontier.pop() {
        limits.check(stats.pops)?;
        stats.pops += 1;

        if node.g > tables.distances[node.id] {
            stats.stale_skips += 1;
            continue;
        }

        if node.id == target {
            return Ok(tables.finish(start, target, Some(node.g), stats));
        }

        stats.expanded += 1;
        let next_cost = node.g + 1;
        for next in grid.neighbours(node.id) {
            if tables.relax(next, node.id, next_cost) {
                frontier.push(SearchNode::new(
                    next,
                    next_cost,
                    grid.manhattan(next, target),
                ));
                stats.pushes += 1;
            }
        }
    }

    Ok(tables.finish(start, target, None, stats))
}

/// Run a cost-ordered priority search that finalizes each cell on its first
/// pop and never expands it again.
pub fn search_uniform_cost(
    grid: &Grid<'_>,
    start: CellId,
    target: CellId,
    limits: &SearchLimits,
) -> Result<SearchTree> {
    let mut tables = SearchTables::new(grid.len(), start);
    let mut finalized = vec![false; grid.len()];
    let mut stats = SearchStats::default();
    let mut frontier = BinaryHeap::new();

    frontier.push(SearchNode::new(start, 0, 0));
    stats.pushes += 1;

    while let Some(node) = frontier.pop() {
        limits.check(stats.pops)?;
        stats.pops += 1;

        if finalized[node.id] {
            stats.stale_skips += 1;
            continue;
        }
        finalized[node.id] = true;

        if node.id == target {
            return Ok(tables.finish(start, target, Some(node.g), stats));
        }

        stats.expanded += 1;
        let next_cost = node.g + 1;
        for next in grid.neighbours(node.id) {
            if finalized[next] {
                continue;
            }
            if tables.relax(next, node.id, next_cost) {
                frontier.push(SearchNode::new(next, next_cost, 0));
                stats.pushes += 1;
            }
        }
    }

    Ok(tables.finish(start, target, None, stats))
}

/// Run FIFO breadth-first search. Cells are claimed when first discovered,
/// which is optimal because every move costs one step.
pub fn search_bfs(
    grid: &Grid<'_>,
    start: CellId,
    target: CellId,
    limits: &SearchLimits,
) -> Result<SearchTree> {
    let mut tables = SearchTables::new(grid.len(), start);
    let mut stats = SearchStats::default();
    let mut queue = VecDeque::new();

    queue.push_back(start);
    stats.pushes += 1;

    while let Some(current) = queue.pop_front() {
        limits.check(stats.pops)?;
        stats.pops += 1;

        let cost = tables.distances[current];
        if current == target {
            return Ok(tables.finish(start, target, Some(cost), stats));
        }

        stats.expanded += 1;
        for next in grid.neighbours(current) {
            if tables.relax(next, current, cost + 1) {
                queue.push_back(next);
                stats.pushes += 1;
            }
        }
    }

    Ok(tables.finish(start, target, None, stats))
}
