use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::grid::{Cell, CellId, Grid};
use crate::pathfinder::PathOutcome;
use crate::routing::PathPlan;
use crate::search::{SearchAlgorithm, SearchStats};

/// Coarse status of a planned path, used for display and serialisation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    Found,
    Truncated,
    NotFound,
}

impl PathStatus {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            PathStatus::Found => "Path",
            PathStatus::Truncated => "Path (not written, buffer too small)",
            PathStatus::NotFound => "No path",
        }
    }
}

impl From<PathOutcome> for PathStatus {
    fn from(outcome: PathOutcome) -> Self {
        match outcome {
            PathOutcome::Found { .. } => PathStatus::Found,
            PathOutcome::FoundButTruncated { .. } => PathStatus::Truncated,
            PathOutcome::NotFound => PathStatus::NotFound,
        }
    }
}

/// Step taken along a planned path.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    pub id: CellId,
    pub x: usize,
    pub y: usize,
}

/// Structured representation of a planned path that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathSummary {
    pub algorithm: SearchAlgorithm,
    pub status: PathStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    pub start: Cell,
    pub target: Cell,
    pub capacity: usize,
    pub steps: Vec<PathStep>,
    pub stats: SearchStats,
    pub attempts: usize,
}

impl PathSummary {
    /// Convert a [`PathPlan`] into a summary with resolved coordinates.
    pub fn from_plan(grid: &Grid<'_>, plan: &PathPlan) -> Self {
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let Cell { x, y } = grid.cell(id);
                PathStep {
                    index: index + 1,
                    id,
                    x,
                    y,
                }
            })
            .collect();

        Self {
            algorithm: plan.algorithm,
            status: plan.outcome.into(),
            length: plan.length(),
            start: plan.start,
            target: plan.target,
            capacity: plan.capacity,
            steps,
            stats: plan.stats,
            attempts: plan.attempts,
        }
    }

    /// Cell ids of the written path, in travel order.
    pub fn ids(&self) -> Vec<CellId> {
        self.steps.iter().map(|step| step.id).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering: a header line followed by one line per step.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        match self.length {
            Some(length) => {
                let _ = writeln!(
                    buffer,
                    "{}: {} -> {} ({} steps, algorithm: {})",
                    self.status.label(),
                    self.start,
                    self.target,
                    length,
                    self.algorithm
                );
            }
            None => {
                let _ = writeln!(
                    buffer,
                    "{}: {} -> {} (algorithm: {})",
                    self.status.label(),
                    self.start,
                    self.target,
                    self.algorithm
                );
            }
        }

        if self.status == PathStatus::Truncated {
            let _ = writeln!(buffer, "buffer capacity: {}", self.capacity);
        }

        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>4}: {} ({}, {})",
                step.index, step.id, step.x, step.y
            );
        }

        let _ = writeln!(
            buffer,
            "pops: {}, pushes: {}, stale: {}, expanded: {}",
            self.stats.pops, self.stats.pushes, self.stats.stale_skips, self.stats.expanded
        );
        buffer
    }

    /// Draw the grid with the path overlaid: `#` walls, `.` open cells,
    /// `*` path cells, `S` start and `T` target.
    pub fn render_overlay(&self, grid: &Grid<'_>) -> String {
        let mut canvas: Vec<char> = grid
            .cells()
            .iter()
            .enumerate()
            .map(|(id, _)| if grid.is_open(id) { '.' } else { '#' })
            .collect();

        for step in &self.steps {
            canvas[step.id] = '*';
        }
        if let Some(id) = grid.id(self.start) {
            canvas[id] = 'S';
        }
        if let Some(id) = grid.id(self.target) {
            canvas[id] = 'T';
        }

        let mut buffer = String::with_capacity(grid.len() + grid.height());
        for row in canvas.chunks(grid.width()) {
            buffer.extend(row);
            buffer.push('\n');
        }
        buffer
    }
}
