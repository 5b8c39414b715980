//! gridpath library entry points.
//!
//! This crate loads occupancy grids, runs shortest-path searches over them
//! (4-connected, uniform step cost), and writes the resulting cell ids into
//! caller-provided buffers. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod grid;
pub mod map;
pub mod output;
pub mod pathfinder;
pub mod planner;
pub mod routing;
pub mod search;

pub use error::{Endpoint, Error, Result};
pub use grid::{Cell, CellId, Grid, WALL};
pub use map::{load_grid, parse_grid, MapFile};
pub use output::{PathStatus, PathStep, PathSummary};
pub use pathfinder::{
    find_path, find_path_report, find_path_with, PathOutcome, SearchOptions, SearchReport,
};
pub use planner::{select_planner, AStarPlanner, BfsPlanner, PathPlanner, UniformCostPlanner};
pub use routing::{plan_path, plan_path_with_growth, PathPlan, PathRequest};
pub use search::{SearchAlgorithm, SearchLimits, SearchStats, SearchTree};
