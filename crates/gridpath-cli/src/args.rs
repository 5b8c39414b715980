//! Argument types shared by the CLI subcommands.

use clap::ValueEnum;

use gridpath_lib::{Cell, SearchAlgorithm};

/// Search algorithm selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// A* with the Manhattan heuristic.
    #[default]
    AStar,
    /// Cost-ordered search that finalizes each cell once.
    UniformCost,
    /// Breadth-first search.
    Bfs,
}

impl From<AlgorithmArg> for SearchAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::AStar => SearchAlgorithm::AStar,
            AlgorithmArg::UniformCost => SearchAlgorithm::UniformCost,
            AlgorithmArg::Bfs => SearchAlgorithm::Bfs,
        }
    }
}

/// Parse an `X,Y` coordinate pair.
pub fn parse_cell(value: &str) -> Result<Cell, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x = x
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid x coordinate '{}': {err}", x.trim()))?;
    let y = y
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid y coordinate '{}': {err}", y.trim()))?;
    Ok(Cell::new(x, y))
}
