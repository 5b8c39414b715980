//! Find command handler for computing a path across a map file.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Args;

use gridpath_lib::{
    load_grid, plan_path, plan_path_with_growth, Cell, Endpoint, Error as LibError, PathOutcome,
    PathRequest, PathSummary, SearchLimits,
};

use gridpath_cli::args::{parse_cell, AlgorithmArg};
use gridpath_cli::output::{print_footer, OutputFormat};
use gridpath_cli::terminal::ColorPalette;

/// Arguments for the find command.
#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Map file: one row per line, `0` or `#` for walls, `S`/`T` endpoint markers.
    #[arg(long)]
    pub map: PathBuf,
    /// Start cell as X,Y (defaults to the map's `S` marker).
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<Cell>,
    /// Target cell as X,Y (defaults to the map's `T` or `F` marker).
    #[arg(long, value_parser = parse_cell)]
    pub target: Option<Cell>,
    /// Search algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
    pub algorithm: AlgorithmArg,
    /// Output buffer capacity in cells (defaults to the number of map cells).
    #[arg(long)]
    pub capacity: Option<usize>,
    /// Retry with a doubled buffer while the path does not fit, up to this capacity.
    #[arg(long)]
    pub grow_to: Option<usize>,
    /// Abort the search after this many frontier pops.
    #[arg(long)]
    pub max_pops: Option<usize>,
    /// Abort the search after this many milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// Handle the find subcommand.
pub fn handle_find(args: &FindArgs, format: OutputFormat, palette: ColorPalette) -> Result<()> {
    let started = Instant::now();

    let map = load_grid(&args.map)
        .with_context(|| format!("failed to load map from {}", args.map.display()))?;

    let start = args
        .start
        .or(map.start)
        .ok_or(LibError::MissingEndpoint {
            role: Endpoint::Start,
        })?;
    let target = args
        .target
        .or(map.target)
        .ok_or(LibError::MissingEndpoint {
            role: Endpoint::Target,
        })?;

    let limits = SearchLimits {
        max_pops: args.max_pops,
        deadline: args
            .timeout_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms)),
    };
    let request = PathRequest::new(start, target, args.capacity.unwrap_or(map.grid.len()))
        .with_algorithm(args.algorithm.into())
        .with_limits(limits);

    let plan = match args.grow_to {
        Some(max_capacity) => plan_path_with_growth(&map.grid, &request, max_capacity),
        None => plan_path(&map.grid, &request),
    }
    .context("path search failed")?;

    let summary = PathSummary::from_plan(&map.grid, &plan);
    print!("{}", format.render(&summary, &map.grid, palette)?);

    if plan.outcome == PathOutcome::NotFound {
        bail!("no path from {start} to {target}");
    }

    if format.is_human() {
        print_footer(started.elapsed(), palette);
    }
    Ok(())
}
