//! Built-in reference scenarios with timing and pop-count reporting.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde_json::json;

use gridpath_lib::{find_path_report, Cell, Grid, SearchOptions, SearchReport};

use gridpath_cli::output::{format_elapsed, print_footer, OutputFormat};
use gridpath_cli::terminal::ColorPalette;

struct Scenario {
    name: &'static str,
    width: usize,
    height: usize,
    cells: &'static [u8],
    start: Cell,
    target: Cell,
    capacity: usize,
}

const SCENARIOS: [Scenario; 2] = [
    Scenario {
        name: "A",
        width: 4,
        height: 3,
        cells: &[1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1],
        start: Cell::new(0, 0),
        target: Cell::new(1, 2),
        capacity: 12,
    },
    Scenario {
        name: "B",
        width: 3,
        height: 3,
        cells: &[0, 0, 1, 0, 1, 1, 1, 0, 1],
        start: Cell::new(2, 0),
        target: Cell::new(0, 2),
        capacity: 7,
    },
];

struct ScenarioRun {
    report: SearchReport,
    path: Vec<usize>,
    elapsed: Duration,
}

fn run(scenario: &Scenario) -> Result<ScenarioRun> {
    let grid = Grid::new(scenario.width, scenario.height, scenario.cells)
        .with_context(|| format!("scenario {} has an invalid grid", scenario.name))?;
    let mut out = vec![0; scenario.capacity];

    let started = Instant::now();
    let report = find_path_report(
        scenario.start,
        scenario.target,
        &grid,
        &mut out,
        &SearchOptions::default(),
    )
    .with_context(|| format!("scenario {} failed", scenario.name))?;
    let elapsed = started.elapsed();

    let written = if report.outcome.is_found() {
        report.outcome.length().unwrap_or_default()
    } else {
        0
    };
    out.truncate(written);

    Ok(ScenarioRun {
        report,
        path: out,
        elapsed,
    })
}

/// Handle the scenarios subcommand.
pub fn handle_scenarios(format: OutputFormat, palette: ColorPalette) -> Result<()> {
    let started = Instant::now();
    let mut results = Vec::with_capacity(SCENARIOS.len());

    for scenario in &SCENARIOS {
        let result = run(scenario)?;
        tracing::debug!(
            scenario = scenario.name,
            pops = result.report.stats.pops,
            "scenario finished"
        );
        results.push((scenario, result));
    }

    if format == OutputFormat::Json {
        let payload: Vec<_> = results
            .iter()
            .map(|(scenario, result)| {
                json!({
                    "scenario": scenario.name,
                    "start": scenario.start,
                    "target": scenario.target,
                    "length": result.report.outcome.legacy_code(),
                    "outcome": result.report.outcome,
                    "path": result.path,
                    "stats": result.report.stats,
                    "elapsed_us": result.elapsed.as_micros() as u64,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for (scenario, result) in &results {
        let path = result
            .path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "Scenario {}: {} -> {}",
            scenario.name, scenario.start, scenario.target
        );
        println!("Length shortest path: {}", result.report.outcome.legacy_code());
        println!("{{{path}}}");
        println!(
            "Pops: {}, search time: {}",
            result.report.stats.pops,
            format_elapsed(result.elapsed)
        );
    }

    print_footer(started.elapsed(), palette);
    Ok(())
}
