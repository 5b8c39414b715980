mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridpath_cli::output::OutputFormat;
use gridpath_cli::terminal::ColorPalette;

use crate::commands::find::{handle_find, FindArgs};
use crate::commands::scenarios::handle_scenarios;

#[derive(Parser, Debug)]
#[command(author, version, about = "Occupancy-grid shortest-path utilities")]
struct Cli {
    /// Output format for results.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colors even when the terminal supports them.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the shortest path across a map file.
    Find(FindArgs),
    /// Run the built-in reference scenarios and report timing and pop counts.
    Scenarios,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match &cli.command {
        Command::Find(args) => handle_find(args, cli.format, palette),
        Command::Scenarios => handle_scenarios(cli.format, palette),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
