//! Output formatting for path rendering.
//!
//! This module turns a [`PathSummary`] into text, JSON or a colored map
//! overlay for the terminal.

use std::time::Duration;

use anyhow::Result;
use clap::ValueEnum;

use gridpath_lib::{Grid, PathSummary};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header line plus one line per step.
    #[default]
    Text,
    /// Pretty-printed JSON summary.
    Json,
    /// The map with the path drawn over it.
    Overlay,
}

impl OutputFormat {
    /// Render a summary in this format.
    pub fn render(
        self,
        summary: &PathSummary,
        grid: &Grid<'_>,
        palette: ColorPalette,
    ) -> Result<String> {
        Ok(match self {
            OutputFormat::Text => summary.render_plain(),
            OutputFormat::Json => {
                let mut json = summary.to_json()?;
                json.push('\n');
                json
            }
            OutputFormat::Overlay => {
                let mut text = colorize_overlay(&summary.render_overlay(grid), palette);
                text.push_str(&summary.render_plain());
                text
            }
        })
    }

    /// Whether human-oriented decorations (timing footer) may be printed.
    pub fn is_human(self) -> bool {
        !matches!(self, OutputFormat::Json)
    }
}

/// Apply palette colors to the characters of a plain overlay.
pub fn colorize_overlay(overlay: &str, palette: ColorPalette) -> String {
    if palette.is_plain() {
        return overlay.to_string();
    }

    let mut buffer = String::with_capacity(overlay.len() * 2);
    for ch in overlay.chars() {
        let color = match ch {
            'S' => palette.start,
            'T' => palette.target,
            '*' => palette.path,
            '#' => palette.gray,
            _ => {
                buffer.push(ch);
                continue;
            }
        };
        buffer.push_str(color);
        buffer.push(ch);
        buffer.push_str(palette.reset);
    }
    buffer
}

/// Format an elapsed duration with a unit suited to its size.
pub fn format_elapsed(elapsed: Duration) -> String {
    let micros = elapsed.as_micros();
    if micros < 1_000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", elapsed.as_secs_f64() * 1_000.0)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: Duration, palette: ColorPalette) {
    println!(
        "\n{}Completed in {}{}",
        palette.gray,
        format_elapsed(elapsed),
        palette.reset
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_overlay_untouched() {
        let overlay = "S*#\n..T\n";
        assert_eq!(colorize_overlay(overlay, ColorPalette::plain()), overlay);
    }

    #[test]
    fn colored_palette_wraps_marked_cells() {
        let palette = ColorPalette::colored();
        let colored = colorize_overlay("S.", palette);
        assert_eq!(colored, format!("{}S{}.", palette.start, palette.reset));
    }

    #[test]
    fn elapsed_uses_fitting_unit() {
        assert_eq!(format_elapsed(Duration::from_micros(250)), "250µs");
        assert_eq!(format_elapsed(Duration::from_micros(1_500)), "1.50ms");
        assert_eq!(format_elapsed(Duration::from_millis(2_500)), "2.50s");
    }
}
