//! Text map ingestion.
//!
//! A map file holds one grid row per non-empty line; trailing whitespace is
//! ignored. `0` and `#` are walls and are stored as byte `0`. Every other
//! character is open and stored as its own byte value (non-ASCII characters
//! are stored as `1`). `S` marks the start and `T` or `F` the target; both are
//! open cells.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid, WALL};

const START_MARKER: char = 'S';
const TARGET_MARKERS: [char; 2] = ['T', 'F'];

/// A grid loaded from text together with any endpoint markers it contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFile {
    pub grid: Grid<'static>,
    pub start: Option<Cell>,
    pub target: Option<Cell>,
}

/// Read and parse a map file.
pub fn load_grid(path: &Path) -> Result<MapFile> {
    let text = fs::read_to_string(path).map_err(|source| Error::MapRead {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parse_grid(&text)?;
    debug!(
        path = %path.display(),
        width = map.grid.width(),
        height = map.grid.height(),
        "loaded map"
    );
    Ok(map)
}

/// Parse a map from its textual form.
pub fn parse_grid(text: &str) -> Result<MapFile> {
    let mut cells = Vec::new();
    let mut width = None;
    let mut height = 0;
    let mut start = None;
    let mut target = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;

        let mut row_width = 0;
        for (x, ch) in line.chars().enumerate() {
            let cell = Cell::new(x, height);
            if ch == START_MARKER {
                record_marker(&mut start, cell, ch, line_no)?;
            } else if TARGET_MARKERS.contains(&ch) {
                record_marker(&mut target, cell, ch, line_no)?;
            }
            cells.push(cell_byte(ch));
            row_width += 1;
        }

        match width {
            None => width = Some(row_width),
            Some(expected) if expected != row_width => {
                return Err(Error::RaggedMap {
                    line: line_no,
                    expected,
                    actual: row_width,
                });
            }
            Some(_) => {}
        }
        height += 1;
    }

    let Some(width) = width else {
        return Err(Error::EmptyMap);
    };

    Ok(MapFile {
        grid: Grid::from_vec(width, height, cells)?,
        start,
        target,
    })
}

fn cell_byte(ch: char) -> u8 {
    match ch {
        '0' | '#' => WALL,
        other if other.is_ascii() => other as u8,
        _ => 1,
    }
}

fn record_marker(slot: &mut Option<Cell>, cell: Cell, marker: char, line: usize) -> Result<()> {
    if slot.is_some() {
        return Err(Error::DuplicateMarker { marker, line });
    }
    *slot = Some(cell);
    Ok(())
}
