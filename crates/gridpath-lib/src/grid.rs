use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::error::{Endpoint, Error, Result};

/// Linear identifier of a grid cell (`y * width + x`).
pub type CellId = usize;

/// Byte value marking a wall. Every other byte is open.
pub const WALL: u8 = 0;

/// Coordinate of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Row-major occupancy grid.
///
/// The grid either borrows a caller's byte buffer or owns one produced by the
/// map loader. It is never mutated once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<'a> {
    width: usize,
    height: usize,
    cells: Cow<'a, [u8]>,
}

impl<'a> Grid<'a> {
    /// Wrap a borrowed row-major buffer of exactly `width * height` bytes.
    pub fn new(width: usize, height: usize, cells: &'a [u8]) -> Result<Self> {
        Self::with_cells(width, height, Cow::Borrowed(cells))
    }

    fn with_cells(width: usize, height: usize, cells: Cow<'a, [u8]>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(Error::InvalidDimensions { width, height })?;
        if cells.len() != expected {
            return Err(Error::MapSizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw row-major cell bytes.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Linear id of `cell`, or `None` when it lies outside the grid.
    pub fn id(&self, cell: Cell) -> Option<CellId> {
        self.contains(cell).then(|| cell.y * self.width + cell.x)
    }

    /// Coordinate for a linear id. `id` must be below [`Grid::len`].
    pub fn cell(&self, id: CellId) -> Cell {
        debug_assert!(id < self.len());
        Cell {
            x: id % self.width,
            y: id / self.width,
        }
    }

    /// Whether the cell with this id can be entered.
    pub fn is_open(&self, id: CellId) -> bool {
        self.cells.get(id).is_some_and(|&byte| byte != WALL)
    }

    /// Traversable orthogonal neighbours of `id`, in left, right, up, down order.
    pub fn neighbours(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        let Cell { x, y } = self.cell(id);
        let width = self.width;
        let left = (x > 0).then(|| id - 1);
        let right = (x + 1 < width).then(|| id + 1);
        let up = (y > 0).then(|| id - width);
        let down = (y + 1 < self.height).then(|| id + width);
        let cells: &[u8] = &self.cells;
        [left, right, up, down]
            .into_iter()
            .flatten()
            .filter(move |&next| cells[next] != WALL)
    }

    /// Manhattan distance between two linear ids.
    pub fn manhattan(&self, a: CellId, b: CellId) -> usize {
        self.cell(a).manhattan(self.cell(b))
    }

    /// Check that `cell` is inside the grid and traversable, returning its id.
    pub fn endpoint_id(&self, role: Endpoint, cell: Cell) -> Result<CellId> {
        let id = self.id(cell).ok_or(Error::OutOfBounds {
            role,
            cell,
            width: self.width,
            height: self.height,
        })?;
        if !self.is_open(id) {
            return Err(Error::Blocked { role, cell });
        }
        Ok(id)
    }
}

impl Grid<'static> {
    /// Build a grid that owns its row-major buffer.
    pub fn from_vec(width: usize, height: usize, cells: Vec<u8>) -> Result<Self> {
        Self::with_cells(width, height, Cow::Owned(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<'static> {
        Grid::from_vec(4, 3, vec![1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1]).expect("valid grid")
    }

    #[test]
    fn ids_round_trip_through_cells() {
        let grid = sample();
        for id in 0..grid.len() {
            assert_eq!(grid.id(grid.cell(id)), Some(id));
        }
        assert_eq!(grid.id(Cell::new(1, 2)), Some(9));
    }

    #[test]
    fn coordinates_on_the_far_edge_are_out_of_bounds() {
        let grid = sample();
        assert_eq!(grid.id(Cell::new(4, 0)), None);
        assert_eq!(grid.id(Cell::new(0, 3)), None);
    }

    #[test]
    fn any_nonzero_byte_is_open() {
        let cells = [b'.', 0, 7, b'S'];
        let grid = Grid::new(2, 2, &cells).expect("valid grid");
        assert!(grid.is_open(0));
        assert!(!grid.is_open(1));
        assert!(grid.is_open(2));
        assert!(grid.is_open(3));
    }

    #[test]
    fn neighbours_skip_walls_and_edges() {
        let grid = sample();
        assert_eq!(grid.neighbours(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(grid.neighbours(5).collect::<Vec<_>>(), vec![1, 9]);
        assert_eq!(grid.neighbours(11).collect::<Vec<_>>(), vec![10, 7]);
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err = Grid::new(3, 3, &[1; 8]).expect_err("short buffer");
        assert!(matches!(
            err,
            Error::MapSizeMismatch {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let err = Grid::new(0, 3, &[]).expect_err("zero width");
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn endpoint_validation_reports_role() {
        let grid = sample();
        let err = grid
            .endpoint_id(Endpoint::Target, Cell::new(0, 1))
            .expect_err("wall");
        assert_eq!(err.to_string(), "target cell (0, 1) is not traversable");

        let err = grid
            .endpoint_id(Endpoint::Start, Cell::new(9, 9))
            .expect_err("outside");
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }
}
