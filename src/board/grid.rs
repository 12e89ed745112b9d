//! The dense, arbitrarily-based board.

use std::fmt;

use super::cell::Cell;
use super::point::Point;
use super::rect::{Points, Rect};
use crate::error::BoardError;

/// An immutable dense grid of cells over a [`Rect`] of the infinite plane.
///
/// Everything outside the stored rectangle reads as [`Cell::Dead`]. The
/// backing buffer is zero-based; coordinates are translated through the
/// rectangle's origin at every access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rect: Rect,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// The board with no stored cells, anchored at the origin.
    pub fn empty() -> Self {
        Self {
            rect: Rect::EMPTY,
            cells: Vec::new(),
        }
    }

    /// Copy a rectangular matrix (rows of columns) into a board based at
    /// `(0, 0)`.
    pub fn from_cells<R: AsRef<[Cell]>>(matrix: &[R]) -> Result<Self, BoardError> {
        Self::from_cells_at(Point::ORIGIN, matrix)
    }

    /// Copy a rectangular matrix into a board whose first row and column sit
    /// at `origin`.
    pub fn from_cells_at<R: AsRef<[Cell]>>(
        origin: Point,
        matrix: &[R],
    ) -> Result<Self, BoardError> {
        let first = matrix.first().ok_or(BoardError::EmptyMatrix)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(BoardError::EmptyRow);
        }

        let mut cells = Vec::with_capacity(width * matrix.len());
        for (row, values) in matrix.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        let height = matrix.len();
        let rect = Rect::checked_new(origin, width, height).ok_or(BoardError::OutOfRange {
            origin,
            width,
            height,
        })?;
        Ok(Self { rect, cells })
    }

    /// Smallest board holding `points` alive with one dead cell of margin on
    /// every side. No points gives the empty board.
    pub fn from_live_points<I>(points: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Point>,
    {
        let points: Vec<Point> = points.into_iter().collect();
        let Some(first) = points.first().copied() else {
            return Ok(Self::empty());
        };
        let (min, max) = points.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });

        let out_of_range = || BoardError::OutOfRange {
            origin: min,
            width: max.x.abs_diff(min.x).saturating_add(1) as usize,
            height: max.y.abs_diff(min.y).saturating_add(1) as usize,
        };
        if !Rect::PLANE.contains(min) || !Rect::PLANE.contains(max) {
            return Err(out_of_range());
        }

        let rect = Rect::from_extent(min, max).expand(1).intersect(&Rect::PLANE);
        let mut cells = vec![Cell::Dead; rect.area()];
        for p in points {
            if let Some(i) = rect.index_of(p) {
                cells[i] = Cell::Alive;
            }
        }
        Ok(Self { rect, cells })
    }

    /// Wrap a finished buffer. `cells` must be row-major over `rect`.
    pub(crate) fn from_parts(rect: Rect, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rect.area());
        Self { rect, cells }
    }

    /// State at `p`; [`Cell::Dead`] anywhere outside the stored rectangle.
    #[inline(always)]
    pub fn at(&self, p: Point) -> Cell {
        match self.rect.index_of(p) {
            Some(i) => self.cells[i],
            None => Cell::Dead,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.rect.top_left()
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.rect.bottom_right()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rect.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rect.height()
    }

    /// Every stored point exactly once, row by row.
    pub fn points(&self) -> Points {
        self.rect.points()
    }

    /// Stored points paired with their states.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.rect.points().zip(self.cells.iter().copied())
    }

    pub fn iter_with_values<F: FnMut(Point, Cell)>(&self, mut visit: F) {
        for (p, cell) in self.iter() {
            visit(p, cell);
        }
    }

    /// Live points, row by row.
    pub fn live_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter()
            .filter_map(|(p, cell)| cell.is_alive().then_some(p))
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// True when no cell is alive.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }

    /// Row-major backing buffer over [`Board::rect`].
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether stored row `y` holds a live cell.
    pub(crate) fn row_has_live(&self, y: i64) -> bool {
        let top = self.rect.top_left().y;
        if y < top || y >= self.rect.bottom_right().y {
            return false;
        }
        let width = self.width();
        let start = (y - top) as usize * width;
        self.cells[start..start + width]
            .iter()
            .any(|c| c.is_alive())
    }

    /// Whether stored column `x` holds a live cell.
    pub(crate) fn column_has_live(&self, x: i64) -> bool {
        let left = self.rect.top_left().x;
        if x < left || x >= self.rect.bottom_right().x {
            return false;
        }
        let offset = (x - left) as usize;
        self.cells
            .iter()
            .skip(offset)
            .step_by(self.width())
            .any(|c| c.is_alive())
    }
}

/// Plaintext rows: `#` alive, `.` dead.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width();
        if width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(width) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
