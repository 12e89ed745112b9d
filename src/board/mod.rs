//! Dense board storage and coordinate types.

mod cell;
mod grid;
mod point;
mod rect;

pub use cell::Cell;
pub use grid::Board;
pub use point::{NEIGHBOR_OFFSETS, Point};
pub use rect::{COORD_LIMIT, Points, Rect};
