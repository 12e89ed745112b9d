//! Conway's Game of Life (B3/S23) on a dense board that grows and shrinks to
//! keep one ring of dead cells around every live cell.
//!
//! Advancing a generation reports each cell that flipped instead of handing
//! back a whole new grid to diff.

pub mod board;
pub mod config;
pub mod error;
pub mod evolve;
pub mod life;
pub mod patterns;

pub use board::{Board, Cell, Point, Rect};
pub use config::{RunConfig, Seed};
pub use error::{BoardError, ConfigError};
pub use evolve::{Change, adjust_bounds, advance, advance_collect, advance_quiet};
pub use life::Life;
