//! Seed patterns and random soups for building initial boards.

use rand::RngCore;
use rand::SeedableRng;

use crate::board::{Board, Cell};
use crate::error::BoardError;

/// A named pattern in plaintext rows (`#` or `O` alive, `.` or space dead).
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        rows: &["##", "##"],
    },
    Pattern {
        name: "blinker",
        rows: &["###"],
    },
    Pattern {
        name: "toad",
        rows: &[".###", "###."],
    },
    Pattern {
        name: "beacon",
        rows: &["##..", "##..", "..##", "..##"],
    },
    Pattern {
        name: "glider",
        rows: &[".#.", "..#", "###"],
    },
    Pattern {
        name: "r-pentomino",
        rows: &[".##", "##.", ".#."],
    },
    Pattern {
        name: "lwss",
        rows: &[".#..#", "#....", "#...#", "####."],
    },
];

impl Pattern {
    pub fn cells(&self) -> Result<Vec<Vec<Cell>>, BoardError> {
        parse_rows(self.rows)
    }

    pub fn board(&self) -> Result<Board, BoardError> {
        Board::from_cells(&self.cells()?)
    }
}

/// Look up a built-in pattern by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Parse plaintext rows into a cell matrix: `#` or `O` is alive, `.` or a
/// space is dead. Row lengths are not checked
/// here; [`Board::from_cells`] rejects ragged input.
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Vec<Vec<Cell>>, BoardError> {
    rows.iter()
        .enumerate()
        .map(|(row, line)| {
            line.as_ref()
                .chars()
                .enumerate()
                .map(|(column, c)| match c {
                    '#' | 'O' => Ok(Cell::Alive),
                    '.' | ' ' => Ok(Cell::Dead),
                    found => Err(BoardError::InvalidCellChar { row, column, found }),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// A `width` x `height` soup where each cell is alive with probability
/// `density`, reproducible from `seed`.
pub fn random_cells(width: usize, height: usize, density: f64, seed: u64) -> Vec<Vec<Cell>> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density.clamp(0.0, 1.0)) as u64;

    (0..height)
        .map(|_| {
            (0..width)
                .map(|_| Cell::from_alive(rng.next_u64() <= threshold && density > 0.0))
                .collect()
        })
        .collect()
}
