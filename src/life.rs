//! A running simulation: the current board plus its generation count.

use log::debug;

use crate::board::{Board, Cell, Point, Rect};
use crate::error::BoardError;
use crate::evolve::{self, Change};

#[derive(Clone, Debug, Default)]
pub struct Life {
    board: Board,
    generation: u64,
}

impl Life {
    /// Start from `board` as generation 0.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    pub fn from_cells<R: AsRef<[Cell]>>(matrix: &[R]) -> Result<Self, BoardError> {
        Board::from_cells(matrix).map(Self::new)
    }

    pub fn step(&mut self) {
        self.step_with(|_, _| {});
    }

    /// Advance one generation, forwarding every flipped cell to `on_change`.
    /// Returns the number of flips.
    pub fn step_with<F: FnMut(Point, Cell)>(&mut self, mut on_change: F) -> usize {
        let mut changes = 0usize;
        self.board = evolve::advance(&self.board, |p, cell| {
            changes += 1;
            on_change(p, cell);
        });
        self.generation += 1;
        debug!(
            "generation {}: {} changes, population {}",
            self.generation,
            changes,
            self.board.population()
        );
        changes
    }

    /// Advance one generation and return the flips.
    pub fn step_collect(&mut self) -> Vec<Change> {
        let mut out = Vec::new();
        self.step_with(|point, cell| out.push(Change { point, cell }));
        out
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    pub fn get_cell(&self, p: Point) -> Cell {
        self.board.at(p)
    }

    /// Minimal rectangle of live cells, without the dead margin.
    pub fn bounds(&self) -> Option<Rect> {
        evolve::live_extent(&self.board)
    }

    pub fn for_each_live<F: FnMut(Point)>(&self, mut f: F) {
        for p in self.board.live_points() {
            f(p);
        }
    }
}
