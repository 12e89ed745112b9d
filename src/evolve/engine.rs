//! One-generation advance with per-cell change reporting.

use log::trace;

use super::bounds::{adjust_bounds, tighten};
use super::rules::CONWAY;
use crate::board::{Board, Cell, NEIGHBOR_OFFSETS, Point};

/// A cell that flipped: it now holds `cell` and previously held the opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Change {
    pub point: Point,
    pub cell: Cell,
}

/// Live cells among the eight neighbours of `p`.
#[inline]
pub fn alive_neighbor_count(board: &Board, p: Point) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&offset| board.at(p + offset) as u8)
        .sum()
}

/// Compute the next generation of `board`.
///
/// `on_change` is called once for every cell whose state flips, with the new
/// state, before this returns. The returned board is built from an internal
/// buffer and is re-tightened to the new live extent plus one dead margin.
///
/// Neighbour counts read only the margined copy of `board`; flips are written
/// to a separate buffer, so scan order cannot affect the result.
pub fn advance<F>(board: &Board, mut on_change: F) -> Board
where
    F: FnMut(Point, Cell),
{
    let working = adjust_bounds(board);
    let mut next = working.cells().to_vec();
    let mut changes = 0usize;

    for (i, (p, current)) in working.iter().enumerate() {
        let state = CONWAY.next(current, alive_neighbor_count(&working, p));
        if state != current {
            next[i] = state;
            on_change(p, state);
            changes += 1;
        }
    }

    trace!(
        "advanced {}x{} board at {}: {} cells changed",
        working.width(),
        working.height(),
        working.top_left(),
        changes
    );

    tighten(Board::from_parts(working.rect(), next))
}

/// [`advance`] without a change sink.
pub fn advance_quiet(board: &Board) -> Board {
    advance(board, |_, _| {})
}

/// [`advance`], collecting the changes in scan order.
pub fn advance_collect(board: &Board) -> (Board, Vec<Change>) {
    let mut changes = Vec::new();
    let next = advance(board, |point, cell| changes.push(Change { point, cell }));
    (next, changes)
}
