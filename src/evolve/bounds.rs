//! Live-extent detection and margin re-tightening.

use log::debug;

use crate::board::{Board, Point, Rect};

/// Dead cells kept around the live extent on every side.
pub const MARGIN: i64 = 1;

/// Minimal rectangle holding every live cell, or `None` when nothing lives.
///
/// Rows are probed from the top and bottom edges inward, columns from the
/// left and right edges inward; each search stops at the first live line.
pub fn live_extent(board: &Board) -> Option<Rect> {
    let rect = board.rect();
    let (top_left, bottom_right) = (rect.top_left(), rect.bottom_right());
    let rows = top_left.y..bottom_right.y;
    let cols = top_left.x..bottom_right.x;

    let min_y = rows.clone().find(|&y| board.row_has_live(y))?;
    let max_y = rows.rev().find(|&y| board.row_has_live(y))?;
    let min_x = cols.clone().find(|&x| board.column_has_live(x))?;
    let max_x = cols.rev().find(|&x| board.column_has_live(x))?;

    Some(Rect::from_extent(
        Point::new(min_x, min_y),
        Point::new(max_x, max_y),
    ))
}

/// Re-base `board` onto its live extent grown by [`MARGIN`].
///
/// Cells outside the source rectangle are copied in as dead. The margin is
/// clipped to [`Rect::PLANE`], so nothing is ever born past the coordinate
/// limit. A board with no live cells collapses to [`Board::empty`].
pub fn adjust_bounds(board: &Board) -> Board {
    match target_rect(board) {
        Some(rect) if rect == board.rect() => board.clone(),
        Some(rect) => rebase(board, rect),
        None => Board::empty(),
    }
}

/// Owned variant of [`adjust_bounds`] that skips the copy when the bounds
/// already fit.
pub(crate) fn tighten(board: Board) -> Board {
    match target_rect(&board) {
        Some(rect) if rect == board.rect() => board,
        Some(rect) => rebase(&board, rect),
        None => Board::empty(),
    }
}

fn target_rect(board: &Board) -> Option<Rect> {
    let extent = live_extent(board);
    if extent.is_none() && !board.rect().is_empty() {
        debug!(
            "no live cells in {}x{} board at {}; collapsing to empty",
            board.width(),
            board.height(),
            board.top_left()
        );
    }
    extent.map(|e| e.expand(MARGIN).intersect(&Rect::PLANE))
}

fn rebase(board: &Board, rect: Rect) -> Board {
    let cells = rect.points().map(|p| board.at(p)).collect();
    Board::from_parts(rect, cells)
}

#[cfg(test)]
mod tests {
    use super::{adjust_bounds, live_extent};
    use crate::board::{Board, COORD_LIMIT, Cell, Point, Rect};
    use crate::evolve::advance_collect;

    const D: Cell = Cell::Dead;
    const A: Cell = Cell::Alive;

    #[test]
    fn extent_scans_each_edge_independently() {
        let board = Board::from_cells(&[
            [D, D, D, D, D],
            [D, D, A, D, D],
            [D, D, D, D, D],
            [D, A, D, D, D],
            [D, D, D, D, D],
            [D, D, D, D, D],
        ])
        .unwrap();
        assert_eq!(
            live_extent(&board),
            Some(Rect::from_extent(Point::new(1, 1), Point::new(2, 3)))
        );
    }

    #[test]
    fn grows_when_live_cells_touch_the_edge() {
        let board = Board::from_cells(&[[A, A]]).unwrap();
        let adjusted = adjust_bounds(&board);
        assert_eq!(adjusted.top_left(), Point::new(-1, -1));
        assert_eq!(adjusted.bottom_right(), Point::new(3, 2));
        assert_eq!(adjusted.population(), 2);
        assert_eq!(adjusted.at(Point::new(0, 0)), A);
        assert_eq!(adjusted.at(Point::new(-1, 0)), D);
    }

    #[test]
    fn shrinks_oversized_boards() {
        let mut rows = vec![vec![D; 9]; 9];
        rows[4][5] = A;
        let board = Board::from_cells(&rows).unwrap();
        let adjusted = adjust_bounds(&board);
        assert_eq!(adjusted.top_left(), Point::new(4, 3));
        assert_eq!(adjusted.width(), 3);
        assert_eq!(adjusted.height(), 3);
        assert_eq!(adjusted.at(Point::new(5, 4)), A);
    }

    #[test]
    fn fitted_board_is_unchanged() {
        let board = Board::from_cells(&[[D, D, D], [D, A, D], [D, D, D]]).unwrap();
        assert_eq!(adjust_bounds(&board), board);
    }

    #[test]
    fn margin_is_clipped_at_the_coordinate_limit() {
        let corner = Point::new(COORD_LIMIT - 2, COORD_LIMIT - 2);
        let block = Board::from_cells_at(corner, &[[A, A], [A, A]]).unwrap();

        let adjusted = adjust_bounds(&block);
        assert_eq!(adjusted.top_left(), corner - Point::new(1, 1));
        assert_eq!(adjusted.bottom_right(), Point::new(COORD_LIMIT, COORD_LIMIT));

        let (next, changes) = advance_collect(&block);
        assert!(changes.is_empty());
        assert_eq!(next, adjusted);
    }

    #[test]
    fn advance_at_the_lowest_origin_does_not_overflow() {
        let origin = Point::new(-COORD_LIMIT, -COORD_LIMIT);
        let blinker = Board::from_cells_at(origin, &[[A, A, A]]).unwrap();

        let (next, changes) = advance_collect(&blinker);
        // The cell above the middle would sit past the limit, so only the
        // one below is born.
        assert_eq!(changes.len(), 3);
        assert_eq!(next.population(), 2);
        assert_eq!(next.top_left(), origin);
        assert_eq!(next.at(origin + Point::new(1, 1)), A);
    }

    #[test]
    fn all_dead_collapses_to_empty() {
        let board = Board::from_cells(&[[D, D], [D, D]]).unwrap();
        assert_eq!(live_extent(&board), None);
        let adjusted = adjust_bounds(&board);
        assert_eq!(adjusted, Board::empty());
        assert_eq!(adjusted.width(), 0);
        assert_eq!(adjusted.height(), 0);
        assert_eq!(adjust_bounds(&adjusted), Board::empty());
    }
}
