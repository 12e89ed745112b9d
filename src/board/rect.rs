//! Half-open rectangles of board coordinates.

use std::iter::FusedIterator;

use super::point::Point;

/// Largest coordinate magnitude a board may store. Keeping stored cells inside
/// `[-COORD_LIMIT, COORD_LIMIT)` leaves headroom for the margin and neighbour
/// offsets so no coordinate arithmetic can overflow.
pub const COORD_LIMIT: i64 = 1 << 62;

/// The rectangle `[top_left, bottom_right)`.
///
/// A rectangle whose width or height is zero is empty; the canonical empty
/// rectangle sits at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    top_left: Point,
    bottom_right: Point,
}

impl Rect {
    pub const EMPTY: Self = Self {
        top_left: Point::ORIGIN,
        bottom_right: Point::ORIGIN,
    };

    /// Rectangle at `top_left` spanning `width` columns and `height` rows.
    pub fn new(top_left: Point, width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            return Self::EMPTY;
        }
        Self {
            top_left,
            bottom_right: top_left + Point::new(width as i64, height as i64),
        }
    }

    /// Every cell a board may store.
    pub const PLANE: Self = Self {
        top_left: Point::new(-COORD_LIMIT, -COORD_LIMIT),
        bottom_right: Point::new(COORD_LIMIT, COORD_LIMIT),
    };

    /// Like [`Rect::new`], but `None` unless the whole rectangle lies inside
    /// [`Rect::PLANE`].
    pub fn checked_new(top_left: Point, width: usize, height: usize) -> Option<Self> {
        if !Self::PLANE.contains(top_left) {
            return None;
        }
        let w = i64::try_from(width).ok()?;
        let h = i64::try_from(height).ok()?;
        let bottom_right = Point::new(top_left.x.checked_add(w)?, top_left.y.checked_add(h)?);
        if bottom_right.x > COORD_LIMIT || bottom_right.y > COORD_LIMIT {
            return None;
        }
        Some(Self::new(top_left, width, height))
    }

    /// Smallest rectangle containing both inclusive corners `min` and `max`.
    pub fn from_extent(min: Point, max: Point) -> Self {
        if max.x < min.x || max.y < min.y {
            return Self::EMPTY;
        }
        Self {
            top_left: min,
            bottom_right: max + Point::new(1, 1),
        }
    }

    #[inline(always)]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// One past the last column and row.
    #[inline(always)]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        (self.bottom_right.x - self.top_left.x) as usize
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        (self.bottom_right.y - self.top_left.y) as usize
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    #[inline(always)]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.top_left.x
            && p.y >= self.top_left.y
            && p.x < self.bottom_right.x
            && p.y < self.bottom_right.y
    }

    /// Row-major index of `p` into a dense buffer covering this rectangle.
    #[inline(always)]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let rel = p - self.top_left;
        Some(rel.y as usize * self.width() + rel.x as usize)
    }

    /// Grow by `margin` cells on every side. Empty rectangles stay empty.
    pub fn expand(&self, margin: i64) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let m = Point::new(margin, margin);
        Self::from_extent(self.top_left - m, self.bottom_right - Point::new(1, 1) + m)
    }

    /// Cells in both rectangles.
    pub fn intersect(&self, other: &Rect) -> Self {
        let top_left = Point::new(
            self.top_left.x.max(other.top_left.x),
            self.top_left.y.max(other.top_left.y),
        );
        let bottom_right = Point::new(
            self.bottom_right.x.min(other.bottom_right.x),
            self.bottom_right.y.min(other.bottom_right.y),
        );
        if bottom_right.x <= top_left.x || bottom_right.y <= top_left.y {
            return Self::EMPTY;
        }
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Every point of the rectangle exactly once, row by row.
    pub fn points(&self) -> Points {
        Points {
            rect: *self,
            next: self.top_left,
            remaining: self.area(),
        }
    }
}

/// Restartable row-major iterator over a [`Rect`]; clone it to start over.
#[derive(Clone, Debug)]
pub struct Points {
    rect: Rect,
    next: Point,
    remaining: usize,
}

impl Iterator for Points {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let p = self.next;
        self.remaining -= 1;
        self.next.x += 1;
        if self.next.x >= self.rect.bottom_right.x {
            self.next.x = self.rect.top_left.x;
            self.next.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Points {}
impl FusedIterator for Points {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{COORD_LIMIT, Point, Rect};

    #[test]
    fn points_visit_every_cell_once_in_row_major_order() {
        let rect = Rect::new(Point::new(-2, 5), 3, 2);
        let pts: Vec<Point> = rect.points().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(-2, 5),
                Point::new(-1, 5),
                Point::new(0, 5),
                Point::new(-2, 6),
                Point::new(-1, 6),
                Point::new(0, 6),
            ]
        );
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(rect.index_of(*p), Some(i));
        }
        let unique: HashSet<Point> = pts.into_iter().collect();
        assert_eq!(unique.len(), rect.area());
    }

    #[test]
    fn points_iterator_restarts_from_a_clone() {
        let rect = Rect::new(Point::new(0, 0), 4, 4);
        let iter = rect.points();
        assert_eq!(iter.len(), 16);
        let first: Vec<Point> = iter.clone().collect();
        let second: Vec<Point> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn bottom_right_is_exclusive() {
        let rect = Rect::new(Point::new(1, 1), 2, 3);
        assert_eq!(rect.bottom_right(), Point::new(3, 4));
        assert!(rect.contains(Point::new(2, 3)));
        assert!(!rect.contains(Point::new(3, 3)));
        assert!(!rect.contains(Point::new(2, 4)));
        assert_eq!(rect.index_of(Point::new(0, 1)), None);
    }

    #[test]
    fn expand_and_extent() {
        let rect = Rect::from_extent(Point::new(0, 0), Point::new(2, 0));
        assert_eq!(rect.width(), 3);
        assert_eq!(rect.height(), 1);

        let grown = rect.expand(1);
        assert_eq!(grown.top_left(), Point::new(-1, -1));
        assert_eq!(grown.bottom_right(), Point::new(4, 2));
        assert_eq!(grown.expand(-1), rect);
    }

    #[test]
    fn checked_new_stays_inside_the_plane() {
        assert!(Rect::checked_new(Point::new(i64::MAX, 0), 1, 1).is_none());
        assert!(Rect::checked_new(Point::new(0, i64::MIN), 1, 1).is_none());
        assert!(Rect::checked_new(Point::new(COORD_LIMIT - 2, 0), 3, 1).is_none());
        assert!(Rect::checked_new(Point::new(0, 0), usize::MAX, 1).is_none());

        let edge = Rect::checked_new(Point::new(COORD_LIMIT - 2, -COORD_LIMIT), 2, 1).unwrap();
        assert_eq!(edge.bottom_right(), Point::new(COORD_LIMIT, 1 - COORD_LIMIT));
        assert_eq!(edge.intersect(&Rect::PLANE), edge);
    }

    #[test]
    fn intersect_clips_and_empties() {
        let a = Rect::new(Point::new(0, 0), 4, 4);
        let b = Rect::new(Point::new(2, -1), 5, 3);
        assert_eq!(a.intersect(&b), Rect::from_extent(Point::new(2, 0), Point::new(3, 1)));
        assert_eq!(a.intersect(&Rect::new(Point::new(4, 0), 2, 2)), Rect::EMPTY);
        assert_eq!(Rect::EMPTY.intersect(&a), Rect::EMPTY);
    }

    #[test]
    fn degenerate_rects_are_canonical_empty() {
        assert_eq!(Rect::new(Point::new(9, 9), 0, 4), Rect::EMPTY);
        assert_eq!(
            Rect::from_extent(Point::new(3, 3), Point::new(2, 3)),
            Rect::EMPTY
        );
        assert_eq!(Rect::EMPTY.expand(1), Rect::EMPTY);
        assert_eq!(Rect::EMPTY.points().count(), 0);
        assert!(!Rect::EMPTY.contains(Point::ORIGIN));
    }
}
