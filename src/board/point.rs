use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A signed board coordinate. `x` grows to the right (columns), `y` grows
/// downward (rows).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Offsets of the eight cells at Chebyshev distance 1.
pub const NEIGHBOR_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[inline(always)]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The eight neighbouring points, in [`NEIGHBOR_OFFSETS`] order.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        NEIGHBOR_OFFSETS.into_iter().map(move |offset| self + offset)
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i64, i64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{NEIGHBOR_OFFSETS, Point};

    #[test]
    fn offsets_cover_the_moore_neighbourhood_once() {
        let set: HashSet<Point> = NEIGHBOR_OFFSETS.into_iter().collect();
        assert_eq!(set.len(), 8);
        assert!(!set.contains(&Point::ORIGIN));
        for p in &set {
            assert!(p.x.abs() <= 1 && p.y.abs() <= 1);
        }
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Point::new(3, -2);
        let b = Point::new(-5, 7);
        assert_eq!(a + b, Point::new(-2, 5));
        assert_eq!(a - b, Point::new(8, -9));
        assert_eq!((a + b) - b, a);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn neighbors_surround_the_point() {
        let center = Point::new(-10, 4);
        let around: Vec<Point> = center.neighbors().collect();
        assert_eq!(around.len(), 8);
        assert!(around.contains(&Point::new(-11, 3)));
        assert!(around.contains(&Point::new(-9, 5)));
        assert!(!around.contains(&center));
    }
}
