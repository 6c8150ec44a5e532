// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/region.rs
//
// Region domain model: axis-aligned rectangles in image pixel coordinates.

/// A pixel position on the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Rectangular region in pixel coordinates.
///
/// Pure domain model. `top_left` is component-wise <= `bottom_right`,
/// which every constructor guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    top_left: Point,
    bottom_right: Point,
}

impl Region {
    /// Build a region from two arbitrary corners, normalizing their order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            top_left: Point::new(a.x.min(b.x), a.y.min(b.y)),
            bottom_right: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Square of side `size` centered on `center`, with the center first
    /// clamped to `[size / 2, dim - size / 2]` on each axis.
    ///
    /// When the image is at least `size` pixels on both axes the result
    /// lies entirely inside `width` x `height`. An odd `size` yields a
    /// side of `size - 1`.
    pub fn square_around(center: Point, size: u32, width: u32, height: u32) -> Self {
        let center = clamp_center(center, size, width, height);
        let half = size / 2;
        Self {
            top_left: Point::new(center.x - half, center.y - half),
            bottom_right: Point::new(center.x + half, center.y + half),
        }
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y
    }

    /// `(x, y, width, height)`, the shape `image` crop calls expect.
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.top_left.x, self.top_left.y, self.width(), self.height())
    }

    /// A region with no area cannot be exported.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Inclusive point containment: points on the border count.
    pub fn contains(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && point.x <= self.bottom_right.x
            && self.top_left.y <= point.y
            && point.y <= self.bottom_right.y
    }

    /// Separating-axis test. Shared edges count as overlapping.
    pub fn overlaps(&self, other: &Region) -> bool {
        !(self.bottom_right.x < other.top_left.x
            || self.top_left.x > other.bottom_right.x
            || self.bottom_right.y < other.top_left.y
            || self.top_left.y > other.bottom_right.y)
    }
}

/// Clamp a patch center so the whole square stays on the image.
pub fn clamp_center(center: Point, size: u32, width: u32, height: u32) -> Point {
    let half = size / 2;
    Point::new(
        center.x.min(width.saturating_sub(half)).max(half),
        center.y.min(height.saturating_sub(half)).max(half),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x1: u32, y1: u32, x2: u32, y2: u32) -> Region {
        Region::from_corners(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn corners_are_normalized() {
        let r = Region::from_corners(Point::new(50, 10), Point::new(10, 60));
        assert_eq!(r.top_left(), Point::new(10, 10));
        assert_eq!(r.bottom_right(), Point::new(50, 60));
        assert_eq!(r.as_tuple(), (10, 10, 40, 50));
    }

    #[test]
    fn region_overlaps_itself() {
        let r = rect(10, 10, 50, 50);
        assert!(r.overlaps(&r));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (rect(10, 10, 50, 50), rect(30, 30, 70, 70)),
            (rect(10, 10, 50, 50), rect(60, 60, 90, 90)),
            (rect(0, 0, 10, 10), rect(10, 0, 20, 10)),
            (rect(0, 0, 100, 100), rect(20, 20, 30, 30)),
            (rect(0, 0, 10, 10), rect(0, 11, 10, 20)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn shared_edge_counts_as_overlap() {
        assert!(rect(0, 0, 10, 10).overlaps(&rect(10, 0, 20, 10)));
        assert!(rect(0, 0, 10, 10).overlaps(&rect(0, 10, 10, 20)));
        assert!(rect(0, 0, 10, 10).overlaps(&rect(10, 10, 20, 20)));
    }

    #[test]
    fn separated_regions_do_not_overlap() {
        let base = rect(10, 10, 20, 20);
        assert!(!base.overlaps(&rect(21, 10, 30, 20)));
        assert!(!base.overlaps(&rect(0, 10, 9, 20)));
        assert!(!base.overlaps(&rect(10, 21, 20, 30)));
        assert!(!base.overlaps(&rect(10, 0, 20, 9)));
    }

    #[test]
    fn nested_region_overlaps() {
        assert!(rect(0, 0, 100, 100).overlaps(&rect(40, 40, 60, 60)));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = rect(10, 10, 20, 20);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(20, 20)));
        assert!(r.contains(Point::new(15, 20)));
        assert!(!r.contains(Point::new(21, 15)));
        assert!(!r.contains(Point::new(9, 15)));
    }

    #[test]
    fn square_is_clamped_into_image() {
        let sq = Region::square_around(Point::new(5, 5), 20, 100, 100);
        assert_eq!(sq.top_left(), Point::new(0, 0));
        assert_eq!(sq.bottom_right(), Point::new(20, 20));

        let sq = Region::square_around(Point::new(99, 97), 20, 100, 100);
        assert_eq!(sq.top_left(), Point::new(80, 80));
        assert_eq!(sq.bottom_right(), Point::new(100, 100));
    }

    #[test]
    fn square_stays_inside_for_every_pointer_position() {
        let (w, h, size) = (64, 48, 16);
        for x in (0..=w).step_by(3) {
            for y in (0..=h).step_by(3) {
                let sq = Region::square_around(Point::new(x, y), size, w, h);
                assert!(sq.bottom_right().x <= w && sq.bottom_right().y <= h);
                assert_eq!(sq.width(), size);
                assert_eq!(sq.height(), size);
            }
        }
    }

    #[test]
    fn odd_size_rounds_side_down_to_even() {
        let sq = Region::square_around(Point::new(50, 50), 5, 100, 100);
        assert_eq!(sq.top_left(), Point::new(48, 48));
        assert_eq!(sq.bottom_right(), Point::new(52, 52));
        assert_eq!((sq.width(), sq.height()), (4, 4));
    }

    #[test]
    fn unit_size_square_is_empty() {
        assert!(Region::square_around(Point::new(4, 4), 1, 10, 10).is_empty());
    }

    #[test]
    fn zero_area_is_empty() {
        assert!(rect(10, 10, 10, 40).is_empty());
        assert!(rect(10, 10, 40, 10).is_empty());
        assert!(!rect(10, 10, 11, 11).is_empty());
    }
}
