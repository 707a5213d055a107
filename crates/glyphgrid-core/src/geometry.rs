#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle of terminal cells, used for clip regions.
///
/// Uses terminal coordinates (0-indexed, origin at top-left). The right and
/// bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle covers no cell.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a cell lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlap of two rectangles, or an empty rectangle when they are disjoint.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Rect::new(x, y, right - x, bottom - y)
        } else {
            Rect::default()
        }
    }

    /// Restrict the rectangle to a `width` x `height` grid anchored at the origin.
    #[inline]
    pub fn clamp_to(&self, width: u16, height: u16) -> Rect {
        self.intersection(&Rect::from_size(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn edges_are_exclusive() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
        assert!(!r.contains(5, 8));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(1, 1, 0, 3);
        assert!(r.is_empty());
        assert!(!r.contains(1, 1));
    }

    #[test]
    fn intersection_of_disjoint_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, 5, 2, 2);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn intersection_overlap() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 1, 10, 2);
        assert_eq!(a.intersection(&b), Rect::new(2, 1, 2, 2));
    }

    #[test]
    fn clamp_to_grid() {
        let r = Rect::new(8, 3, 10, 10);
        assert_eq!(r.clamp_to(10, 5), Rect::new(8, 3, 2, 2));
        assert!(Rect::new(12, 0, 1, 1).clamp_to(10, 5).is_empty());
    }

    #[test]
    fn right_saturates() {
        let r = Rect::new(u16::MAX - 1, 0, 10, 1);
        assert_eq!(r.right(), u16::MAX);
    }

    #[test]
    fn area_is_product() {
        assert_eq!(Rect::from_size(80, 24).area(), 1920);
    }
}
