//! Rect: A signed rectangle primitive for layout calculations.
//!
//! Coordinates are `i32` on purpose: the layout passes perform no bounds
//! validation, so degenerate container extents (zero or negative) must be
//! able to flow through the arithmetic unharmed. Negative sizes only clamp
//! once they reach the cell grid.

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Column of the top-left corner.
    pub x: i32,
    /// Row of the top-left corner.
    pub y: i32,
    /// Width in columns. May be zero or negative for degenerate layouts.
    pub width: i32,
    /// Height in rows. May be zero or negative for degenerate layouts.
    pub height: i32,
}

impl Rect {
    /// A rectangle from its corner and extent.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The full-screen rectangle for a terminal size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Whether the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Covered cell count; degenerate rectangles count zero.
    #[inline]
    pub const fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.width as i64) * (self.height as i64)
        }
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the point falls inside this rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether the two rectangles share any cell.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({},{} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(2, 3, 10, 4);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 7);
        assert!(!r.is_empty());
        assert_eq!(r.area(), 40);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0, 0, 80, 24);
        assert!(r.contains(0, 0));
        assert!(r.contains(79, 23));
        assert!(!r.contains(80, 23));
        assert!(!r.contains(-1, 0));
    }

    #[test]
    fn test_rect_degenerate() {
        let r = Rect::new(5, 5, -3, 10);
        assert!(r.is_empty());
        assert_eq!(r.area(), 0);
        assert!(!r.contains(5, 5));
        assert!(!r.intersects(&Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        let c = Rect::new(10, 0, 5, 5);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c)); // Edges touch, exclusive bounds
    }
}
