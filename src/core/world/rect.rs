//=========================================================================
// Axis-Aligned Rectangles
//=========================================================================

use glam::Vec2;

//=== Rect ================================================================

/// Axis-aligned rectangle in world units, anchored at its top-left corner.
///
/// World space has y growing downward, so `top()` is the smallest y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Returns `true` if the interiors overlap.
    ///
    /// Rectangles that only share an edge do not intersect, so a body
    /// resting exactly on a floor is not "inside" it.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn edges() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = rect(0.0, 0.0, 32.0, 32.0);
        let b = rect(16.0, 16.0, 32.0, 32.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let floor = rect(0.0, 224.0, 32.0, 32.0);
        let standing = rect(0.0, 176.0, 32.0, 48.0);
        assert!(!standing.intersects(&floor));

        let beside = rect(32.0, 224.0, 32.0, 32.0);
        assert!(!floor.intersects(&beside));
    }

    #[test]
    fn sub_unit_overlap_intersects() {
        let floor = rect(0.0, 224.0, 32.0, 32.0);
        let sinking = rect(0.0, 176.8, 32.0, 48.0);
        assert!(sinking.intersects(&floor));
    }

    #[test]
    fn contained_rect_intersects() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(10.0, 10.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
