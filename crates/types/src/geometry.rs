/// An integer pixel rectangle. Width and height may be zero or negative when
/// a caller over-insets a small box; such rectangles cover no pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Shrinks the rectangle by `amount` on every side.
    pub fn inset(self, amount: i32) -> Rect {
        Rect {
            x: self.x.saturating_add(amount),
            y: self.y.saturating_add(amount),
            width: self.width.saturating_sub(amount.saturating_mul(2)),
            height: self.height.saturating_sub(amount.saturating_mul(2)),
        }
    }

    /// Intersection with another rectangle; empty when they do not overlap.
    pub fn intersect(self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, (right - x).max(0), (bottom - y).max(0))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_every_side() {
        let rect = Rect::new(10, 20, 100, 50).inset(8);
        assert_eq!(rect, Rect::new(18, 28, 84, 34));
    }

    #[test]
    fn over_inset_is_empty() {
        assert!(Rect::new(0, 0, 10, 10).inset(6).is_empty());
    }

    #[test]
    fn intersect_clips_to_overlap() {
        let canvas = Size::new(640, 330).bounds();
        let clipped = Rect::new(600, 300, 100, 100).intersect(canvas);
        assert_eq!(clipped, Rect::new(600, 300, 40, 30));
        assert!(Rect::new(700, 0, 10, 10).intersect(canvas).is_empty());
    }
}
