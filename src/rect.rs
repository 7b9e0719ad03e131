use std::fmt;

/// Axis-aligned pixel rectangle with an exclusive max corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[inline]
    pub const fn min(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Bottom-right corner (exclusive).
    #[inline]
    pub const fn max(&self) -> (u32, u32) {
        (self.x + self.width, self.y + self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x0, y0) = self.min();
        let (x1, y1) = self.max();
        write!(f, "({x0},{y0})-({x1},{y1})")
    }
}
