//! Rectangle structure for content regions
//!
//! A `Rectangle` is a half-open pixel range `[x0, x1) x [y0, y1)` in the
//! usual image coordinate system where (0,0) is the top-left corner.
//! Rectangles are never empty.

use std::fmt;

use super::interval::Interval;

/// Non-empty, half-open pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl Rectangle {
    /// Create a new rectangle
    ///
    /// # Arguments
    /// * `x0` - Left edge (inclusive)
    /// * `y0` - Top edge (inclusive)
    /// * `x1` - Right edge (exclusive)
    /// * `y1` - Bottom edge (exclusive)
    ///
    /// # Returns
    /// The rectangle, or `None` when the range would be empty
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Option<Self> {
        if x1 > x0 && y1 > y0 {
            Some(Rectangle { x0, y0, x1, y1 })
        } else {
            None
        }
    }

    /// Build the rectangle spanned by a column interval and a row interval
    ///
    /// Both intervals are non-empty, so the result is too.
    pub fn from_intervals(x_span: Interval, y_span: Interval) -> Self {
        Rectangle {
            x0: x_span.start() as u32,
            y0: y_span.start() as u32,
            x1: x_span.end() as u32,
            y1: y_span.end() as u32,
        }
    }

    pub fn x0(&self) -> u32 {
        self.x0
    }

    pub fn y0(&self) -> u32 {
        self.y0
    }

    /// Right edge (exclusive)
    pub fn x1(&self) -> u32 {
        self.x1
    }

    /// Bottom edge (exclusive)
    pub fn y1(&self) -> u32 {
        self.y1
    }

    /// Width in pixels, always at least 1
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Height in pixels, always at least 1
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Whether the rectangle lies inside a `width` x `height` canvas
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x1 <= width && self.y1 <= height
    }

    /// The edges as an `(x0, y0, x1, y1)` tuple
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x0, self.y0, self.x1, self.y1)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})-({}, {}) [{}x{}]",
               self.x0, self.y0, self.x1, self.y1, self.width(), self.height())
    }
}
