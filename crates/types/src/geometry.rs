use serde::{Deserialize, Serialize};

/// Intrinsic size of a source item, in whatever units the data source reports
/// (source pixels, points, ...). Only the width/height proportion matters to
/// the packer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Width over height, or `None` when either side is non-positive or the
    /// quotient is not finite.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width > 0.0 && self.height > 0.0 {
            let ratio = self.width / self.height;
            ratio.is_finite().then_some(ratio)
        } else {
            None
        }
    }
}

/// An axis-aligned pixel rectangle.
///
/// Fields are `i32`, not unsigned: remainder absorption assigns the last
/// element of a group whatever is left of the group's budget, and signed
/// arithmetic keeps the group totals exact even when rounding drifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}
