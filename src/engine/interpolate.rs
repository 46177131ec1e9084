//! Piecewise linear interpolation
//!
//! The stress sub-scores are defined by anchor tables. Evaluation must match
//! the analysis service bit for bit, so the segment arithmetic is kept in the
//! exact `y1 + ((v - x1) / (x2 - x1)) * (y2 - y1)` form.

/// Linear interpolation between two anchors, clamped to the anchor values
///
/// Returns `y1` when `value <= x1`, `y2` when `value >= x2`.
pub fn lerp(value: f64, x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    if value <= x1 {
        return y1;
    }
    if value >= x2 {
        return y2;
    }
    y1 + ((value - x1) / (x2 - x1)) * (y2 - y1)
}

/// A curve through `(x, y)` anchors sorted by ascending `x`
///
/// A value belongs to the first segment whose right anchor it does not
/// exceed. Values left of the first anchor take the first `y`; values right
/// of the last anchor take the last `y`.
#[derive(Debug, Clone, Copy)]
pub struct PiecewiseLinear {
    anchors: &'static [(f64, f64)],
}

impl PiecewiseLinear {
    /// Build a curve. `anchors` must hold at least two points in ascending `x`.
    pub const fn new(anchors: &'static [(f64, f64)]) -> Self {
        Self { anchors }
    }

    /// Evaluate the curve at `value`
    pub fn eval(&self, value: f64) -> f64 {
        let Some(&(first_x, first_y)) = self.anchors.first() else {
            return 0.0;
        };
        if value <= first_x {
            return first_y;
        }

        for pair in self.anchors.windows(2) {
            let (x1, y1) = pair[0];
            let (x2, y2) = pair[1];
            if value <= x2 {
                return lerp(value, x1, x2, y1, y2);
            }
        }

        self.anchors.last().map(|&(_, y)| y).unwrap_or(first_y)
    }
}
