// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and value (Y) scale transforms between data and pixels.

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::grid::linspace;

/// Value Y coordinate (a rank).
pub type Value = f64;

/// Horizontal scale placing `count` categories evenly across the plot, with a
/// side margin so the first and last markers do not sit on the frame.
#[derive(Clone, Debug)]
pub struct CategoryScale {
    positions: Vec<f32>,
}

impl CategoryScale {
    /// Fraction of the plot width kept free on each side.
    pub const MARGIN: f32 = 0.05;

    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        let pad = (right_px - left_px) * Self::MARGIN;
        let positions = match count {
            0 => Vec::new(),
            1 => vec![(left_px + right_px) * 0.5],
            n => linspace((left_px + pad) as f64, (right_px - pad) as f64, n)
                .into_iter()
                .map(|x| x as f32)
                .collect(),
        };
        Self { positions }
    }

    pub fn from_rect(rect: &RectI32, count: usize) -> Self {
        Self::new(rect.left as f32, rect.right as f32, count)
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> Option<f32> {
        self.positions.get(index).copied()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }
}

/// Vertical value scale mapping `[vmin, vmax]` onto `[top, bottom]` pixels.
/// When inverted, `vmin` sits at the top; otherwise at the bottom.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
    pub inverted: bool,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax, inverted: false };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_inverted(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self::new_linear(top_px, bottom_px, vmin, vmax);
        s.inverted = true;
        s
    }

    pub fn for_axis(axis: &Axis, rect: &RectI32) -> Self {
        let (top, bottom) = (rect.top as f32, rect.bottom as f32);
        if axis.is_inverted() {
            Self::new_inverted(top, bottom, axis.min, axis.max)
        } else {
            Self::new_linear(top, bottom, axis.min, axis.max)
        }
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        let frac = ((y - self.vmin) / span) as f32;
        let height = self.bottom_px - self.top_px;
        if self.inverted {
            self.top_px + frac * height
        } else {
            self.bottom_px - frac * height
        }
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let span = (self.vmax - self.vmin).max(1e-12);
        let height = (self.bottom_px - self.top_px).max(1e-6);
        let frac = if self.inverted {
            (py - self.top_px) / height
        } else {
            (self.bottom_px - py) / height
        };
        self.vmin + frac as f64 * span
    }

    /// True when `y` lies within the visible value range.
    pub fn contains(&self, y: Value) -> bool {
        y >= self.vmin - 1e-9 && y <= self.vmax + 1e-9
    }
}
