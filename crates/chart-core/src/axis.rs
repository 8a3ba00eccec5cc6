// File: crates/chart-core/src/axis.rs
// Summary: Axis model with captions and ranges.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Larger values are drawn further up (or right).
    Normal,
    /// Larger values are drawn further down; used for ranks where 1 is best.
    Inverted,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub direction: Direction,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, direction: Direction::Normal }
    }

    /// Category axis over `count` evenly spaced slots indexed from zero.
    pub fn category(label: impl Into<String>, count: usize) -> Self {
        Self::new(label, 0.0, count.saturating_sub(1) as f64)
    }

    /// Rank axis from 1 (top) down to `upper_bound` (bottom).
    pub fn rank(label: impl Into<String>, upper_bound: u32) -> Self {
        let mut a = Self::new(label, 1.0, upper_bound.max(1) as f64);
        a.direction = Direction::Inverted;
        a
    }

    pub fn is_inverted(&self) -> bool {
        self.direction == Direction::Inverted
    }
}
