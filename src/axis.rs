//! Model axes, tick placement, and tick label formatting.

use std::sync::Arc;

use crate::geom::Point3;

/// One of the three model axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// All axes in drawing order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Label drawn at the far end of the axis.
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }

    /// Component of `point` along this axis.
    pub fn component(self, point: Point3) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
            Self::Z => point.z,
        }
    }

    /// The point at `value` along this axis, zero on the others.
    pub fn point_at(self, value: f64) -> Point3 {
        match self {
            Self::X => Point3::new(value, 0.0, 0.0),
            Self::Y => Point3::new(0.0, value, 0.0),
            Self::Z => Point3::new(0.0, 0.0, value),
        }
    }
}

/// Evenly spaced tick values `i * extent / count` for `i` in `0..count`.
pub fn tick_values(extent: f64, count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| i as f64 * extent / count as f64)
}

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Shortest round-trip decimal with a period separator.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format!("{value}"),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}
