//! Themes and series colors.

use crate::render::Color;

/// Visual theme for charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Canvas background.
    pub background: Color,
    /// Bounding box wireframe.
    pub frame: Color,
    /// Axis and tick labels.
    pub label: Color,
    /// Legend series names.
    pub legend_text: Color,
    /// Grid tick markers.
    pub tick_marker: Color,
    /// Font size of the "X", "Y", "Z" axis labels.
    pub axis_label_size: f32,
    /// Font size of tick value labels.
    pub tick_label_size: f32,
    /// Font size of legend labels.
    pub legend_label_size: f32,
    /// Stroke width of series lines.
    pub series_width: f32,
    /// Stroke width of the legend color swatch.
    pub legend_swatch_width: f32,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::light()
    }

    /// Light theme on a pale grey background.
    pub fn light() -> Self {
        Self {
            background: Color::rgb8(0xF5, 0xF5, 0xF5),
            frame: Color::BLACK,
            label: Color::rgb8(0x00, 0x00, 0x8B),
            legend_text: Color::BLACK,
            tick_marker: Color::BLACK,
            axis_label_size: 12.0,
            tick_label_size: 10.0,
            legend_label_size: 12.0,
            series_width: 1.0,
            legend_swatch_width: 5.0,
        }
    }

    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            background: Color::rgb8(0x1E, 0x1E, 0x22),
            frame: Color::rgb8(0xC8, 0xC8, 0xC8),
            label: Color::rgb8(0x8C, 0xB4, 0xFF),
            legend_text: Color::rgb8(0xE6, 0xE6, 0xE6),
            tick_marker: Color::rgb8(0xC8, 0xC8, 0xC8),
            ..Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Hue in degrees for the 1-based series `index` out of `count`.
///
/// The hue circle is split into `360 / count` whole-degree steps and series
/// `index` sits `index` steps around it, so the first series starts one full
/// step past hue 0. The step is at least one degree, so with more than 360
/// series the hues repeat: series `i` and `i + 360` share a color.
pub fn series_hue(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let step = (360 / count).max(1);
    let degrees = index * step;
    if degrees > 360 {
        (degrees % 360) as f64
    } else {
        degrees as f64
    }
}

/// Line color for the 1-based series `index` out of `count`.
pub fn series_color(index: usize, count: usize) -> Color {
    Color::from_hsl(series_hue(index, count) / 360.0, 1.0, 0.5)
}
