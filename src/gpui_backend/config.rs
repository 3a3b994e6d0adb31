use crate::interaction::INITIAL_TILT_DEGREES;
use crate::model::SceneOptions;
use crate::style::Theme;

/// Configuration for the GPUI chart view.
#[derive(Debug, Clone)]
pub struct ChartViewConfig {
    /// Initial tilt about the X axis, in degrees.
    pub initial_tilt_degrees: f64,
    /// Rotation applied per dragged pixel, in degrees.
    pub degrees_per_pixel: f64,
    /// Visual theme.
    pub theme: Theme,
    /// Scene drawing options.
    pub scene: SceneOptions,
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self {
            initial_tilt_degrees: INITIAL_TILT_DEGREES,
            degrees_per_pixel: 1.0,
            theme: Theme::default(),
            scene: SceneOptions::default(),
        }
    }
}
