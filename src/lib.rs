//! gpui_chart3d renders 3D point series as an interactive wireframe chart.
//! The geometry core is backend-agnostic; the GPUI backend paints it and
//! turns mouse drags into rotation.

#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod geom;
pub mod interaction;
pub mod loader;
pub mod model;
pub mod render;
pub mod sequence;
pub mod series;
pub mod style;
pub mod transform;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::{Axis, AxisFormatter, tick_values};
pub use error::{LoadError, Result};
pub use geom::{Bounds3, Point3, ScreenPoint, ScreenRect};
pub use interaction::{DragState, INITIAL_TILT_DEGREES, RotationController};
pub use loader::{discover_series_files, load_dir, load_files, read_series, read_series_from};
pub use model::{FIT_DIVISOR, PROJECTION_STRENGTH, SceneModel, SceneOptions, TICK_COUNT, box_edges};
pub use render::{
    Color, LineSegment, LineStyle, RectStyle, RenderCommand, RenderList, TextStyle,
};
pub use sequence::PointSequence;
pub use series::Series;
pub use style::{Theme, series_color, series_hue};
pub use transform::Transform;

#[cfg(feature = "gpui")]
pub use gpui_backend::{ChartViewConfig, GpuiChartView};
