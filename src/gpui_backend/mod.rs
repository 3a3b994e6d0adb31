//! GPUI integration for gpui_chart3d.
//!
//! This module provides a GPUI view that paints a
//! [`SceneModel`](crate::model::SceneModel) and rotates it when the user
//! drags with the left mouse button.

mod config;
mod paint;
mod view;

pub use config::ChartViewConfig;
pub use view::GpuiChartView;
