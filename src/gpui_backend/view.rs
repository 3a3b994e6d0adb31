use std::sync::Arc;

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, Window, canvas, div,
};

use crate::geom::ScreenPoint;
use crate::interaction::RotationController;
use crate::model::SceneModel;
use crate::transform::Transform;

use super::config::ChartViewConfig;
use super::paint::{paint_render_list, to_hsla};

/// A GPUI view that renders a [`SceneModel`] and rotates it on drag.
///
/// The view owns the rotation state; the model is shared read-only. Left
/// drag rotates the chart and a double click restores the initial tilt.
pub struct GpuiChartView {
    model: Arc<SceneModel>,
    controller: RotationController,
    config: ChartViewConfig,
}

impl GpuiChartView {
    /// Create a chart view with the default [`ChartViewConfig`].
    pub fn new(model: Arc<SceneModel>) -> Self {
        Self::with_config(model, ChartViewConfig::default())
    }

    /// Create a chart view with a custom configuration.
    pub fn with_config(model: Arc<SceneModel>, config: ChartViewConfig) -> Self {
        let controller = RotationController::with_tilt(config.initial_tilt_degrees)
            .with_sensitivity(config.degrees_per_pixel);
        Self {
            model,
            controller,
            config,
        }
    }

    /// Current cumulative rotation.
    pub fn rotation(&self) -> Transform {
        self.controller.rotation()
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        if ev.click_count >= 2 {
            self.controller.reset();
            cx.notify();
            return;
        }
        self.controller.pointer_down(screen_point(ev.position));
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        if self.controller.pointer_move(screen_point(ev.position)) {
            cx.notify();
        }
    }

    fn on_mouse_up(&mut self, _ev: &MouseUpEvent, _cx: &mut Context<Self>) {
        self.controller.pointer_up();
    }
}

impl Render for GpuiChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model = Arc::clone(&self.model);
        let rotation = self.controller.rotation();
        let theme = self.config.theme.clone();
        let scene = self.config.scene.clone();
        let background = to_hsla(theme.background);

        div()
            .size_full()
            .bg(background)
            .child(
                canvas(
                    move |bounds, _, _| {
                        model.draw_with(
                            f32::from(bounds.size.width),
                            f32::from(bounds.size.height),
                            &rotation,
                            &theme,
                            &scene,
                        )
                    },
                    move |bounds, render, window, cx| {
                        paint_render_list(&render, bounds, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
