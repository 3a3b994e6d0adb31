//! Chart model: normalized series plus the view pipeline that draws them.
//!
//! A [`SceneModel`] is built once from raw series. On construction every
//! point is shifted so the combined bounding box starts at the origin, which
//! keeps all series in one shared coordinate frame. Drawing is a pure
//! function of the viewport size, the caller's cumulative rotation, and the
//! theme; the result is a [`RenderList`] for a backend to paint.

use crate::axis::{Axis, AxisFormatter, tick_values};
use crate::geom::{Bounds3, Point3, ScreenPoint, ScreenRect};
use crate::render::{LineStyle, RenderList, TextStyle, build_line_segments};
use crate::sequence::PointSequence;
use crate::series::Series;
use crate::style::{Theme, series_color};
use crate::transform::Transform;

/// Default perspective strength of the view pipeline.
pub const PROJECTION_STRENGTH: f64 = 0.0015;
/// The model is scaled so each axis spans `min(width, height) / FIT_DIVISOR` pixels.
pub const FIT_DIVISOR: f64 = 1.8;
/// Default number of grid ticks per axis.
pub const TICK_COUNT: usize = 5;

const LEGEND_ROW_SPACING: f32 = 20.0;
const LEGEND_SWATCH_START: f32 = 10.0;
const LEGEND_SWATCH_END: f32 = 30.0;
const LEGEND_LABEL_X: f32 = 35.0;
const TICK_MARKER_SIZE: f32 = 3.0;

/// Tunables for [`SceneModel::draw_with`].
#[derive(Debug, Clone)]
pub struct SceneOptions {
    /// Perspective strength.
    pub projection_strength: f64,
    /// Fit divisor applied to the smaller viewport dimension.
    pub fit_divisor: f64,
    /// Number of ticks per axis.
    pub tick_count: usize,
    /// Vertical distance between legend rows.
    pub legend_row_spacing: f32,
    /// Draw the legend.
    pub show_legend: bool,
    /// Draw tick markers and labels.
    pub show_grid: bool,
    /// Tick label formatter.
    pub formatter: AxisFormatter,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            projection_strength: PROJECTION_STRENGTH,
            fit_divisor: FIT_DIVISOR,
            tick_count: TICK_COUNT,
            legend_row_spacing: LEGEND_ROW_SPACING,
            show_legend: true,
            show_grid: true,
            formatter: AxisFormatter::default(),
        }
    }
}

/// Immutable collection of series in model space.
#[derive(Debug, Clone)]
pub struct SceneModel {
    series: Vec<Series>,
    bounds: Option<Bounds3>,
    size: Point3,
}

impl SceneModel {
    /// Build a model, translating all series so the combined minimum sits at the origin.
    pub fn new(mut series: Vec<Series>) -> Self {
        let bounds = Bounds3::from_points(series.iter().flat_map(|s| s.points().iter()));
        let size = bounds.map(|b| b.size()).unwrap_or(Point3::ZERO);
        if let Some(bounds) = bounds {
            let min = bounds.min;
            for s in &mut series {
                s.points_mut().map_in_place(|p| p - min);
            }
        }
        log::debug!(
            "scene model: {} series, size {:.6} x {:.6} x {:.6}",
            series.len(),
            size.x,
            size.y,
            size.z
        );
        Self {
            series,
            bounds,
            size,
        }
    }

    /// Access all series in model space.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Bounds of the original, untranslated data.
    pub fn bounds(&self) -> Option<Bounds3> {
        self.bounds
    }

    /// Extent of the data along each axis.
    pub fn size(&self) -> Point3 {
        self.size
    }

    /// Build the full model-to-screen transform with default options.
    pub fn view_transform(
        &self,
        width: f32,
        height: f32,
        rotation: &Transform,
    ) -> Option<Transform> {
        self.view_transform_with(width, height, rotation, &SceneOptions::default())
    }

    /// Build the full model-to-screen transform.
    ///
    /// In application order: center the model on the origin, scale each axis
    /// to fit the viewport, apply `rotation`, project, then move the origin to
    /// the viewport center. Returns `None` for a viewport without area.
    pub fn view_transform_with(
        &self,
        width: f32,
        height: f32,
        rotation: &Transform,
        options: &SceneOptions,
    ) -> Option<Transform> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let (width, height) = (width as f64, height as f64);
        let size = self.size;
        let fit = width.min(height) / options.fit_divisor;

        let center_model = Transform::translate(-size.x / 2.0, -size.y / 2.0, -size.z / 2.0);
        let scale = Transform::scale(
            fit_scale(fit, size.x),
            fit_scale(fit, size.y),
            fit_scale(fit, size.z),
        );
        let projection = Transform::perspective(options.projection_strength);
        let center_screen = Transform::translate(width / 2.0, height / 2.0, 0.0);

        Some(
            center_model
                .compose(&scale)
                .compose(rotation)
                .compose(&projection)
                .compose(&center_screen),
        )
    }

    /// Draw the chart with default options.
    pub fn draw(
        &self,
        width: f32,
        height: f32,
        rotation: &Transform,
        theme: &Theme,
    ) -> RenderList {
        self.draw_with(width, height, rotation, theme, &SceneOptions::default())
    }

    /// Draw the chart into a fresh render list.
    ///
    /// A viewport without area yields an empty list.
    pub fn draw_with(
        &self,
        width: f32,
        height: f32,
        rotation: &Transform,
        theme: &Theme,
        options: &SceneOptions,
    ) -> RenderList {
        let mut render = RenderList::new();
        let Some(view) = self.view_transform_with(width, height, rotation, options) else {
            return render;
        };
        let clip = ScreenRect::from_origin_size(ScreenPoint::new(0.0, 0.0), width, height);

        render.clear(theme.background);
        if self.series.is_empty() {
            return render;
        }

        self.draw_series(&mut render, &view, clip, theme, options);
        self.draw_box(&mut render, &view, clip, theme);
        self.draw_axis_labels(&mut render, &view, theme);
        if options.show_grid {
            self.draw_grid(&mut render, &view, theme, options);
        }
        render
    }

    fn draw_series(
        &self,
        render: &mut RenderList,
        view: &Transform,
        clip: ScreenRect,
        theme: &Theme,
        options: &SceneOptions,
    ) {
        let count = self.series.len();
        for (index, series) in (1..).zip(&self.series) {
            let color = series_color(index, count);

            let mut projected = series.points().clone();
            projected.transform(view);
            let skipped = projected.skipped();
            if skipped > 0 {
                log::debug!(
                    "series {:?}: skipped {skipped} unprojectable points",
                    series.name()
                );
            }
            let mut segments = Vec::new();
            build_line_segments(projected.strip(), clip, &mut segments);
            render.lines(LineStyle::new(color, theme.series_width), segments);

            if options.show_legend {
                let row = index as f32 * options.legend_row_spacing;
                render.line(
                    LineStyle::new(color, theme.legend_swatch_width),
                    ScreenPoint::new(LEGEND_SWATCH_START, row),
                    ScreenPoint::new(LEGEND_SWATCH_END, row),
                );
                render.text(
                    series.name(),
                    ScreenPoint::new(LEGEND_LABEL_X, row - theme.legend_label_size / 2.0),
                    TextStyle::new(theme.legend_text, theme.legend_label_size),
                );
            }
        }
    }

    fn draw_box(
        &self,
        render: &mut RenderList,
        view: &Transform,
        clip: ScreenRect,
        theme: &Theme,
    ) {
        let mut frame = box_edges(self.size);
        frame.transform(view);
        let mut segments = Vec::with_capacity(12);
        build_line_segments(frame.segments(), clip, &mut segments);
        render.lines(LineStyle::new(theme.frame, 1.0), segments);
    }

    fn draw_axis_labels(&self, render: &mut RenderList, view: &Transform, theme: &Theme) {
        let style = TextStyle::new(theme.label, theme.axis_label_size);
        for axis in Axis::ALL {
            let end = axis.point_at(axis.component(self.size));
            if let Some(projected) = end.transform(view) {
                render.text(axis.label(), projected.to_screen(), style.clone());
            }
        }
    }

    fn draw_grid(
        &self,
        render: &mut RenderList,
        view: &Transform,
        theme: &Theme,
        options: &SceneOptions,
    ) {
        let style = TextStyle::new(theme.label, theme.tick_label_size);
        let half = (TICK_MARKER_SIZE - 1.0) / 2.0;
        for axis in Axis::ALL {
            for value in tick_values(axis.component(self.size), options.tick_count) {
                let Some(projected) = axis.point_at(value).transform(view) else {
                    continue;
                };
                let at = projected.to_screen();
                render.fill_rect(
                    theme.tick_marker,
                    ScreenPoint::new(at.x - half, at.y - half),
                    TICK_MARKER_SIZE,
                    TICK_MARKER_SIZE,
                );
                render.text(options.formatter.format(value), at, style.clone());
            }
        }
    }
}

/// Per-axis scale that maps `extent` onto `fit` pixels; zero extents keep unit scale.
fn fit_scale(fit: f64, extent: f64) -> f64 {
    if extent > 0.0 && extent.is_finite() {
        fit / extent
    } else {
        1.0
    }
}

/// The 12 edges of the box `[0, size.x] x [0, size.y] x [0, size.z]` as point pairs.
///
/// Edges are grouped by direction: four along X, four along Y, four along Z.
pub fn box_edges(size: Point3) -> PointSequence {
    let (x, y, z) = (size.x, size.y, size.z);
    let mut edges = PointSequence::with_capacity(24);
    for (b, c) in [(0.0, 0.0), (0.0, z), (y, 0.0), (y, z)] {
        edges.push(Point3::new(0.0, b, c));
        edges.push(Point3::new(x, b, c));
    }
    for (a, c) in [(0.0, 0.0), (0.0, z), (x, 0.0), (x, z)] {
        edges.push(Point3::new(a, 0.0, c));
        edges.push(Point3::new(a, y, c));
    }
    for (a, b) in [(0.0, 0.0), (0.0, y), (x, 0.0), (x, y)] {
        edges.push(Point3::new(a, b, 0.0));
        edges.push(Point3::new(a, b, z));
    }
    edges
}
