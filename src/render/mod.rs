//! Rendering primitives and clipping helpers.
//!
//! These types are backend-agnostic. The chart model records what to draw
//! into a [`RenderList`] and render backends (such as the GPUI backend)
//! replay it against a real canvas.

use crate::geom::{Point3, ScreenPoint, ScreenRect};

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Create an opaque color from hue, saturation and lightness.
    ///
    /// `h` is measured in turns (0.0..=1.0); `s` and `l` are fractions.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        if s.abs() <= f64::EPSILON {
            return Self::new(l as f32, l as f32, l as f32, 1.0);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let r = hue_channel(p, q, h + 1.0 / 3.0);
        let g = hue_channel(p, q, h);
        let b = hue_channel(p, q, h - 1.0 / 3.0);
        Self::new(r as f32, g as f32, b as f32, 1.0)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
}

fn hue_channel(p: f64, q: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }
    if h * 6.0 < 1.0 {
        p + (q - p) * h * 6.0
    } else if h * 2.0 < 1.0 {
        q
    } else if h * 3.0 < 2.0 {
        p + (q - p) * (2.0 / 3.0 - h) * 6.0
    } else {
        p
    }
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl LineStyle {
    /// Create a line style.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

impl RectStyle {
    /// A borderless filled rectangle.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill,
            stroke: fill,
            stroke_width: 0.0,
        }
    }
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            fill: Color::new(0.0, 0.0, 0.0, 0.0),
            stroke: Color::BLACK,
            stroke_width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl TextStyle {
    /// Create a text style.
    pub fn new(color: Color, size: f32) -> Self {
        Self { color, size }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill the whole canvas.
    Clear(Color),
    /// Draw line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw text with its top-left corner at `position`.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands.
///
/// This is the canvas the chart model draws into; every coordinate is in
/// device pixels relative to the canvas origin.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Fill the canvas with `color`.
    pub fn clear(&mut self, color: Color) {
        self.push(RenderCommand::Clear(color));
    }

    /// Draw line segments. Empty batches are dropped.
    pub fn lines(&mut self, style: LineStyle, segments: Vec<LineSegment>) {
        if segments.is_empty() {
            return;
        }
        self.push(RenderCommand::LineSegments { segments, style });
    }

    /// Draw a single line.
    pub fn line(&mut self, style: LineStyle, start: ScreenPoint, end: ScreenPoint) {
        self.lines(style, vec![LineSegment::new(start, end)]);
    }

    /// Draw text.
    pub fn text(&mut self, text: impl Into<String>, position: ScreenPoint, style: TextStyle) {
        self.push(RenderCommand::Text {
            position,
            text: text.into(),
            style,
        });
    }

    /// Fill a rectangle given its top-left corner and size.
    pub fn fill_rect(&mut self, color: Color, position: ScreenPoint, width: f32, height: f32) {
        self.push(RenderCommand::Rect {
            rect: ScreenRect::from_origin_size(position, width, height),
            style: RectStyle::filled(color),
        });
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Check whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over every line segment in the list.
    pub fn segments(&self) -> impl Iterator<Item = &LineSegment> + '_ {
        self.commands.iter().flat_map(|command| match command {
            RenderCommand::LineSegments { segments, .. } => segments.as_slice(),
            _ => &[],
        })
    }

    /// Iterate over every text label and its position.
    pub fn texts(&self) -> impl Iterator<Item = (&str, ScreenPoint)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Text { text, position, .. } => Some((text.as_str(), *position)),
            _ => None,
        })
    }
}

/// Build clipped screen segments from projected point pairs.
pub(crate) fn build_line_segments(
    pairs: impl Iterator<Item = (Point3, Point3)>,
    clip: ScreenRect,
    out: &mut Vec<LineSegment>,
) {
    out.clear();
    for (start, end) in pairs {
        if let Some((clipped_start, clipped_end)) =
            clip_segment(start.to_screen(), end.to_screen(), clip)
        {
            out.push(LineSegment::new(clipped_start, clipped_end));
        }
    }
}

fn clip_segment(
    mut start: ScreenPoint,
    mut end: ScreenPoint,
    rect: ScreenRect,
) -> Option<(ScreenPoint, ScreenPoint)> {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const TOP: u8 = 4;
    const BOTTOM: u8 = 8;

    let region_code = |point: ScreenPoint| {
        let mut code = 0;
        if point.x < rect.min.x {
            code |= LEFT;
        } else if point.x > rect.max.x {
            code |= RIGHT;
        }
        if point.y < rect.min.y {
            code |= TOP;
        } else if point.y > rect.max.y {
            code |= BOTTOM;
        }
        code
    };

    let mut out_start = region_code(start);
    let mut out_end = region_code(end);

    loop {
        if (out_start | out_end) == 0 {
            return Some((start, end));
        }
        if (out_start & out_end) != 0 {
            return None;
        }

        let out_code = if out_start != 0 { out_start } else { out_end };
        let (mut x, mut y) = (0.0_f32, 0.0_f32);

        if (out_code & TOP) != 0 {
            x = start.x + (end.x - start.x) * (rect.min.y - start.y) / (end.y - start.y);
            y = rect.min.y;
        } else if (out_code & BOTTOM) != 0 {
            x = start.x + (end.x - start.x) * (rect.max.y - start.y) / (end.y - start.y);
            y = rect.max.y;
        } else if (out_code & RIGHT) != 0 {
            y = start.y + (end.y - start.y) * (rect.max.x - start.x) / (end.x - start.x);
            x = rect.max.x;
        } else if (out_code & LEFT) != 0 {
            y = start.y + (end.y - start.y) * (rect.min.x - start.x) / (end.x - start.x);
            x = rect.min.x;
        }

        let new_point = ScreenPoint::new(x, y);
        if out_code == out_start {
            start = new_point;
            out_start = region_code(start);
        } else {
            end = new_point;
            out_end = region_code(end);
        }
    }
}
