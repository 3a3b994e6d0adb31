use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, TextRun, Window, font, point,
    px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{
    Color, LineSegment, LineStyle, RectStyle, RenderCommand, RenderList, TextStyle,
};

/// Replay a render list onto the window, offset by the canvas origin.
pub(crate) fn paint_render_list(
    render: &RenderList,
    bounds: Bounds<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let origin = ScreenPoint::new(f32::from(bounds.origin.x), f32::from(bounds.origin.y));
    for command in render.commands() {
        match command {
            RenderCommand::Clear(color) => {
                paint_rect(window, to_screen_rect(bounds), RectStyle::filled(*color));
            }
            RenderCommand::LineSegments { segments, style } => {
                paint_lines(window, segments, *style, origin);
            }
            RenderCommand::Rect { rect, style } => {
                paint_rect(window, rect.offset(origin), *style);
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                paint_text(window, cx, position.offset(origin), text, style);
            }
        }
    }
}

fn paint_lines(
    window: &mut Window,
    segments: &[LineSegment],
    style: LineStyle,
    origin: ScreenPoint,
) {
    if segments.is_empty() {
        return;
    }
    let width = style.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    for segment in segments {
        let start = segment.start.offset(origin);
        let end = segment.end.offset(origin);
        builder.move_to(point(px(start.x), px(start.y)));
        builder.line_to(point(px(end.x), px(end.y)));
    }
    match builder.build() {
        Ok(path) => window.paint_path(path, to_rgba(style.color)),
        Err(err) => log::debug!("failed to build line path: {err:?}"),
    }
}

fn paint_rect(window: &mut Window, rect: ScreenRect, style: RectStyle) {
    if !rect.is_valid() {
        return;
    }
    let bounds = to_bounds(rect);
    let quad = quad(
        bounds,
        Corners::all(px(0.0)),
        to_rgba(style.fill),
        Edges::all(px(style.stroke_width)),
        to_rgba(style.stroke),
        BorderStyle::default(),
    );
    window.paint_quad(quad);
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(style.size);
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let origin = point(px(position.x), px(position.y));
    let _ = shaped.paint(origin, line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_screen_rect(bounds: Bounds<Pixels>) -> ScreenRect {
    ScreenRect::from_origin_size(
        ScreenPoint::new(f32::from(bounds.origin.x), f32::from(bounds.origin.y)),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}
