//! Primitive shape helpers.
//!
//! Thin call-throughs built purely from the renderer's public operations —
//! no reaching into the paint state or the raw context. Every closed shape
//! ends with a bare `fill()` followed by a bare `stroke()`, so the sticky
//! enable flags decide what actually paints.

use std::f32::consts::PI;

use crate::rendering::renderer::Renderer;

/// Draw a line segment from (x1, y1) to (x2, y2).
pub fn line(r: &mut Renderer, x1: f32, y1: f32, x2: f32, y2: f32) {
    r.begin_path();
    r.move_to(x1, y1);
    r.line_to(x2, y2);
    r.stroke();
}

/// Draw an axis-aligned rectangle.
pub fn rect(r: &mut Renderer, x: f32, y: f32, width: f32, height: f32) {
    quad(
        r,
        x,
        y,
        x + width,
        y,
        x + width,
        y + height,
        x,
        y + height,
    );
}

/// Draw an arbitrary quadrilateral from four corner points.
#[allow(clippy::too_many_arguments)]
pub fn quad(
    r: &mut Renderer,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    x3: f32,
    y3: f32,
    x4: f32,
    y4: f32,
) {
    r.begin_path();
    r.move_to(x1, y1);
    r.line_to(x2, y2);
    r.line_to(x3, y3);
    r.line_to(x4, y4);
    r.close_path();
    r.fill();
    r.stroke();
}

/// Draw a triangle from three corner points.
pub fn triangle(r: &mut Renderer, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
    r.begin_path();
    r.move_to(x1, y1);
    r.line_to(x2, y2);
    r.line_to(x3, y3);
    r.close_path();
    r.fill();
    r.stroke();
}

/// Draw an axis-aligned ellipse centered at (cx, cy).
///
/// The path contract has no arc primitive, so the outline is approximated
/// by eight quadratic segments; the control points sit at radius
/// `1 / cos(pi/8)` so each segment passes through the true outline at its
/// endpoints.
pub fn ellipse(r: &mut Renderer, cx: f32, cy: f32, rx: f32, ry: f32) {
    const SEGMENTS: u32 = 8;
    let step = 2.0 * PI / SEGMENTS as f32;
    let k = 1.0 / (step / 2.0).cos();

    r.begin_path();
    r.move_to(cx + rx, cy);
    for i in 0..SEGMENTS {
        let mid = (i as f32 + 0.5) * step;
        let end = (i as f32 + 1.0) * step;
        r.quadratic_curve_to(
            cx + rx * k * mid.cos(),
            cy + ry * k * mid.sin(),
            cx + rx * end.cos(),
            cy + ry * end.sin(),
        );
    }
    r.close_path();
    r.fill();
    r.stroke();
}

/// Draw a circle centered at (cx, cy).
pub fn circle(r: &mut Renderer, cx: f32, cy: f32, radius: f32) {
    ellipse(r, cx, cy, radius, radius);
}
