//! The immediate-mode 2D drawing context.
//!
//! [`Context2d`] is the "live" context the rest of the system paints
//! through: it owns the surface, the raw paint attributes (style tokens and
//! line width), the current deferred path, and the save/restore stack.
//! Nothing here caches or gates anything — that is the paint state's and
//! renderer's job. Collaborators are allowed to poke the raw attributes
//! directly; the paint state reconciles against them.

use tiny_skia::{FillRule, Paint, PathBuilder, Rect, Stroke, Transform};

use super::color::{Color, ColorSpec};
use super::path::Path;
use super::surface::Surface;

const DEFAULT_STYLE: &str = "#000000";

/// Paint attributes captured by `save` and reinstated by `restore`.
#[derive(Debug, Clone)]
struct ContextState {
    stroke_style: ColorSpec,
    fill_style: ColorSpec,
    line_width: f32,
}

/// An immediate-mode drawing context over a [`Surface`].
#[derive(Debug)]
pub struct Context2d {
    surface: Surface,

    stroke_style: ColorSpec,
    fill_style: ColorSpec,
    line_width: f32,

    /// Current deferred path; persists across paints until the next
    /// `begin_path`
    path: Path,

    /// Saved states, most recent last
    state_stack: Vec<ContextState>,
}

impl Context2d {
    pub fn new(surface: Surface) -> Self {
        Context2d {
            surface,
            stroke_style: DEFAULT_STYLE.to_string(),
            fill_style: DEFAULT_STYLE.to_string(),
            line_width: 1.0,
            path: Path::new(),
            state_stack: Vec::new(),
        }
    }

    // === Raw paint attributes ===

    pub fn stroke_style(&self) -> &str {
        &self.stroke_style
    }

    pub fn set_stroke_style(&mut self, style: impl Into<ColorSpec>) {
        self.stroke_style = style.into();
    }

    pub fn fill_style(&self) -> &str {
        &self.fill_style
    }

    pub fn set_fill_style(&mut self, style: impl Into<ColorSpec>) {
        self.fill_style = style.into();
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn set_line_width(&mut self, width: f32) {
        if width > 0.0 && width.is_finite() {
            self.line_width = width;
        }
    }

    // === Path construction ===

    pub fn begin_path(&mut self) {
        self.path.begin();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(x, y);
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(x, y);
    }

    pub fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.path.quad_to(cx, cy, x, y);
    }

    pub fn close_path(&mut self) {
        self.path.close();
    }

    /// The path currently under construction.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // === Paints ===

    /// Stroke the current path's outline with the current stroke style and
    /// line width. A path with no paintable area strokes nothing.
    pub fn stroke(&mut self) {
        let Some(skia_path) = self.path.to_skia() else {
            return;
        };
        let paint = solid_paint(&self.stroke_style);
        let stroke = Stroke {
            width: self.line_width,
            ..Stroke::default()
        };
        self.surface.pixmap_mut().stroke_path(
            &skia_path,
            &paint,
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Fill the current path with the current fill style (nonzero winding).
    pub fn fill(&mut self) {
        let Some(skia_path) = self.path.to_skia() else {
            return;
        };
        let paint = solid_paint(&self.fill_style);
        self.surface.pixmap_mut().fill_path(
            &skia_path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Fill an axis-aligned rectangle with the current fill style without
    /// disturbing the current path.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        let rect_path = PathBuilder::from_rect(rect);
        let paint = solid_paint(&self.fill_style);
        self.surface.pixmap_mut().fill_path(
            &rect_path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    // === State stack ===

    /// Push the current paint attributes onto the state stack.
    pub fn save(&mut self) {
        self.state_stack.push(ContextState {
            stroke_style: self.stroke_style.clone(),
            fill_style: self.fill_style.clone(),
            line_width: self.line_width,
        });
    }

    /// Pop the most recent save, reinstating its paint attributes.
    ///
    /// Returns `false` when there is nothing to pop; the context is left
    /// unchanged in that case.
    pub fn restore(&mut self) -> bool {
        match self.state_stack.pop() {
            Some(state) => {
                self.stroke_style = state.stroke_style;
                self.fill_style = state.fill_style;
                self.line_width = state.line_width;
                true
            }
            None => false,
        }
    }

    /// Number of saved states currently on the stack.
    pub fn save_depth(&self) -> usize {
        self.state_stack.len()
    }

    // === Surface access ===

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}

fn solid_paint(style: &str) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(Color::parse_or_black(style).to_skia());
    paint.anti_alias = true;
    paint
}
