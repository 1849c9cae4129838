//! The rendering state machine.
//!
//! [`Renderer`] is the public face of the crate: it owns the drawing
//! context (which owns the surface) and the paint state, and mediates every
//! paint-state mutation and paint operation a sketch can issue.
//!
//! The actual state machine is the pair of sticky enable flags: bare
//! `stroke()`/`fill()` paint only if the corresponding flag was set by an
//! earlier explicit call, and passing a color always implies enabling. A
//! sketch can therefore write `no_stroke(); fill_with("red")` once and get
//! fill-only shapes from every subsequent primitive call until it toggles
//! the flags again. Colors are the secondary payload.

use crate::core::error::{CytoError, CytoResult};

use super::color::ColorSpec;
use super::context::Context2d;
use super::paint_state::PaintState;
use super::surface::{Surface, SurfaceRegistry};

/// The renderer-type token for the 2D canvas backend.
pub const RENDERER_CANVAS: &str = "canvas";

fn check_renderer_kind(kind: &str) -> CytoResult<()> {
    match kind {
        RENDERER_CANVAS => Ok(()),
        "webgl" => Err(CytoError::WebglNotSupported),
        other => Err(CytoError::UnsupportedRenderer(other.to_string())),
    }
}

/// The rendering state machine.
///
/// Construction fixes the backend. An unsupported renderer-type token (or a
/// surface id that does not resolve) is reported once through the
/// diagnostic channel and yields an *inert* instance: every subsequent
/// operation is a no-op and getters return defaults. Inert renderers never
/// panic.
#[derive(Debug)]
pub struct Renderer {
    /// `None` when the instance is inert
    context: Option<Context2d>,
    paint: PaintState,

    /// Last color handed to `apply_background`, replayed by `clear`
    background: Option<ColorSpec>,

    /// Construction error, if any
    error: Option<CytoError>,
}

impl Renderer {
    /// Construct a renderer over a surface resolved from the registry.
    pub fn new(kind: &str, surface_id: &str, registry: &mut SurfaceRegistry) -> Renderer {
        match registry.take(surface_id) {
            Some(surface) => Renderer::with_surface(kind, surface),
            None => Renderer::inert(CytoError::SurfaceNotFound(surface_id.to_string())),
        }
    }

    /// Construct a renderer that takes ownership of `surface` directly.
    pub fn with_surface(kind: &str, surface: Surface) -> Renderer {
        match check_renderer_kind(kind) {
            Ok(()) => Renderer {
                context: Some(Context2d::new(surface)),
                paint: PaintState::new(),
                background: None,
                error: None,
            },
            Err(err) => Renderer::inert(err),
        }
    }

    fn inert(err: CytoError) -> Renderer {
        eprintln!("Warning: {}", err);
        Renderer {
            context: None,
            paint: PaintState::new(),
            background: None,
            error: Some(err),
        }
    }

    /// Whether the instance holds a live backend.
    pub fn is_active(&self) -> bool {
        self.context.is_some()
    }

    /// The construction error of an inert instance.
    pub fn error(&self) -> Option<&CytoError> {
        self.error.as_ref()
    }

    // === Path construction ===

    pub fn begin_path(&mut self) {
        if let Some(ctx) = &mut self.context {
            ctx.begin_path();
        }
    }

    pub fn close_path(&mut self) {
        if let Some(ctx) = &mut self.context {
            ctx.close_path();
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        if let Some(ctx) = &mut self.context {
            ctx.move_to(x, y);
        }
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        if let Some(ctx) = &mut self.context {
            ctx.line_to(x, y);
        }
    }

    pub fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        if let Some(ctx) = &mut self.context {
            ctx.quadratic_curve_to(cx, cy, x, y);
        }
    }

    // === Gated paints ===

    /// Stroke the current path's outline, if stroke is enabled.
    pub fn stroke(&mut self) {
        let Some(ctx) = &mut self.context else {
            return;
        };
        if self.paint.is_stroke_enabled() {
            self.paint.reconcile(ctx);
            #[cfg(feature = "debug-logging")]
            eprintln!("DEBUG: stroke path [{}]", ctx.path());
            ctx.stroke();
        }
    }

    /// Set `color` as the stroke color, enable stroke, and paint.
    pub fn stroke_with(&mut self, color: impl Into<ColorSpec>) {
        let Some(ctx) = &mut self.context else {
            return;
        };
        self.paint.set_stroke_color(ctx, color);
        self.paint.set_stroke_enabled(true);
        self.stroke();
    }

    /// Disable stroke; subsequent bare `stroke()` calls paint nothing.
    pub fn no_stroke(&mut self) {
        if self.context.is_some() {
            self.paint.set_stroke_enabled(false);
        }
    }

    /// Fill the current path, if fill is enabled.
    pub fn fill(&mut self) {
        let Some(ctx) = &mut self.context else {
            return;
        };
        if self.paint.is_fill_enabled() {
            self.paint.reconcile(ctx);
            #[cfg(feature = "debug-logging")]
            eprintln!("DEBUG: fill path [{}]", ctx.path());
            ctx.fill();
        }
    }

    /// Set `color` as the fill color, enable fill, and paint.
    pub fn fill_with(&mut self, color: impl Into<ColorSpec>) {
        let Some(ctx) = &mut self.context else {
            return;
        };
        self.paint.set_fill_color(ctx, color);
        self.paint.set_fill_enabled(true);
        self.fill();
    }

    /// Disable fill; subsequent bare `fill()` calls paint nothing.
    pub fn no_fill(&mut self) {
        if self.context.is_some() {
            self.paint.set_fill_enabled(false);
        }
    }

    // === Background ===

    /// Paint an opaque rectangle covering the full surface extent.
    ///
    /// Runs inside a save/restore scope, so the ambient fill color and
    /// enable flags are untouched afterwards. The color is remembered and
    /// replayed by [`Renderer::clear`].
    pub fn apply_background(&mut self, color: impl Into<ColorSpec>) {
        let Some(ctx) = &mut self.context else {
            return;
        };
        let color = color.into();
        ctx.save();
        ctx.set_fill_style(color.clone());
        let (width, height) = ctx.surface().size();
        ctx.fill_rect(0.0, 0.0, width as f32, height as f32);
        ctx.restore();
        self.background = Some(color);
    }

    /// Repaint the remembered background color (white if none was set).
    pub fn clear(&mut self) {
        let color = self
            .background
            .clone()
            .unwrap_or_else(|| "#ffffff".to_string());
        self.apply_background(color);
    }

    // === Context state stack ===

    pub fn save(&mut self) {
        if let Some(ctx) = &mut self.context {
            ctx.save();
        }
    }

    /// Pop the context state stack.
    ///
    /// An unmatched restore is a detected, non-fatal condition: it warns
    /// and does nothing.
    pub fn restore(&mut self) {
        if let Some(ctx) = &mut self.context {
            if !ctx.restore() {
                eprintln!("Warning: restore() called without a matching save()");
            }
        }
    }

    // === Paint-state accessors ===

    pub fn set_stroke_color(&mut self, color: impl Into<ColorSpec>) {
        if let Some(ctx) = &mut self.context {
            self.paint.set_stroke_color(ctx, color);
        }
    }

    pub fn stroke_color(&mut self) -> Option<ColorSpec> {
        let ctx = self.context.as_mut()?;
        Some(self.paint.stroke_color(ctx))
    }

    pub fn set_fill_color(&mut self, color: impl Into<ColorSpec>) {
        if let Some(ctx) = &mut self.context {
            self.paint.set_fill_color(ctx, color);
        }
    }

    pub fn fill_color(&mut self) -> Option<ColorSpec> {
        let ctx = self.context.as_mut()?;
        Some(self.paint.fill_color(ctx))
    }

    pub fn set_line_width(&mut self, width: f32) {
        if let Some(ctx) = &mut self.context {
            self.paint.set_line_width(ctx, width);
        }
    }

    pub fn line_width(&self) -> f32 {
        match &self.context {
            Some(ctx) => self.paint.line_width(ctx),
            None => 1.0,
        }
    }

    pub fn set_stroke_enabled(&mut self, enabled: bool) {
        if self.context.is_some() {
            self.paint.set_stroke_enabled(enabled);
        }
    }

    pub fn is_stroke_enabled(&self) -> bool {
        self.paint.is_stroke_enabled()
    }

    pub fn set_fill_enabled(&mut self, enabled: bool) {
        if self.context.is_some() {
            self.paint.set_fill_enabled(enabled);
        }
    }

    pub fn is_fill_enabled(&self) -> bool {
        self.paint.is_fill_enabled()
    }

    // === Surface access ===

    /// Set both the logical and physical surface size.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if let Some(ctx) = &mut self.context {
            ctx.surface_mut().set_size(width, height);
        }
    }

    /// Current surface size; `(0, 0)` for an inert instance.
    pub fn size(&self) -> (u32, u32) {
        match &self.context {
            Some(ctx) => ctx.surface().size(),
            None => (0, 0),
        }
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.context.as_ref().map(Context2d::surface)
    }

    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.context.as_mut().map(Context2d::surface_mut)
    }

    /// Raw context access, for collaborators outside the gated API.
    pub fn context_mut(&mut self) -> Option<&mut Context2d> {
        self.context.as_mut()
    }
}
