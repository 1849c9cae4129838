//! Authoritative paint state with a self-healing color cache.
//!
//! The paint state owns the colors a sketch asked for and the sticky
//! enable flags that gate stroke/fill paints. Colors are cached here
//! because collaborators (shape helpers, background fills) may write
//! one-off styles straight to the context within a frame; the getters
//! detect that drift and re-assert the cached value. Line width is
//! deliberately NOT cached — no call pattern in this system clobbers it,
//! so the context stays authoritative for that attribute only. The
//! asymmetry is a contract, not an omission.

use super::color::ColorSpec;
use super::context::Context2d;

/// Cached paint attributes and sticky enable flags.
#[derive(Debug, Clone, Default)]
pub struct PaintState {
    stroke_color: Option<ColorSpec>,
    fill_color: Option<ColorSpec>,
    stroke_enabled: bool,
    fill_enabled: bool,
}

impl PaintState {
    pub fn new() -> Self {
        PaintState::default()
    }

    /// Set the authoritative stroke color and write it through.
    pub fn set_stroke_color(&mut self, ctx: &mut Context2d, color: impl Into<ColorSpec>) {
        let color = color.into();
        ctx.set_stroke_style(color.clone());
        self.stroke_color = Some(color);
    }

    /// Current stroke color, re-asserting it onto the context if some
    /// other agent changed the live value.
    pub fn stroke_color(&self, ctx: &mut Context2d) -> ColorSpec {
        match &self.stroke_color {
            Some(color) => {
                if ctx.stroke_style() != color.as_str() {
                    ctx.set_stroke_style(color.clone());
                }
                color.clone()
            }
            None => ctx.stroke_style().to_string(),
        }
    }

    /// Set the authoritative fill color and write it through.
    pub fn set_fill_color(&mut self, ctx: &mut Context2d, color: impl Into<ColorSpec>) {
        let color = color.into();
        ctx.set_fill_style(color.clone());
        self.fill_color = Some(color);
    }

    /// Current fill color, re-asserting it onto the context if some other
    /// agent changed the live value.
    pub fn fill_color(&self, ctx: &mut Context2d) -> ColorSpec {
        match &self.fill_color {
            Some(color) => {
                if ctx.fill_style() != color.as_str() {
                    ctx.set_fill_style(color.clone());
                }
                color.clone()
            }
            None => ctx.fill_style().to_string(),
        }
    }

    /// Re-assert both cached colors onto the context.
    ///
    /// Called before every paint so a one-off style written straight to the
    /// context never leaks into a gated stroke/fill.
    pub fn reconcile(&self, ctx: &mut Context2d) {
        if let Some(color) = &self.stroke_color {
            if ctx.stroke_style() != color.as_str() {
                ctx.set_stroke_style(color.clone());
            }
        }
        if let Some(color) = &self.fill_color {
            if ctx.fill_style() != color.as_str() {
                ctx.set_fill_style(color.clone());
            }
        }
    }

    /// Forwarded directly; the context is authoritative for line width.
    pub fn set_line_width(&mut self, ctx: &mut Context2d, width: f32) {
        ctx.set_line_width(width);
    }

    pub fn line_width(&self, ctx: &Context2d) -> f32 {
        ctx.line_width()
    }

    pub fn set_stroke_enabled(&mut self, enabled: bool) {
        self.stroke_enabled = enabled;
    }

    pub fn is_stroke_enabled(&self) -> bool {
        self.stroke_enabled
    }

    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.fill_enabled = enabled;
    }

    pub fn is_fill_enabled(&self) -> bool {
        self.fill_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::surface::Surface;

    fn context() -> Context2d {
        Context2d::new(Surface::new(10, 10).unwrap())
    }

    #[test]
    fn test_defaults() {
        let state = PaintState::new();
        assert!(!state.is_stroke_enabled());
        assert!(!state.is_fill_enabled());
    }

    #[test]
    fn test_set_writes_through() {
        let mut ctx = context();
        let mut state = PaintState::new();
        state.set_fill_color(&mut ctx, "#ff0000");
        assert_eq!(ctx.fill_style(), "#ff0000");
    }

    #[test]
    fn test_getter_heals_external_drift() {
        let mut ctx = context();
        let mut state = PaintState::new();
        state.set_fill_color(&mut ctx, "#ff0000");

        // Some other agent pokes the live context directly.
        ctx.set_fill_style("#00ff00");

        assert_eq!(state.fill_color(&mut ctx), "#ff0000");
        assert_eq!(ctx.fill_style(), "#ff0000");
    }

    #[test]
    fn test_stroke_cache_heals_too() {
        let mut ctx = context();
        let mut state = PaintState::new();
        state.set_stroke_color(&mut ctx, "blue");
        ctx.set_stroke_style("#123456");
        assert_eq!(state.stroke_color(&mut ctx), "blue");
        assert_eq!(ctx.stroke_style(), "blue");
    }

    #[test]
    fn test_unset_color_passes_through() {
        let mut ctx = context();
        let state = PaintState::new();
        ctx.set_fill_style("#777777");
        assert_eq!(state.fill_color(&mut ctx), "#777777");
        // No authoritative value: the live one stands.
        assert_eq!(ctx.fill_style(), "#777777");
    }

    #[test]
    fn test_line_width_is_not_cached() {
        let mut ctx = context();
        let mut state = PaintState::new();
        state.set_line_width(&mut ctx, 5.0);
        // External mutation is NOT corrected for line width.
        ctx.set_line_width(2.0);
        assert_eq!(state.line_width(&ctx), 2.0);
    }
}
