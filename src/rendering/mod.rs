//! The rendering layer.
//!
//! Everything a sketch draws goes through this module:
//! - A Surface owning the pixel buffer, plus the host-side registry
//! - A Context2d implementing the immediate-mode drawing operations
//! - A PaintState caching colors and holding the sticky enable flags
//! - The Renderer state machine tying them together

pub mod color;
pub mod context;
pub mod paint_state;
pub mod path;
pub mod renderer;
pub mod surface;

// Re-export key types
pub use color::{Color, ColorSpec};
pub use context::Context2d;
pub use paint_state::PaintState;
pub use path::{Path, PathElement};
pub use renderer::{RENDERER_CANVAS, Renderer};
pub use surface::{Surface, SurfaceRegistry};
