//! # Cyto: a stateful 2D rendering layer for creative-coding sketches
//!
//! Cyto lets sketch code issue immediate-mode drawing calls — lines,
//! shapes, strokes, fills — without re-deriving drawing-context state on
//! every call. The heart of the crate is the [`rendering::Renderer`] state
//! machine: it owns the drawing surface, mediates all paint-state
//! mutations, and gates stroke/fill paints behind sticky enable flags.
//!
//! ## Quick start
//!
//! ```rust
//! use cyto::rendering::{Renderer, Surface, RENDERER_CANVAS};
//! use cyto::shapes;
//!
//! let surface = Surface::new(320, 240)?;
//! let mut renderer = Renderer::with_surface(RENDERER_CANVAS, surface);
//!
//! renderer.apply_background("#000000");
//! renderer.no_stroke();
//! renderer.fill_with("#ff0000");
//!
//! // Fill-only from here on: the enable flags are sticky.
//! shapes::rect(&mut renderer, 20.0, 20.0, 100.0, 60.0);
//! shapes::circle(&mut renderer, 200.0, 120.0, 40.0);
//! # Ok::<(), cyto::core::CytoError>(())
//! ```
//!
//! ## Design
//!
//! - **Enable-gated paints**: bare `stroke()`/`fill()` only paint if the
//!   corresponding flag was enabled by an earlier explicit call; passing a
//!   color always implies enabling. The flags are the state machine; the
//!   colors are payload.
//! - **Self-healing paint cache**: the paint state re-asserts its cached
//!   colors whenever the live context drifted, so one-off styles written
//!   straight to the context never leak into gated paints.
//! - **Inert on unsupported backends**: asking for a renderer type other
//!   than `"canvas"` reports an error and yields an instance whose
//!   operations are all no-ops — sketches never crash over it.
//!
//! Everything is single-threaded and synchronous; the only ordering
//! guarantee a sketch needs is call order.

pub mod core;
pub mod rendering;
pub mod shapes;
pub mod sketch;

// Re-export main types for convenience
pub use self::core::{CytoError, CytoResult};
pub use rendering::{
    Color, ColorSpec, Context2d, PaintState, Path, PathElement, RENDERER_CANVAS, Renderer,
    Surface, SurfaceRegistry,
};
pub use sketch::{Sketch, SketchHost, load_sketch};
