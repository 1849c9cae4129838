//! Sketch lifecycle: loading and frame driving.
//!
//! Loading resolves exactly once — successfully or with an error — before
//! any drawing begins, and the host then drives `reset -> setup -> draw`
//! strictly in order on one thread. There is no asynchrony anywhere in the
//! core; a sketch sees the renderer only from inside its callbacks.

use crate::core::error::{CytoError, CytoResult};
use crate::rendering::renderer::Renderer;

/// Default maximized surface size applied by `reset`.
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// Externally supplied drawing logic.
pub trait Sketch {
    /// Called once before the first frame.
    fn setup(&mut self, _renderer: &mut Renderer) {}

    /// Called once per frame with an increasing frame number.
    fn draw(&mut self, renderer: &mut Renderer, frame: u64);
}

/// Resolve a sketch from a factory, exactly once.
///
/// The factory is consumed whether it succeeds or fails; failures map to
/// [`CytoError::LoadError`].
pub fn load_sketch<F>(factory: F) -> CytoResult<Box<dyn Sketch>>
where
    F: FnOnce() -> Result<Box<dyn Sketch>, String>,
{
    factory().map_err(CytoError::LoadError)
}

/// Owns the renderer and drives the per-frame loop.
pub struct SketchHost {
    renderer: Renderer,
    frame: u64,
}

impl SketchHost {
    pub fn new(renderer: Renderer) -> Self {
        SketchHost { renderer, frame: 0 }
    }

    /// Maximize the surface to the default sketch size.
    pub fn reset(&mut self) {
        self.renderer.set_size(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    }

    /// Run the lifecycle: reset, setup once, then `frames` draw calls.
    ///
    /// Returns the number of frames drawn. Stands in for the host
    /// environment's animation-frame loop; each iteration is one frame.
    pub fn start(&mut self, sketch: &mut dyn Sketch, frames: u64) -> u64 {
        self.reset();
        sketch.setup(&mut self.renderer);
        for _ in 0..frames {
            sketch.draw(&mut self.renderer, self.frame);
            self.frame += 1;
        }
        self.frame
    }

    /// Frames drawn so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::renderer::RENDERER_CANVAS;
    use crate::rendering::surface::Surface;

    struct RecordingSketch {
        events: Vec<String>,
    }

    impl Sketch for RecordingSketch {
        fn setup(&mut self, renderer: &mut Renderer) {
            self.events.push(format!("setup {:?}", renderer.size()));
        }

        fn draw(&mut self, _renderer: &mut Renderer, frame: u64) {
            self.events.push(format!("draw {}", frame));
        }
    }

    fn host() -> SketchHost {
        let renderer = Renderer::with_surface(RENDERER_CANVAS, Surface::new(8, 8).unwrap());
        SketchHost::new(renderer)
    }

    #[test]
    fn test_lifecycle_ordering() {
        let mut sketch = RecordingSketch { events: Vec::new() };
        let mut host = host();
        let frames = host.start(&mut sketch, 3);
        assert_eq!(frames, 3);
        assert_eq!(
            sketch.events,
            vec!["setup (640, 480)", "draw 0", "draw 1", "draw 2"]
        );
    }

    #[test]
    fn test_reset_maximizes_surface() {
        let mut host = host();
        host.reset();
        assert_eq!(host.renderer().size(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn test_load_sketch_resolves_once() {
        let loaded = load_sketch(|| {
            Ok(Box::new(RecordingSketch { events: Vec::new() }) as Box<dyn Sketch>)
        });
        assert!(loaded.is_ok());

        let failed = load_sketch(|| Err("module not found".to_string()));
        assert_eq!(
            failed.err(),
            Some(CytoError::LoadError("module not found".to_string()))
        );
    }
}
