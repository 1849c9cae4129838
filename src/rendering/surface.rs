//! The drawing surface and the host-side surface registry.
//!
//! A [`Surface`] pairs the physical pixel buffer with a logical (style)
//! size. The two are kept equal on every mutation: this layer does no
//! independent high-DPI scaling.

use rustc_hash::FxHashMap;
use tiny_skia::Pixmap;

use crate::core::error::{CytoError, CytoResult};

/// The drawing surface: a pixel buffer plus its logical size.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,

    /// Logical (style) size; equal to the pixmap size by invariant
    logical_width: u32,
    logical_height: u32,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

impl Surface {
    /// Create a surface with the given dimensions.
    ///
    /// Zero dimensions are rounded up to one pixel; the pixel buffer cannot
    /// be empty.
    pub fn new(width: u32, height: u32) -> CytoResult<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let pixmap = Pixmap::new(width, height)
            .ok_or(CytoError::InvalidSurfaceSize { width, height })?;
        Ok(Surface {
            pixmap,
            logical_width: width,
            logical_height: height,
        })
    }

    /// Set both the logical and the physical size to the given values.
    ///
    /// Resizing reallocates the backing store, so the pixel contents reset
    /// to transparent. Zero dimensions are rounded up to one pixel.
    pub fn set_size(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if (width, height) == self.size() {
            return;
        }
        // Allocation only fails for absurd dimensions; keep the old buffer
        // in that case rather than losing the surface.
        match Pixmap::new(width, height) {
            Some(pixmap) => {
                self.pixmap = pixmap;
                self.logical_width = width;
                self.logical_height = height;
            }
            None => {
                eprintln!("Warning: cannot resize surface to {}x{}", width, height);
            }
        }
    }

    /// Current physical size.
    pub fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Logical (style) size; equals the physical size by invariant.
    pub fn logical_size(&self) -> (u32, u32) {
        (self.logical_width, self.logical_height)
    }

    /// Read access to the pixel buffer.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Write access to the pixel buffer.
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

/// Host-environment lookup that resolves surface ids to concrete surfaces.
///
/// The renderer takes ownership of its surface at construction; a surface
/// id can only be claimed once.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: FxHashMap<String, Surface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        SurfaceRegistry::default()
    }

    /// Register a surface under an id, replacing any previous entry.
    pub fn register(&mut self, id: impl Into<String>, surface: Surface) {
        self.surfaces.insert(id.into(), surface);
    }

    /// Claim the surface registered under `id`.
    pub fn take(&mut self, id: &str) -> Option<Surface> {
        self.surfaces.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }
}
