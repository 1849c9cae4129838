use std::fmt;

/// Universal error type for cyto operations.
///
/// This error type covers everything that can go wrong during renderer
/// construction, painting, and sketch loading.
#[derive(Debug, Clone, PartialEq)]
pub enum CytoError {
    /// The renderer-type token is not recognized
    UnsupportedRenderer(String),

    /// The webgl backend is recognized but not implemented
    WebglNotSupported,

    /// The surface id did not resolve to a registered surface
    SurfaceNotFound(String),

    /// The pixel buffer for a surface could not be allocated
    InvalidSurfaceSize { width: u32, height: u32 },

    /// A paint operation failed
    RenderingError(String),

    /// Sketch loading failed
    LoadError(String),
}

impl fmt::Display for CytoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CytoError::UnsupportedRenderer(kind) => {
                write!(f, "Renderer type '{}' is not supported", kind)
            }
            CytoError::WebglNotSupported => {
                write!(f, "Sorry, webgl is not yet supported")
            }
            CytoError::SurfaceNotFound(id) => {
                write!(f, "No surface registered under id '{}'", id)
            }
            CytoError::InvalidSurfaceSize { width, height } => {
                write!(f, "Cannot allocate a {}x{} surface", width, height)
            }
            CytoError::RenderingError(msg) => {
                write!(f, "Rendering error: {}", msg)
            }
            CytoError::LoadError(msg) => {
                write!(f, "Sketch load error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CytoError {}

/// Result type alias for cyto operations
pub type CytoResult<T> = Result<T, CytoError>;
