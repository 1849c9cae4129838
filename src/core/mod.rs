pub mod error;

pub use error::{CytoError, CytoResult};
