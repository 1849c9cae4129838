//! Deferred path construction.
//!
//! Paths are built incrementally from move, line, and quadratic-curve
//! segments and lowered to a rasterizer path only when a paint is issued.
//! The same accumulated path can therefore be filled and then stroked
//! without rebuilding it.

use std::fmt;

use smallvec::SmallVec;

/// A single path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Move to a new point (starts a new subpath)
    MoveTo(f32, f32),
    /// Line to a point
    LineTo(f32, f32),
    /// Quadratic Bézier curve (cx, cy, x, y)
    QuadTo(f32, f32, f32, f32),
    /// Close the current subpath
    Close,
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::MoveTo(x, y) => write!(f, "M {} {}", x, y),
            PathElement::LineTo(x, y) => write!(f, "L {} {}", x, y),
            PathElement::QuadTo(cx, cy, x, y) => write!(f, "Q {} {} {} {}", cx, cy, x, y),
            PathElement::Close => write!(f, "Z"),
        }
    }
}

/// An incrementally built path.
///
/// Most sketch paths are a handful of segments, so elements are stored
/// inline up to a small fixed capacity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    elements: SmallVec<[PathElement; 16]>,

    /// Current point (if any)
    current_point: Option<(f32, f32)>,

    /// Start of the current subpath (for close operations)
    subpath_start: Option<(f32, f32)>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Path::default()
    }

    /// Begin a new path, clearing any existing elements.
    pub fn begin(&mut self) {
        self.elements.clear();
        self.current_point = None;
        self.subpath_start = None;
    }

    /// Move to a new point, starting a new subpath.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.elements.push(PathElement::MoveTo(x, y));
        self.current_point = Some((x, y));
        self.subpath_start = Some((x, y));
    }

    /// Add a line segment from the current point to (x, y).
    ///
    /// A segment appended with no current point performs an implicit move
    /// instead, so a sketch that forgets the leading `move_to` still draws.
    pub fn line_to(&mut self, x: f32, y: f32) {
        if self.current_point.is_none() {
            self.move_to(x, y);
            return;
        }
        self.elements.push(PathElement::LineTo(x, y));
        self.current_point = Some((x, y));
    }

    /// Add a quadratic Bézier curve with control point (cx, cy) ending at (x, y).
    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        if self.current_point.is_none() {
            self.move_to(cx, cy);
        }
        self.elements.push(PathElement::QuadTo(cx, cy, x, y));
        self.current_point = Some((x, y));
    }

    /// Close the current subpath, returning to its start point.
    pub fn close(&mut self) {
        if self.subpath_start.is_none() {
            return;
        }
        self.elements.push(PathElement::Close);
        self.current_point = self.subpath_start;
    }

    /// Get the current point.
    pub fn current_point(&self) -> Option<(f32, f32)> {
        self.current_point
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements in the path.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Lower to a rasterizer path.
    ///
    /// Returns `None` when the path has no paintable area (empty, or a lone
    /// move), which callers treat as "nothing to paint".
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        if self.elements.is_empty() {
            return None;
        }
        let mut builder = tiny_skia::PathBuilder::new();
        for el in &self.elements {
            match *el {
                PathElement::MoveTo(x, y) => builder.move_to(x, y),
                PathElement::LineTo(x, y) => builder.line_to(x, y),
                PathElement::QuadTo(cx, cy, x, y) => builder.quad_to(cx, cy, x, y),
                PathElement::Close => builder.close(),
            }
        }
        builder.finish()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for el in &self.elements {
            write!(f, "{} ", el)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(path.to_skia().is_none());
    }

    #[test]
    fn test_move_to() {
        let mut path = Path::new();
        path.move_to(10.0, 20.0);
        assert_eq!(path.current_point(), Some((10.0, 20.0)));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_line_to() {
        let mut path = Path::new();
        path.move_to(10.0, 20.0);
        path.line_to(30.0, 40.0);
        assert_eq!(path.current_point(), Some((30.0, 40.0)));
        assert_eq!(path.len(), 2);
        assert!(path.to_skia().is_some());
    }

    #[test]
    fn test_quad_to() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.quad_to(5.0, 10.0, 10.0, 0.0);
        assert_eq!(path.current_point(), Some((10.0, 0.0)));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_close_returns_to_start() {
        let mut path = Path::new();
        path.move_to(10.0, 20.0);
        path.line_to(30.0, 40.0);
        path.close();
        assert_eq!(path.current_point(), Some((10.0, 20.0)));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_close_without_subpath() {
        let mut path = Path::new();
        path.close();
        assert!(path.is_empty());
    }

    #[test]
    fn test_implicit_move_to() {
        let mut path = Path::new();
        path.line_to(30.0, 40.0);
        assert_eq!(path.current_point(), Some((30.0, 40.0)));
        assert_eq!(path.elements()[0], PathElement::MoveTo(30.0, 40.0));
    }

    #[test]
    fn test_begin_clears() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0);
        path.line_to(2.0, 2.0);
        path.begin();
        assert!(path.is_empty());
        assert_eq!(path.current_point(), None);
    }

    #[test]
    fn test_display() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(10.0, 0.0);
        path.close();
        assert_eq!(path.to_string(), "M 0 0 L 10 0 Z ");
    }
}
