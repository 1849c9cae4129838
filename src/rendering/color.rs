//! Color handling for the drawing surface.
//!
//! Paint attributes travel through the system as opaque string tokens
//! (a `ColorSpec`); nothing validates them at set time. This module is the
//! single place where a token is resolved into actual channel values, right
//! before it hits the rasterizer.

/// An opaque color token as accepted by the drawing surface.
///
/// Stored verbatim by the paint state; only parsed at paint time.
pub type ColorSpec = String;

/// A resolved RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create an opaque RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Create an RGBA color.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Opaque black, the fallback for unparseable tokens.
    pub fn black() -> Self {
        Color::rgb(0, 0, 0)
    }

    /// Opaque white.
    pub fn white() -> Self {
        Color::rgb(255, 255, 255)
    }

    /// Resolve a color token.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` (alpha 0.0-1.0), and a small set of named colors.
    /// Returns `None` for anything else.
    pub fn parse(token: &str) -> Option<Color> {
        let token = token.trim();
        if let Some(hex) = token.strip_prefix('#') {
            return Color::parse_hex(hex);
        }
        if let Some(body) = token
            .strip_prefix("rgba(")
            .or_else(|| token.strip_prefix("rgb("))
        {
            return Color::parse_rgb_func(body.strip_suffix(')')?);
        }
        Color::named(token)
    }

    /// Resolve a token, falling back to opaque black.
    ///
    /// The drawing surface never rejects a paint because of a bad token; it
    /// paints black instead, so a sketch typo is visible rather than silent.
    pub fn parse_or_black(token: &str) -> Color {
        match Color::parse(token) {
            Some(c) => c,
            None => {
                #[cfg(feature = "debug-logging")]
                eprintln!("DEBUG: unparseable color token '{}', painting black", token);
                Color::black()
            }
        }
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        let nibble = |b: u8| -> Option<u8> {
            match b {
                b'0'..=b'9' => Some(b - b'0'),
                b'a'..=b'f' => Some(b - b'a' + 10),
                b'A'..=b'F' => Some(b - b'A' + 10),
                _ => None,
            }
        };
        let bytes = hex.as_bytes();
        match bytes.len() {
            // #rgb expands each digit: #f0a -> #ff00aa
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Some(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 | 8 => {
                let byte = |i: usize| -> Option<u8> {
                    Some(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?)
                };
                let r = byte(0)?;
                let g = byte(2)?;
                let b = byte(4)?;
                let a = if bytes.len() == 8 { byte(6)? } else { 255 };
                Some(Color::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    fn parse_rgb_func(body: &str) -> Option<Color> {
        let mut parts = body.split(',').map(str::trim);
        let r: u8 = parts.next()?.parse().ok()?;
        let g: u8 = parts.next()?.parse().ok()?;
        let b: u8 = parts.next()?.parse().ok()?;
        let a = match parts.next() {
            Some(alpha) => {
                let alpha: f32 = alpha.parse().ok()?;
                (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
            }
            None => 255,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Color::rgba(r, g, b, a))
    }

    fn named(name: &str) -> Option<Color> {
        let color = match name {
            "black" => Color::rgb(0, 0, 0),
            "white" => Color::rgb(255, 255, 255),
            "red" => Color::rgb(255, 0, 0),
            "green" => Color::rgb(0, 128, 0),
            "lime" => Color::rgb(0, 255, 0),
            "blue" => Color::rgb(0, 0, 255),
            "yellow" => Color::rgb(255, 255, 0),
            "cyan" => Color::rgb(0, 255, 255),
            "magenta" => Color::rgb(255, 0, 255),
            "orange" => Color::rgb(255, 165, 0),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "transparent" => Color::rgba(0, 0, 0, 0),
            _ => return None,
        };
        Some(color)
    }

    /// Convert to the rasterizer's color type.
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}
