//! CSS color values produced by the mood color functions.

use std::fmt;

/// A fill or shadow color, rendered to a CSS color string for the 2D canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// `hsla(h, s%, l%, a)`; saturation and lightness are percentages.
    Hsla { h: f64, s: f64, l: f64, a: f64 },
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Literal CSS color such as `#b2f5ea`.
    Named(&'static str),
}

impl Color {
    pub const fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Alpha component; named colors are treated as opaque.
    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Hsla { a, .. } | Color::Rgba { a, .. } => a,
            Color::Named(_) => 1.0,
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsla { h, s, l, a } => write!(f, "hsla({}, {}%, {}%, {})", h, s, l, a),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({},{},{},{})", r, g, b, a),
            Color::Named(name) => f.write_str(name),
        }
    }
}

/// Shadow blur applied around a filled shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blur: f64,
}
