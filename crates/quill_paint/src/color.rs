//! Color types and utilities

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const GREEN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    pub const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Parse a CSS color string (`"blue"`, `"#FFD700a5"`, `"rgb(...)"`).
    ///
    /// Malformed strings do not fail; they yield [`Color::TRANSPARENT`] so
    /// bad input degrades to an invisible shape rather than a crash.
    pub fn parse(s: &str) -> Self {
        match csscolorparser::parse(s) {
            Ok(c) => Self::new(c.r, c.g, c.b, c.a),
            Err(err) => {
                tracing::warn!(color = s, %err, "unparseable color, using transparent");
                Self::TRANSPARENT
            }
        }
    }

    /// Whether the color is fully transparent
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::parse(s)
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.0), Color::RED);
        assert_eq!(Color::rgb(0.2, 0.4, 0.6), Color::new(0.2, 0.4, 0.6, 1.0));
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(Color::parse("blue"), Color::BLUE);
        assert_eq!(Color::parse("black"), Color::BLACK);
        assert_eq!(Color::parse("transparent"), Color::TRANSPARENT);
    }

    #[test]
    fn parses_hex_with_alpha() {
        let gold = Color::parse("#FFD700a5");
        assert_eq!(gold, Color::from_rgba8(0xFF, 0xD7, 0x00, 0xA5));
    }

    #[test]
    fn garbage_degrades_to_transparent() {
        let c = Color::parse("not a color");
        assert_eq!(c, Color::TRANSPARENT);
        assert!(c.is_transparent());
    }

    #[test]
    fn into_color_from_str() {
        let c: Color = "green".into();
        assert_eq!(c, Color::from_rgba8(0, 128, 0, 255));
    }
}
