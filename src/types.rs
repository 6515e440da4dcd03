//! Core types for spark-code-field.
//!
//! Colors, border sides, spacing and the terminal cell the renderer draws.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Transparent color.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Composite this color over `dst` ("over" operator), returning an opaque color.
    ///
    /// Terminal default on either side is passed through untouched.
    pub fn over(self, dst: Self) -> Self {
        if self.is_terminal_default() || self.is_opaque() {
            return self;
        }
        if dst.is_terminal_default() {
            return self;
        }
        let a = self.a as i32;
        let mix = |s: i16, d: i16| ((s as i32 * a + d as i32 * (255 - a)) / 255) as u8;
        Self::rgb(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
    }

    /// Parse a hex color string (`#rgb`, `#rrggbb`, `#rrggbbaa`, `#` optional).
    ///
    /// ```
    /// use spark_code_field::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#f00"), Some(Rgba::rgb(255, 0, 0)));
    /// assert_eq!(Rgba::from_hex("ffffff33"), Some(Rgba::new(255, 255, 255, 0x33)));
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                let a = hex_byte(bytes, 6)?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse a CSS functional color: `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Alpha is a 0-1 float, as written by mobile style sheets.
    pub fn from_css_fn(s: &str) -> Option<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))?
            .strip_suffix(')')?;

        fn channel(p: &str) -> Option<u8> {
            p.parse().ok()
        }

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();

        match parts.as_slice() {
            [r, g, b] => Some(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let alpha: f32 = a.parse().ok()?;
                if !(0.0..=1.0).contains(&alpha) {
                    return None;
                }
                Some(Self::new(
                    channel(r)?,
                    channel(g)?,
                    channel(b)?,
                    (alpha * 255.0).round() as u8,
                ))
            }
            _ => None,
        }
    }

    /// Parse any supported color notation.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("default") {
            return Some(Self::TERMINAL_DEFAULT);
        }
        if input.starts_with("rgb") {
            return Self::from_css_fn(input);
        }
        Self::from_hex(input)
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 5;
    }
}

// =============================================================================
// Border sides (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which edges of a code cell carry a border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Sides: u8 {
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Terminal line sets used to draw cell borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    #[default]
    None = 0,
    /// ─ │ ┌ ┐ └ ┘
    Single = 1,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 3,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold = 4,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::None => (' ', ' ', ' ', ' ', ' ', ' '),
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            Self::Bold => ('━', '┃', '┏', '┓', '┛', '┗'),
        }
    }
}

// =============================================================================
// Spacing
// =============================================================================

/// Per-edge lengths (margins, paddings) in host units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Spacing {
    pub const ZERO: Self = Self { top: 0, right: 0, bottom: 0, left: 0 };

    /// Same length on every edge.
    pub const fn all(n: u16) -> Self {
        Self { top: n, right: n, bottom: n, left: n }
    }

    /// Only horizontal edges.
    pub const fn horizontal(left: u16, right: u16) -> Self {
        Self { top: 0, right, bottom: 0, left }
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_hex_forms() {
        assert_eq!(Rgba::from_hex("#abc"), Some(Rgba::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgba::from_hex("#00ff00"), Some(Rgba::GREEN));
        assert_eq!(Rgba::from_hex("#ff000080"), Some(Rgba::new(255, 0, 0, 0x80)));
        assert!(Rgba::from_hex("#12345").is_none());
    }

    #[test]
    fn test_rgba_from_css_fn() {
        assert_eq!(
            Rgba::from_css_fn("rgba(255, 255, 255, 0.2)"),
            Some(Rgba::new(255, 255, 255, 51))
        );
        assert_eq!(Rgba::from_css_fn("rgb(1,2,3)"), Some(Rgba::rgb(1, 2, 3)));
        assert!(Rgba::from_css_fn("rgba(255, 255, 255, 2)").is_none());
        assert!(Rgba::from_css_fn("rgba(300, 0, 0, 1)").is_none());
        assert!(Rgba::from_css_fn("hsl(0, 0, 0)").is_none());
    }

    #[test]
    fn test_rgba_parse_dispatch() {
        assert_eq!(Rgba::parse("default"), Some(Rgba::TERMINAL_DEFAULT));
        assert_eq!(Rgba::parse("rgba(0, 0, 0, 1)"), Some(Rgba::BLACK));
        assert_eq!(Rgba::parse("#fff"), Some(Rgba::WHITE));
        assert!(Rgba::parse("chartreuse").is_none());
    }

    #[test]
    fn test_rgba_over() {
        let half_white = Rgba::new(255, 255, 255, 128);
        let blended = half_white.over(Rgba::BLACK);
        assert!(blended.is_opaque());
        assert_eq!(blended.r, 128);

        assert_eq!(Rgba::RED.over(Rgba::BLACK), Rgba::RED);
        assert_eq!(half_white.over(Rgba::TERMINAL_DEFAULT), half_white);
    }

    #[test]
    fn test_sides_composites() {
        assert!(Sides::VERTICAL.contains(Sides::TOP | Sides::BOTTOM));
        assert!(!Sides::VERTICAL.contains(Sides::LEFT));
        assert_eq!(Sides::all(), Sides::VERTICAL | Sides::HORIZONTAL);
    }

    #[test]
    fn test_border_chars() {
        let (h, v, tl, _, _, _) = BorderStyle::Rounded.chars();
        assert_eq!((h, v, tl), ('─', '│', '╭'));
        assert_eq!(BorderStyle::None.chars().0, ' ');
    }
}
