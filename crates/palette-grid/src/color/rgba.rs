//! 8-bit RGBA color
//!
//! [`Rgba`] is the storage type for palettes, raster pixels and rendered
//! output. It is also the only color type with a text form: palettes are
//! written as hex strings.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An 8-bit RGBA color in sRGB encoding.
///
/// Channel order is fixed (R, G, B, A). Alpha never takes part in distance
/// computations; it is carried through so rendered output can reproduce the
/// palette verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a color from four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    ///
    /// # Example
    /// ```
    /// use palette_grid::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// The color channels without alpha.
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The color channels as floats in 0.0..=255.0, the coordinates used by
    /// the bulk classifier.
    #[inline]
    pub fn rgb_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// All four channels as bytes.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Format as `#RRGGBB`, dropping alpha.
    ///
    /// # Example
    /// ```
    /// use palette_grid::Rgba;
    /// assert_eq!(Rgba::new(255, 0, 16, 128).to_hex_rgb(), "#FF0010");
    /// ```
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// The RGB channels packed as `0xRRGGBB`.
    #[inline]
    pub fn to_rgb_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            f.write_str(&self.to_hex_rgb())
        } else {
            f.write_str(&self.to_hex())
        }
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepted forms, with or without a leading `#`:
    /// - `RRGGBB` (alpha defaults to `FF`)
    /// - `RRGGBBAA`
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_grid::Rgba;
    ///
    /// let red: Rgba = "#FF0000".parse().unwrap();
    /// assert_eq!(red, Rgba::opaque(255, 0, 0));
    ///
    /// let translucent: Rgba = "00ff0080".parse().unwrap();
    /// assert_eq!(translucent.a, 0x80);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(c));
        }
        let bytes = digits.as_bytes();
        let channel = |i: usize| (hex_value(bytes[i]) << 4) | hex_value(bytes[i + 1]);

        match bytes.len() {
            6 => Ok(Self::new(channel(0), channel(2), channel(4), 255)),
            8 => Ok(Self::new(channel(0), channel(2), channel(4), channel(6))),
            n => Err(ParseColorError::InvalidLength(n)),
        }
    }
}

/// Value of one ASCII hex digit.
#[inline]
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
