use serde::Serialize;

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const CLEAR: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Parse a hex color string.  Never fails; see [`hex_to_rgba`] for the
    /// accepted shapes and the opaque-black fallback.
    pub fn from_hex(hex: &str) -> Self {
        let (r, g, b, a) = hex_to_rgba(hex);
        Self::from_rgba8(r, g, b, a)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Return a copy with alpha multiplied by `opacity`.  The factor is not
    /// clamped; out-of-range style values pass straight through.
    #[inline]
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.a *= opacity;
        self
    }
}

/// Parse a hex color into `(r, g, b, a)` bytes.
///
/// Every non-alphanumeric character is removed first (so `"#FF0000"` and
/// `"FF-00-00"` both work), then the leading hex digits are read as a number.
/// The *character count* of the cleaned string picks the layout:
///
/// | count | layout   | example      |
/// |-------|----------|--------------|
/// | 3     | `RGB`    | `F80` → `FF8800` |
/// | 6     | `RRGGBB` | alpha = 255  |
/// | 8     | `AARRGGBB` | alpha first |
///
/// Any other count yields opaque black.
pub fn hex_to_rgba(hex: &str) -> (u8, u8, u8, u8) {
    let digits: String = hex.chars().filter(|c| c.is_alphanumeric()).collect();
    let value = scan_hex(&digits);
    let byte = |shift: u32| ((value >> shift) & 0xFF) as u8;
    let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 17;

    match digits.chars().count() {
        3 => (nibble(8), nibble(4), nibble(0), 255),
        6 => (byte(16), byte(8), byte(0), 255),
        8 => (byte(16), byte(8), byte(0), byte(24)),
        _ => (0, 0, 0, 255),
    }
}

/// Read the leading run of hex digits (after an optional `0x`), stopping at
/// the first non-digit.  No digits reads as zero.
fn scan_hex(s: &str) -> u64 {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()))
        .unwrap_or(s);

    digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u64, |acc, d| acc.wrapping_mul(16).wrapping_add(u64::from(d)))
}
