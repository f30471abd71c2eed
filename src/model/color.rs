use std::{fmt, str::FromStr};

use crate::error::ColorError;

/// A 24-bit RGB color, serialized as an integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    pub const MAX: u32 = 0xFF_FF_FF;
    pub const DEFAULT: Self = Self(0x85_CE_4B);

    pub const fn new(value: u32) -> Option<Self> {
        if value > Self::MAX {
            return None;
        }
        Some(Self(value))
    }

    pub const fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        Self((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn to_rgb(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parses `#RRGGBB`. The leading `#` is optional.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let input = input.trim();
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Format(input.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ColorError::Format(input.to_string()))
    }

    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Color {
    type Error = ColorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ColorError::Range(value))
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert_eq!(Color::from_hex("#85ce4b"), Ok(Color::DEFAULT));
        assert_eq!(Color::from_hex("85CE4B"), Ok(Color::DEFAULT));
        assert_eq!(Color::DEFAULT.to_hex(), "#85ce4b");
        assert_eq!(Color::from_rgb([0, 0, 1]).to_hex(), "#000001");

        for bad in ["", "#", "#85ce4", "#85ce4bb", "#zzzzzz", "+85ce4b"] {
            assert!(Color::from_hex(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn integer_range() {
        assert_eq!(serde_json::to_string(&Color::DEFAULT).unwrap(), "8769099");
        assert_eq!(
            serde_json::from_str::<Color>("16777215").unwrap(),
            Color::new(Color::MAX).unwrap()
        );
        assert!(serde_json::from_str::<Color>("16777216").is_err());
        assert!(serde_json::from_str::<Color>("-1").is_err());
    }

    #[test]
    fn rgb() {
        let color = Color::from_rgb([0x12, 0x34, 0x56]);
        assert_eq!(color.get(), 0x123456);
        assert_eq!(color.to_rgb(), [0x12, 0x34, 0x56]);
    }
}
