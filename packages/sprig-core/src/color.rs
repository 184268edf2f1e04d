use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const PURPLE: Color = Color::rgb(160, 32, 240);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GRAY: Color = Color::rgb(190, 190, 190);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Looks up one of the named colors. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.trim().to_ascii_lowercase().as_str() {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "cyan" => Self::CYAN,
            "magenta" => Self::MAGENTA,
            "purple" => Self::PURPLE,
            "orange" => Self::ORANGE,
            "gray" | "grey" => Self::GRAY,
            _ => return None,
        };
        Some(color)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`, with or without the `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        let well_formed = matches!(digits.len(), 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit());
        if !well_formed {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| Self::from_hex(s))
            .ok_or_else(|| ShapeError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Anything a color setter accepts. String forms are validated; component
/// forms always succeed.
pub trait IntoColor {
    fn into_color(self) -> Result<Color, ShapeError>;
}

impl IntoColor for Color {
    fn into_color(self) -> Result<Color, ShapeError> {
        Ok(self)
    }
}

impl IntoColor for &str {
    fn into_color(self) -> Result<Color, ShapeError> {
        self.parse()
    }
}

impl IntoColor for String {
    fn into_color(self) -> Result<Color, ShapeError> {
        self.parse()
    }
}

impl IntoColor for &String {
    fn into_color(self) -> Result<Color, ShapeError> {
        self.parse()
    }
}

impl IntoColor for (u8, u8, u8) {
    fn into_color(self) -> Result<Color, ShapeError> {
        Ok(Color::rgb(self.0, self.1, self.2))
    }
}

impl IntoColor for (u8, u8, u8, u8) {
    fn into_color(self) -> Result<Color, ShapeError> {
        Ok(Color::rgba(self.0, self.1, self.2, self.3))
    }
}

impl IntoColor for [u8; 3] {
    fn into_color(self) -> Result<Color, ShapeError> {
        Ok(Color::rgb(self[0], self[1], self[2]))
    }
}

impl IntoColor for [u8; 4] {
    fn into_color(self) -> Result<Color, ShapeError> {
        Ok(Color::rgba(self[0], self[1], self[2], self[3]))
    }
}
