use std::{fmt, str::FromStr};

use crate::foundation::error::ChoyenError;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque white, the default banner background.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `r, g, b` order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels widened to `f64` for interpolation.
    pub fn to_f64(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Look up a CSS color keyword.
    ///
    /// Only the keywords the banner palettes and backgrounds use are known.
    pub fn named(name: &str) -> Option<Self> {
        let c = match name.to_ascii_lowercase().as_str() {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "red" => Self::new(255, 0, 0),
            "yellow" => Self::new(255, 255, 0),
            "green" => Self::new(0, 128, 0),
            "blue" => Self::new(0, 0, 255),
            "violet" => Self::new(238, 130, 238),
            "gold" => Self::new(255, 215, 0),
            "silver" => Self::new(192, 192, 192),
            "gray" | "grey" => Self::new(128, 128, 128),
            "navy" => Self::new(0, 0, 128),
            _ => return None,
        };
        Some(c)
    }
}

impl FromStr for Rgb8 {
    type Err = ChoyenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let digits: Vec<u8> = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8))
                .collect::<Option<_>>()
                .ok_or_else(|| ChoyenError::validation(format!("invalid hex color '{s}'")))?;
            return match digits.as_slice() {
                [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
                [r1, r0, g1, g0, b1, b0] => {
                    Ok(Self::new(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
                }
                _ => Err(ChoyenError::validation(format!(
                    "hex color '{s}' must have 3 or 6 digits"
                ))),
            };
        }
        Self::named(s).ok_or_else(|| ChoyenError::validation(format!("unknown color '{s}'")))
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = ChoyenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Bounding box of visible pixels, with exclusive `right` and `bottom` edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentBounds {
    /// First column containing content.
    pub left: u32,
    /// First row containing content.
    pub top: u32,
    /// One past the last column containing content.
    pub right: u32,
    /// One past the last row containing content.
    pub bottom: u32,
}

impl ContentBounds {
    /// Width of the box in pixels.
    pub fn width(self) -> u32 {
        self.right - self.left
    }

    /// Height of the box in pixels.
    pub fn height(self) -> u32 {
        self.bottom - self.top
    }

    /// Bounds of the nonzero entries in a row-major `width`-wide 8-bit plane.
    pub fn of_plane(plane: impl Iterator<Item = u8>, width: u32) -> Option<Self> {
        if width == 0 {
            return None;
        }
        let mut found: Option<Self> = None;
        for (i, v) in plane.enumerate() {
            if v == 0 {
                continue;
            }
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            found = Some(match found {
                None => Self {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                },
                Some(b) => Self {
                    left: b.left.min(x),
                    top: b.top.min(y),
                    right: b.right.max(x + 1),
                    bottom: b.bottom.max(y + 1),
                },
            });
        }
        found
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
