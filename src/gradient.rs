//! Color ramp textures.
//!
//! A [`Gradient`] turns a short list of color stops into a one-pixel-wide
//! lookup texture. Planet shaders index it by surface elevation, so stop 0
//! colors the lowest terrain and the last stop the highest.
//!
//! # Example
//!
//! ```
//! use orrery::gradient::Gradient;
//!
//! let gradient = Gradient::from_hex(&["#000000", "#ffffff"]).unwrap();
//! let tex = gradient.to_texture(4).unwrap();
//! assert_eq!((tex.width, tex.height), (1, 4));
//! ```

use crate::error::ConfigError;
use crate::textures::{PixelFormat, TextureData};

/// Rows generated per color stop by [`Gradient::texture`].
pub const ROWS_PER_STOP: u32 = 20;

/// Default planet colors from deep water to mountain tops.
pub const PLANET_COLORS: [&str; 5] = ["#130c8c", "#0d1faa", "#19680e", "#a79300", "#caa62f"];

/// An ordered list of at least two RGB color stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    stops: Vec<[u8; 3]>,
}

impl Gradient {
    /// Create a gradient from RGB stops.
    pub fn new(stops: Vec<[u8; 3]>) -> Result<Self, ConfigError> {
        if stops.len() < 2 {
            return Err(ConfigError::InvalidParameter {
                name: "gradient stops",
                value: stops.len() as f64,
            });
        }
        Ok(Self { stops })
    }

    /// Create a gradient from `#rrggbb` strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, ConfigError> {
        let stops = colors
            .iter()
            .map(|c| parse_hex(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stops)
    }

    /// The default five-stop planet gradient.
    pub fn planet_default() -> Self {
        Self {
            stops: vec![
                [0x13, 0x0c, 0x8c],
                [0x0d, 0x1f, 0xaa],
                [0x19, 0x68, 0x0e],
                [0xa7, 0x93, 0x00],
                [0xca, 0xa6, 0x2f],
            ],
        }
    }

    pub fn stops(&self) -> &[[u8; 3]] {
        &self.stops
    }

    /// Build a `1 x height` RGB texture.
    ///
    /// Rows are split evenly between consecutive stop pairs; within a
    /// segment the color is interpolated from the lower stop towards the
    /// upper one, reaching it at the first row of the next segment. The
    /// final segment stretches so the last row is exactly the last stop.
    pub fn to_texture(&self, height: u32) -> Result<TextureData, ConfigError> {
        if height == 0 {
            return Err(ConfigError::InvalidDimensions { width: 1, height });
        }
        Ok(self.build(height))
    }

    /// Texture with [`ROWS_PER_STOP`] rows per stop.
    pub fn texture(&self) -> TextureData {
        self.build(self.stops.len() as u32 * ROWS_PER_STOP)
    }

    fn build(&self, height: u32) -> TextureData {
        let segments = self.stops.len() - 1;
        let h = height as usize;
        let mut data = vec![0u8; h * 3];

        for (i, pair) in self.stops.windows(2).enumerate() {
            let lower = i * h / segments;
            let upper = (i + 1) * h / segments;
            let span = if i + 1 == segments {
                (upper - lower).saturating_sub(1).max(1)
            } else {
                upper - lower
            };
            for row in lower..upper {
                let t = (row - lower) as f32 / span as f32;
                for c in 0..3 {
                    data[row * 3 + c] = lerp_u8(pair[0][c], pair[1][c], t);
                }
            }
        }

        TextureData {
            data,
            width: 1,
            height,
            format: PixelFormat::Rgb8,
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::planet_default()
    }
}

/// Parse a `#rrggbb` color (the leading `#` is optional).
pub fn parse_hex(color: &str) -> Result<[u8; 3], ConfigError> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ConfigError::InvalidColor(color.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ConfigError::InvalidColor(color.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Format an RGB color as `#rrggbb`.
pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let a = a as f32;
    let b = b as f32;
    (a + (b - a) * t).round() as u8
}
