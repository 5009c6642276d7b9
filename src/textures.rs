//! Owned pixel buffers handed to the texture consumer.
//!
//! Both the reaction-diffusion engine and the gradient builder produce a
//! [`TextureData`]: tightly packed 8-bit pixels plus the dimensions needed to
//! upload them. RGB data can be expanded to RGBA for APIs that have no
//! three-channel format, and any texture can be written to or read from disk.
//!
//! # Supported Formats
//!
//! - PNG (recommended)
//! - JPEG (import only)

use crate::error::TextureError;
use std::path::Path;

/// Pixel layout of a [`TextureData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// Three bytes per pixel (default).
    #[default]
    Rgb8,
    /// Four bytes per pixel.
    Rgba8,
}

impl PixelFormat {
    /// Number of bytes per pixel.
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// A tightly packed 8-bit texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    /// Raw pixel data (`width * height * channels` bytes).
    pub data: Vec<u8>,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Layout of `data`.
    pub format: PixelFormat,
}

impl TextureData {
    fn new(data: Vec<u8>, width: u32, height: u32, format: PixelFormat) -> Result<Self, TextureError> {
        let expected = width as usize * height as usize * format.channels();
        if data.len() != expected {
            return Err(TextureError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Wrap raw RGB data (3 bytes per pixel).
    ///
    /// # Example
    ///
    /// ```
    /// use orrery::textures::TextureData;
    ///
    /// let tex = TextureData::from_rgb(vec![255; 2 * 2 * 3], 2, 2).unwrap();
    /// assert_eq!(tex.pixel_count(), 4);
    /// ```
    pub fn from_rgb(data: Vec<u8>, width: u32, height: u32) -> Result<Self, TextureError> {
        Self::new(data, width, height, PixelFormat::Rgb8)
    }

    /// Wrap raw RGBA data (4 bytes per pixel).
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, TextureError> {
        Self::new(data, width, height, PixelFormat::Rgba8)
    }

    /// Load a texture from an image file as RGB.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let img = image::open(path.as_ref())?.into_rgb8();
        let (width, height) = img.dimensions();
        Self::from_rgb(img.into_raw(), width, height)
    }

    /// Number of pixels in the texture.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixel at linear index `i`, or `None` if out of range.
    pub fn pixel(&self, i: usize) -> Option<&[u8]> {
        let c = self.format.channels();
        self.data.get(i * c..(i + 1) * c)
    }

    /// Expand to RGBA with an opaque alpha channel.
    ///
    /// Already-RGBA textures are returned unchanged.
    pub fn to_rgba(&self) -> TextureData {
        match self.format {
            PixelFormat::Rgba8 => self.clone(),
            PixelFormat::Rgb8 => {
                let mut data = Vec::with_capacity(self.pixel_count() * 4);
                for px in self.data.chunks_exact(3) {
                    data.extend_from_slice(px);
                    data.push(255);
                }
                TextureData {
                    data,
                    width: self.width,
                    height: self.height,
                    format: PixelFormat::Rgba8,
                }
            }
        }
    }

    /// Write the texture to disk. The image format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TextureError> {
        let color = match self.format {
            PixelFormat::Rgb8 => image::ExtendedColorType::Rgb8,
            PixelFormat::Rgba8 => image::ExtendedColorType::Rgba8,
        };
        image::save_buffer(path.as_ref(), &self.data, self.width, self.height, color)?;
        log::debug!(
            "Saved {}x{} texture to {}",
            self.width,
            self.height,
            path.as_ref().display()
        );
        Ok(())
    }
}
