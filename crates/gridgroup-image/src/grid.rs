//! Image-backed grid adapter
//!
//! Wraps a decoded RGBA image as a [`Grid`] whose cell values are packed
//! pixel encodings. A pixel whose alpha lies below the opacity threshold
//! is a hole; everything else maps to a `u32` value through a
//! caller-overridable pixel mapper. Decoding pixel buffers is the host's
//! job: this adapter only reads an [`RgbaImage`] it borrows.

use crate::color::compose_rgba;
use gridgroup_core::Grid;
use image::{Rgba, RgbaImage};

/// Alpha below this value marks a pixel as a hole when callers have no
/// reason to pick their own threshold.
pub const DEFAULT_OPACITY_THRESHOLD: u8 = 10;

/// The single value every opaque pixel collapses to in mask mode.
pub const MASK_VALUE: u32 = 1;

/// Pixel-to-value mapping used by the [`PixelGrid`] constructors.
pub type PixelMapper = fn(Rgba<u8>) -> u32;

/// Pack a pixel's channels as `0xRRGGBBAA`.
fn color_value(pixel: Rgba<u8>) -> u32 {
    let [r, g, b, a] = pixel.0;
    compose_rgba(r, g, b, a)
}

/// Collapse every opaque pixel to [`MASK_VALUE`].
fn mask_value(_pixel: Rgba<u8>) -> u32 {
    MASK_VALUE
}

/// A [`Grid`] over a borrowed RGBA image.
///
/// Equivalence is exact value equality, so what "same group" means is
/// decided entirely by the mapper: the color mapper keeps distinct
/// colors apart, the mask mapper joins every opaque pixel, and a custom
/// mapper can quantize however it likes.
#[derive(Debug, Clone, Copy)]
pub struct PixelGrid<'a, F = PixelMapper> {
    image: &'a RgbaImage,
    opacity_threshold: u8,
    mapper: F,
}

impl<'a> PixelGrid<'a, PixelMapper> {
    /// Grid whose values are the pixel colors, packed `0xRRGGBBAA`.
    pub fn colors(image: &'a RgbaImage, opacity_threshold: u8) -> Self {
        Self {
            image,
            opacity_threshold,
            mapper: color_value,
        }
    }

    /// Grid where every opaque pixel carries the same value, so groups
    /// form along transparency boundaries alone.
    pub fn mask(image: &'a RgbaImage, opacity_threshold: u8) -> Self {
        Self {
            image,
            opacity_threshold,
            mapper: mask_value,
        }
    }
}

impl<'a, F: Fn(Rgba<u8>) -> u32> PixelGrid<'a, F> {
    /// Grid with a caller-supplied pixel mapper.
    ///
    /// The mapper only sees pixels that passed the opacity threshold.
    pub fn with_mapper(image: &'a RgbaImage, opacity_threshold: u8, mapper: F) -> Self {
        Self {
            image,
            opacity_threshold,
            mapper,
        }
    }
}

impl<F: Fn(Rgba<u8>) -> u32> Grid for PixelGrid<'_, F> {
    type Value = u32;

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn value_at(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x as u32 >= self.image.width() || y as u32 >= self.image.height() {
            return None;
        }
        let pixel = *self.image.get_pixel(x as u32, y as u32);
        if pixel.0[3] < self.opacity_threshold {
            return None;
        }
        Some((self.mapper)(pixel))
    }

    fn equivalent(&self, a: &u32, b: &u32) -> bool {
        a == b
    }
}
