//! gridgroup-image - Image-backed grids for gridgroup
//!
//! Bridges decoded RGBA images to the group search:
//!
//! - [`PixelGrid`] - a [`Grid`](gridgroup_core::Grid) over a borrowed
//!   image, with a pluggable pixel-to-value mapper
//! - [`find_color_groups`] - connected regions of identical color
//! - [`unpack_texture_atlas`] - sprite islands separated by transparency
//!   alone, regardless of color
//!
//! # Examples
//!
//! ## Unpacking a texture atlas
//!
//! ```
//! use gridgroup_image::{unpack_texture_atlas, DEFAULT_OPACITY_THRESHOLD};
//! use gridgroup_region::GroupOptions;
//! use image::{Rgba, RgbaImage};
//!
//! // Two opaque islands on a transparent 8x4 canvas.
//! let mut atlas = RgbaImage::new(8, 4);
//! for y in 0..2 {
//!     for x in 0..2 {
//!         atlas.put_pixel(x, y, Rgba([255, 0, 0, 255]));
//!         atlas.put_pixel(x + 5, y + 2, Rgba([0, 0, 255, 255]));
//!     }
//! }
//!
//! let sprites = unpack_texture_atlas(
//!     &atlas,
//!     DEFAULT_OPACITY_THRESHOLD,
//!     &GroupOptions::default(),
//! ).unwrap();
//!
//! assert_eq!(sprites.len(), 2);
//! let bounds = sprites[0].bounding_box();
//! assert_eq!((bounds.x, bounds.y, bounds.w, bounds.h), (0, 0, 1, 1));
//! ```

pub mod color;
pub mod grid;

// Re-export the search types callers need alongside the adapter
pub use gridgroup_region::{self, Group, GroupError, GroupOptions, GroupResult};

pub use grid::{DEFAULT_OPACITY_THRESHOLD, MASK_VALUE, PixelGrid, PixelMapper};

use gridgroup_region::find_groups;
use image::RgbaImage;

/// Find connected regions of identical color.
///
/// Pixels whose alpha is below `opacity_threshold` are holes; every other
/// pixel's value is its packed `0xRRGGBBAA` color, so two touching pixels
/// group together iff their channels match exactly.
///
/// # Errors
///
/// Returns [`GroupError::LimitExceeded`] under the same conditions as
/// [`find_groups`].
pub fn find_color_groups(
    image: &RgbaImage,
    opacity_threshold: u8,
    options: &GroupOptions,
) -> GroupResult<Vec<Group>> {
    let grid = PixelGrid::colors(image, opacity_threshold);
    find_groups(&grid, options)
}

/// Decompose a texture atlas into sprite islands.
///
/// Every opaque pixel maps to one constant value, so groups form along
/// transparency boundaries alone and each group's bounding box is one
/// sprite's extent, in discovery order.
///
/// # Errors
///
/// Returns [`GroupError::LimitExceeded`] under the same conditions as
/// [`find_groups`].
pub fn unpack_texture_atlas(
    image: &RgbaImage,
    opacity_threshold: u8,
    options: &GroupOptions,
) -> GroupResult<Vec<Group>> {
    let grid = PixelGrid::mask(image, opacity_threshold);
    find_groups(&grid, options)
}
