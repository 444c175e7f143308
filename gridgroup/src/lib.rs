//! Gridgroup - Connected-group decomposition of grids and images
//!
//! Gridgroup partitions a two-dimensional grid of comparable values into
//! maximal connected groups separated by holes. Its canonical use is
//! decomposing a texture atlas into sprite bounding boxes or segmenting
//! an image into same-color regions, but the search is grid-agnostic:
//! anything implementing the [`Grid`] contract can be decomposed.
//!
//! # Overview
//!
//! - [`Grid`] / [`VecGrid`] - the capability contract and a dense
//!   ready-made implementation
//! - [`region`] - the search engine: `find_groups`, options, selection
//! - [`image`] - image-backed grids: `find_color_groups`,
//!   `unpack_texture_atlas`
//!
//! # Example
//!
//! ```
//! use gridgroup::region::{find_groups, GroupOptions};
//! use gridgroup::VecGrid;
//!
//! let grid = VecGrid::from_rows(vec![
//!     vec![Some("sea"), Some("sea"), None],
//!     vec![None, Some("sea"), Some("sea")],
//! ]).unwrap();
//!
//! let groups = find_groups(&grid, &GroupOptions::default()).unwrap();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].positions_count(), 4);
//! ```

// Re-export core types (grid contract and geometry used everywhere)
pub use gridgroup_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gridgroup_image as image;
pub use gridgroup_region as region;
