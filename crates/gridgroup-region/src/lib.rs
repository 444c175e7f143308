//! gridgroup-region - Connected-group search for gridgroup
//!
//! This crate provides the search engine that decomposes any
//! [`Grid`](gridgroup_core::Grid) into maximal connected groups of
//! mutually-equivalent values:
//!
//! - **Group search** - [`find_groups`] flood-fills every component and
//!   returns one [`Group`] per component in discovery order
//! - **Configuration** - [`GroupOptions`] controls connectivity, position
//!   retention, result limits, and rejected-neighbour policy, all scoped
//!   to a single call
//! - **Selection** - filtering a result by member count or bounding-box
//!   size
//!
//! # Examples
//!
//! ## Finding groups
//!
//! ```
//! use gridgroup_core::VecGrid;
//! use gridgroup_region::{find_groups, GroupOptions};
//!
//! let grid = VecGrid::from_rows(vec![
//!     vec![Some('a'), Some('a'), None],
//!     vec![Some('a'), None, None],
//!     vec![None, None, Some('b')],
//! ]).unwrap();
//!
//! let groups = find_groups(&grid, &GroupOptions::default()).unwrap();
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].positions_count(), 3);
//! assert_eq!(groups[1].positions_count(), 1);
//! ```
//!
//! ## Bounding boxes without membership lists
//!
//! ```
//! use gridgroup_core::VecGrid;
//! use gridgroup_region::{find_groups, GroupOptions};
//!
//! let grid = VecGrid::filled(100, 100, 1u8);
//! let options = GroupOptions::new().with_store_positions(false);
//!
//! let groups = find_groups(&grid, &options).unwrap();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].positions_count(), 10_000);
//! assert!(groups[0].positions().is_empty());
//! ```
//!
//! ## Capping the result count
//!
//! ```
//! use gridgroup_core::VecGrid;
//! use gridgroup_region::{find_groups, GroupError, GroupOptions};
//!
//! let mut grid = VecGrid::new(7, 1);
//! for x in [0u32, 2, 4, 6] {
//!     grid.set(x, 0, Some('x')).unwrap();
//! }
//!
//! let options = GroupOptions::new().with_limit_results(2);
//! let err = find_groups(&grid, &options).unwrap_err();
//! let GroupError::LimitExceeded { groups, .. } = err;
//! assert_eq!(groups.len(), 3); // up to and including the overflowing group
//! ```

pub mod conncomp;
pub mod error;
pub mod group;
pub mod options;
pub mod select;

// Re-export core types
pub use gridgroup_core;

pub use conncomp::find_groups;
pub use error::{GroupError, GroupResult};
pub use group::Group;
pub use options::{Connectivity, GroupOptions, RejectPolicy};
pub use select::{
    SizeSelectRelation, SizeSelectType, filter_groups_by_count, select_groups_by_size,
};
