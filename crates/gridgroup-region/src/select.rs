//! Group selection by size
//!
//! Helpers for narrowing a search result by member count or bounding-box
//! dimensions. Typical use: dropping one-pixel noise islands after
//! unpacking a texture atlas.

use crate::group::Group;

/// Selection type for group filtering by bounding box dimensions.
///
/// Determines how width and height thresholds are combined when deciding
/// whether to keep a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSelectType {
    /// Select if BOTH width and height satisfy the relation
    IfBoth,
    /// Select if EITHER width or height satisfies the relation
    IfEither,
}

/// Selection relation for group filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSelectRelation {
    /// Select if greater than or equal to threshold
    Gte,
    /// Select if less than or equal to threshold
    Lte,
}

/// Select groups whose bounding box dimensions satisfy a size constraint.
///
/// Thresholds compare against the box's coordinate spans, so a group
/// occupying a single row has height 0.
pub fn select_groups_by_size(
    groups: Vec<Group>,
    width_thresh: i32,
    height_thresh: i32,
    select_type: SizeSelectType,
    relation: SizeSelectRelation,
) -> Vec<Group> {
    groups
        .into_iter()
        .filter(|group| {
            let b = group.bounding_box();
            let (w_ok, h_ok) = match relation {
                SizeSelectRelation::Gte => (b.w >= width_thresh, b.h >= height_thresh),
                SizeSelectRelation::Lte => (b.w <= width_thresh, b.h <= height_thresh),
            };
            match select_type {
                SizeSelectType::IfBoth => w_ok && h_ok,
                SizeSelectType::IfEither => w_ok || h_ok,
            }
        })
        .collect()
}

/// Keep only groups whose member count lies in `[min_count, max_count]`.
///
/// A `max_count` of 0 means no upper bound.
pub fn filter_groups_by_count(groups: Vec<Group>, min_count: u32, max_count: u32) -> Vec<Group> {
    groups
        .into_iter()
        .filter(|group| {
            let n = group.positions_count();
            n >= min_count && (max_count == 0 || n <= max_count)
        })
        .collect()
}
