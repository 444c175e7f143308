//! Connected-group search
//!
//! Scans a grid in a fixed deterministic order and launches one flood
//! fill per unvisited valued cell, producing one [`Group`] per connected
//! component.
//!
//! The fill runs on an explicit work-list rather than recursion, so a
//! fully-connected grid of any size completes without stack growth. A
//! dense boolean array doubles as the visited set, giving O(1) membership
//! with no per-lookup allocation.

use crate::error::{GroupError, GroupResult};
use crate::group::Group;
use crate::options::{Connectivity, GroupOptions, RejectPolicy};
use gridgroup_core::{Grid, Point};
use log::debug;

/// Find all connected groups of mutually-equivalent values in a grid.
///
/// The grid is scanned column-major (ascending x, then ascending y);
/// the returned groups are ordered by the discovery of their seed cell,
/// and each group's positions are in fill visitation order.
///
/// A cell joins the group currently being filled iff it is in bounds,
/// not yet visited, holds a value, and that value is equivalent to the
/// value of the *seed* cell. Equivalence is never chained through
/// intermediate members, so a run of pairwise-equivalent but not
/// mutually-equivalent values splits at the first cell that fails
/// against the seed.
///
/// What happens to a touched cell that fails the seed test is governed
/// by [`RejectPolicy`]; see [`GroupOptions`] for this and the other
/// switches.
///
/// # Errors
///
/// Returns [`GroupError::LimitExceeded`] when `options.limit_results`
/// is non-zero and more groups than that are discovered. The error
/// carries every group found up to and including the overflowing one.
///
/// # Examples
///
/// ```
/// use gridgroup_core::VecGrid;
/// use gridgroup_region::{find_groups, GroupOptions};
///
/// let grid = VecGrid::from_rows(vec![
///     vec![Some('a'), None, Some('b')],
///     vec![Some('a'), None, Some('b')],
/// ]).unwrap();
///
/// let groups = find_groups(&grid, &GroupOptions::default()).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].positions_count(), 2);
/// ```
pub fn find_groups<G: Grid>(grid: &G, options: &GroupOptions) -> GroupResult<Vec<Group>> {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut groups = Vec::new();

    if width == 0 || height == 0 {
        return Ok(groups);
    }

    // Visited cells, indexed y * width + x. Scoped to this call.
    let mut visited = vec![false; width * height];
    // Fill frontier, reused across fills.
    let mut frontier: Vec<Point> = Vec::new();

    for x in 0..width {
        for y in 0..height {
            if visited[y * width + x] {
                continue;
            }
            let seed = Point::new(x as i32, y as i32);
            let Some(seed_value) = grid.value_at(seed.x, seed.y) else {
                continue;
            };

            visited[y * width + x] = true;
            let group = flood_fill(grid, seed, &seed_value, &mut visited, &mut frontier, options);
            groups.push(group);

            if options.limit_results > 0 && groups.len() > options.limit_results as usize {
                debug!(
                    "group limit {} exceeded at seed {}",
                    options.limit_results, seed
                );
                return Err(GroupError::LimitExceeded {
                    limit: options.limit_results,
                    groups,
                });
            }
        }
    }

    debug!("{} groups in {}x{} grid", groups.len(), width, height);
    Ok(groups)
}

/// Expand one group outward from `seed` until the frontier is empty.
///
/// Every in-bounds cell the fill touches is resolved exactly once:
/// accepted members and holes are marked visited unconditionally,
/// mismatched values according to the rejection policy.
fn flood_fill<G: Grid>(
    grid: &G,
    seed: Point,
    seed_value: &G::Value,
    visited: &mut [bool],
    frontier: &mut Vec<Point>,
    options: &GroupOptions,
) -> Group {
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    let mut group = Group::new();
    group.record(seed, options.store_positions);

    frontier.clear();
    frontier.push(seed);

    while let Some(p) = frontier.pop() {
        let n4;
        let n8;
        let neighbors: &[Point] = match options.connectivity {
            Connectivity::FourWay => {
                n4 = p.neighbors_4();
                &n4
            }
            Connectivity::EightWay => {
                n8 = p.neighbors_8();
                &n8
            }
        };

        for &n in neighbors {
            if n.x < 0 || n.y < 0 || n.x >= width || n.y >= height {
                continue;
            }
            let idx = n.y as usize * width as usize + n.x as usize;
            if visited[idx] {
                continue;
            }
            match grid.value_at(n.x, n.y) {
                None => {
                    // A touched hole is never re-tested.
                    visited[idx] = true;
                }
                Some(value) => {
                    if grid.equivalent(&value, seed_value) {
                        visited[idx] = true;
                        group.record(n, options.store_positions);
                        frontier.push(n);
                    } else if options.reject_policy == RejectPolicy::MarkVisited {
                        visited[idx] = true;
                    }
                }
            }
        }
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridgroup_core::{Box, VecGrid};

    fn grid_from_strs(rows: &[&str]) -> VecGrid<char> {
        VecGrid::from_rows(
            rows.iter()
                .map(|row| {
                    row.chars()
                        .map(|c| if c == '.' { None } else { Some(c) })
                        .collect()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_uniform_grid_is_one_group() {
        let grid = VecGrid::filled(3, 3, 'a');
        let groups = find_groups(&grid, &GroupOptions::default()).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].positions_count(), 9);
        assert_eq!(groups[0].positions().len(), 9);
        assert_eq!(groups[0].bounding_box(), Box::new_unchecked(0, 0, 2, 2));
    }

    #[test]
    fn test_hole_splits_a_row() {
        // A hole between two equal cells keeps them apart.
        let grid = grid_from_strs(&["a.a"]);
        let groups = find_groups(&grid, &GroupOptions::default()).unwrap();

        assert_eq!(groups.len(), 2);
        for g in &groups {
            assert_eq!(g.positions_count(), 1);
        }
        assert_eq!(groups[0].top_left(), Point::new(0, 0));
        assert_eq!(groups[1].top_left(), Point::new(2, 0));
    }

    #[test]
    fn test_checkerboard_connectivity() {
        // 2x2 checkerboard: no orthogonal matches, two diagonal pairs.
        let grid = grid_from_strs(&["ab", "ba"]);

        let four = find_groups(
            &grid,
            &GroupOptions::new().with_connectivity(Connectivity::FourWay),
        )
        .unwrap();
        assert_eq!(four.len(), 4);
        assert!(four.iter().all(|g| g.positions_count() == 1));

        let eight = find_groups(
            &grid,
            &GroupOptions::new().with_connectivity(Connectivity::EightWay),
        )
        .unwrap();
        assert_eq!(eight.len(), 2);
        assert!(eight.iter().all(|g| g.positions_count() == 2));
        // Both diagonal pairs span the full square.
        assert_eq!(eight[0].bounding_box(), Box::new_unchecked(0, 0, 1, 1));
        assert_eq!(eight[1].bounding_box(), Box::new_unchecked(0, 0, 1, 1));
    }

    #[test]
    fn test_discovery_order_is_column_major() {
        let grid = grid_from_strs(&[".b", "a."]);
        let groups = find_groups(
            &grid,
            &GroupOptions::new().with_connectivity(Connectivity::FourWay),
        )
        .unwrap();

        // (0, 1) is scanned before (1, 0).
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].top_left(), Point::new(0, 1));
        assert_eq!(groups[1].top_left(), Point::new(1, 0));
    }

    #[test]
    fn test_store_positions_disabled() {
        let grid = grid_from_strs(&["aa..", "aa..", "....", "...b"]);
        let options = GroupOptions::new().with_store_positions(false);
        let groups = find_groups(&grid, &options).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].positions_count(), 4);
        assert_eq!(groups[1].positions_count(), 1);
        assert!(groups.iter().all(|g| g.positions().is_empty()));
        // Count and bounding box are unaffected by the storage switch.
        assert_eq!(groups[0].bounding_box(), Box::new_unchecked(0, 0, 1, 1));
        assert_eq!(groups[1].bounding_box(), Box::new_unchecked(3, 3, 0, 0));
    }

    #[test]
    fn test_limit_carries_partial_results() {
        // Three isolated cells, limit 2: the third group overflows.
        let grid = grid_from_strs(&["a.a.a"]);
        let options = GroupOptions::new().with_limit_results(2);

        let err = find_groups(&grid, &options).unwrap_err();
        match &err {
            GroupError::LimitExceeded { limit, groups } => {
                assert_eq!(*limit, 2);
                assert_eq!(groups.len(), 3);
            }
        }
        assert_eq!(err.into_groups().len(), 3);
    }

    #[test]
    fn test_limit_not_hit_at_exact_count() {
        let grid = grid_from_strs(&["a.a"]);
        let options = GroupOptions::new().with_limit_results(2);
        assert_eq!(find_groups(&grid, &options).unwrap().len(), 2);
    }

    #[test]
    fn test_rejected_neighbour_is_consumed_by_default() {
        // 'b' is touched (and rejected) by the first fill before the
        // scan reaches it, so under MarkVisited it joins no group.
        let grid = grid_from_strs(&["aba"]);

        let groups = find_groups(&grid, &GroupOptions::default()).unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.positions_count() == 1));

        // Under Reseed the same cell seeds its own group.
        let reseed = find_groups(
            &grid,
            &GroupOptions::new().with_reject_policy(RejectPolicy::Reseed),
        )
        .unwrap();
        assert_eq!(reseed.len(), 3);
        assert_eq!(reseed[1].top_left(), Point::new(1, 0));
    }

    /// Values are equivalent when they differ by at most 1. Exposes the
    /// seed-only comparison: a 0-1-2 ramp is pairwise close but 2 is not
    /// within reach of the seed 0.
    struct RampGrid {
        cells: Vec<u8>,
    }

    impl Grid for RampGrid {
        type Value = u8;

        fn width(&self) -> u32 {
            self.cells.len() as u32
        }

        fn height(&self) -> u32 {
            1
        }

        fn value_at(&self, x: i32, y: i32) -> Option<u8> {
            if y != 0 || x < 0 {
                return None;
            }
            self.cells.get(x as usize).copied()
        }

        fn equivalent(&self, a: &u8, b: &u8) -> bool {
            a.abs_diff(*b) <= 1
        }
    }

    #[test]
    fn test_equivalence_is_seed_only_not_transitive() {
        let grid = RampGrid {
            cells: vec![0, 1, 2],
        };

        // Seed 0 accepts 1 but rejects 2, even though 1 and 2 are
        // pairwise equivalent. The rejected 2 is consumed.
        let groups = find_groups(&grid, &GroupOptions::default()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].positions_count(), 2);
        assert_eq!(groups[0].bottom_right(), Point::new(1, 0));

        // Reseed recovers it as a group of its own.
        let reseed = find_groups(
            &grid,
            &GroupOptions::new().with_reject_policy(RejectPolicy::Reseed),
        )
        .unwrap();
        assert_eq!(reseed.len(), 2);
        assert_eq!(reseed[1].positions_count(), 1);
        assert_eq!(reseed[1].top_left(), Point::new(2, 0));
    }

    #[test]
    fn test_empty_and_all_hole_grids() {
        let empty: VecGrid<char> = VecGrid::new(0, 0);
        assert!(find_groups(&empty, &GroupOptions::default()).unwrap().is_empty());

        let holes: VecGrid<char> = VecGrid::new(4, 4);
        assert!(find_groups(&holes, &GroupOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn test_diagonal_bridge() {
        // Two blocks meeting only at a corner merge under 8-way and
        // split under 4-way.
        let grid = grid_from_strs(&["aa..", "aa..", "..aa", "..aa"]);

        let eight = find_groups(&grid, &GroupOptions::default()).unwrap();
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].positions_count(), 8);

        let four = find_groups(
            &grid,
            &GroupOptions::new().with_connectivity(Connectivity::FourWay),
        )
        .unwrap();
        assert_eq!(four.len(), 2);
    }
}
