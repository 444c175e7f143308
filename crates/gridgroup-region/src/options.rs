//! Search configuration
//!
//! All configuration is call-scoped: a [`GroupOptions`] value is read-only
//! for the duration of one search and shares no state between calls, so
//! one options value can serve any number of concurrent searches.

/// Connectivity type for the group search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// What happens to a touched neighbour whose value does not match the
/// seed of the current fill.
///
/// Under [`MarkVisited`](RejectPolicy::MarkVisited) a rejected neighbour
/// is marked visited immediately, which means the main scan will skip it
/// and it can never seed a group of its own: a valued cell whose every
/// equivalent neighbourhood is reached first by foreign fills silently
/// disappears from the results. This is the historical behaviour of the
/// search and remains the default.
///
/// [`Reseed`](RejectPolicy::Reseed) leaves rejected neighbours unvisited
/// so the main scan can later seed them, guaranteeing every valued cell
/// ends up in exactly one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RejectPolicy {
    /// Rejected neighbours are consumed by the fill that touched them.
    #[default]
    MarkVisited,
    /// Rejected neighbours stay eligible as future seeds.
    Reseed,
}

/// Options for a group search
#[derive(Debug, Clone)]
pub struct GroupOptions {
    /// Retain per-group membership lists. Disabling trades the position
    /// vectors for a bounding-box-and-count-only result.
    pub store_positions: bool,
    /// Neighbour adjacency (4-way or 8-way)
    pub connectivity: Connectivity,
    /// Maximum number of groups a single search may produce; 0 means
    /// unlimited.
    pub limit_results: u32,
    /// Treatment of touched-but-mismatched neighbours
    pub reject_policy: RejectPolicy,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            store_positions: true,
            connectivity: Connectivity::EightWay,
            limit_results: 0,
            reject_policy: RejectPolicy::MarkVisited,
        }
    }
}

impl GroupOptions {
    /// Create options with the defaults: positions stored, 8-way
    /// connectivity, no result limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether membership lists are retained.
    pub fn with_store_positions(mut self, store: bool) -> Self {
        self.store_positions = store;
        self
    }

    /// Set the neighbour adjacency.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Cap the number of groups a search may produce (0 = unlimited).
    pub fn with_limit_results(mut self, limit: u32) -> Self {
        self.limit_results = limit;
        self
    }

    /// Set the rejected-neighbour policy.
    pub fn with_reject_policy(mut self, policy: RejectPolicy) -> Self {
        self.reject_policy = policy;
        self
    }
}
