//! Error types for gridgroup-region

use crate::group::Group;
use thiserror::Error;

/// Errors that can occur during a group search
#[derive(Debug, Error)]
pub enum GroupError {
    /// The configured result limit was exceeded.
    ///
    /// Carries every group collected up to and including the one that
    /// crossed the limit, so callers can inspect partial progress on
    /// unbounded input instead of losing all work.
    #[error("result limit of {} exceeded: {} groups collected", .limit, .groups.len())]
    LimitExceeded {
        /// The configured limit
        limit: u32,
        /// Partial results, including the overflowing group
        groups: Vec<Group>,
    },
}

impl GroupError {
    /// Borrow the partial results carried by the error.
    pub fn groups(&self) -> &[Group] {
        match self {
            GroupError::LimitExceeded { groups, .. } => groups,
        }
    }

    /// Consume the error and recover the partial results.
    pub fn into_groups(self) -> Vec<Group> {
        match self {
            GroupError::LimitExceeded { groups, .. } => groups,
        }
    }
}

/// Result type for group search operations
pub type GroupResult<T> = Result<T, GroupError>;
