//! Composer error types

use thiserror::Error;

use crate::ClientError;

/// What a failed load was fetching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    Menu,
    Tables,
}

impl std::fmt::Display for LoadTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadTarget::Menu => f.write_str("menu"),
            LoadTarget::Tables => f.write_str("tables"),
        }
    }
}

/// Submission rejected locally, before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a table before submitting an order.")]
    NoTable,

    #[error("Please select at least one menu item.")]
    NoItems,

    #[error("Please log in before submitting an order.")]
    NotSignedIn,
}

/// Composer error type
///
/// `Display` is the message shown to staff.
#[derive(Debug, Error)]
pub enum ComposerError {
    /// Menu or table fetch failed; previous data is kept
    #[error("Failed to fetch {target}.")]
    Load {
        target: LoadTarget,
        #[source]
        source: ClientError,
    },

    /// Submission precondition not met
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Order service rejected the order or could not be reached
    #[error("Failed to submit order.")]
    Submission(#[source] ClientError),
}
