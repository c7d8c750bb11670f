//! Error types for the newsdesk renderer.
//!
//! This module defines the centralized error type [`NewsdeskError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for newsdesk operations.
///
/// Configuration faults (a missing anchor, an unreadable theme) and render faults
/// (a malformed publication date) are both reported through this enum. Faults raised
/// inside registered search/reset handlers never reach it; those are logged by the
/// spawn wrapper in [`crate::app::spawner`].
///
/// # Examples
///
/// ```
/// use newsdesk::NewsdeskError;
///
/// let err = NewsdeskError::MissingAnchor {
///     role: "search input",
///     id: "search-query".to_string(),
/// };
/// assert_eq!(err.to_string(), "Missing search input anchor: #search-query");
/// ```
#[derive(Debug, Error)]
pub enum NewsdeskError {
    /// A required anchor point is absent from the host page.
    ///
    /// Raised while binding an [`ArticlesView`](crate::app::ArticlesView). This is a
    /// configuration fault and setup should abort.
    #[error("Missing {role} anchor: #{id}")]
    MissingAnchor {
        /// Which anchor was being looked up (container, reset button, ...).
        role: &'static str,
        /// The element id that could not be found.
        id: String,
    },

    /// A `published_date` lacks the `T` date/time separator or the `-` offset marker.
    ///
    /// Propagates out of `display_articles`; the container is left untouched.
    #[error("Malformed publication date: {0:?}")]
    MalformedDate(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme lookup or parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Article JSON could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for newsdesk operations.
pub type Result<T> = std::result::Result<T, NewsdeskError>;
