//! Domain layer for the newsdesk renderer.
//!
//! This module contains the article records the renderer consumes and the crate's
//! error type, independent of any page or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`article`]: Article and multimedia records, JSON decoding
//!
//! # Examples
//!
//! ```
//! use newsdesk::domain::{parse_articles, Result};
//!
//! fn load(json: &str) -> Result<usize> {
//!     Ok(parse_articles(json)?.len())
//! }
//! assert_eq!(load("[]").unwrap(), 0);
//! ```

pub mod article;
pub mod error;

pub use article::{parse_articles, Article, Multimedia};
pub use error::{NewsdeskError, Result};
