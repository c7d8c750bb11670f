//! Theme management for card markup.
//!
//! A theme maps every structural part of the article grid to the class names the
//! host page's stylesheet expects. Built-in themes are embedded TOML files; custom
//! themes can be loaded from disk.
//!
//! # Built-in Themes
//!
//! - `bootstrap`: Bootstrap grid and card classes (default)
//! - `minimal`: Framework-free semantic class names
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! image_width = "200px"
//!
//! [classes]
//! row = "row"
//! column = "col-sm-6"
//! card = "card mb-3"
//! card_image = "card-img-top mt-4 mx-auto"
//! card_body = "card-body"
//! title = "card-title"
//! meta = "card-text mb-0"
//! muted = "text-muted"
//! text = "card-text"
//! ```
//!
//! # Example
//!
//! ```rust
//! use newsdesk::Theme;
//!
//! let theme = Theme::from_name("bootstrap").unwrap();
//! assert_eq!(theme.classes.column, "col-sm-6");
//! ```

use crate::domain::error::{NewsdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Class-name scheme for rendering article cards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Class names for each part of the grid.
    pub classes: ThemeClasses,
    /// Fixed CSS width applied to card images. `None` leaves images unstyled.
    #[serde(default)]
    pub image_width: Option<String>,
}

/// Class names for every element the renderer creates.
///
/// Each value is a space-separated class list. An empty string omits the `class`
/// attribute entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeClasses {
    /// A row holding up to two columns.
    pub row: String,
    /// One column within a row.
    pub column: String,
    /// The card wrapper inside a column.
    pub card: String,
    /// The card's lead image.
    pub card_image: String,
    /// The card body holding all text.
    pub card_body: String,
    /// The title heading.
    pub title: String,
    /// Paragraphs for section, date and byline.
    pub meta: String,
    /// The `small` element inside each meta paragraph.
    pub muted: String,
    /// Paragraphs for the link and the abstract.
    pub text: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "bootstrap" => include_str!("../../themes/bootstrap.toml"),
            "minimal" => include_str!("../../themes/minimal.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NewsdeskError::Theme`] if the file cannot be read or the TOML does
    /// not describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| NewsdeskError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| NewsdeskError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Inline style for card images, e.g. `width: 200px;`.
    #[must_use]
    pub fn image_style(&self) -> Option<String> {
        self.image_width
            .as_deref()
            .filter(|w| !w.is_empty())
            .map(|w| format!("width: {w};"))
    }
}

impl Default for Theme {
    /// Returns the default theme (Bootstrap).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("bootstrap").expect("Built-in bootstrap theme should always parse")
    }
}
