//! Newsdesk: renders article search results into a card grid.
//!
//! Newsdesk is a presentation-layer helper for a simple article-browsing page:
//! - Renders an ordered list of articles as a two-column grid of cards
//! - Formats each card's section, publication date, byline, link and abstract
//! - Wires a search control and a reset control to caller-supplied async handlers
//! - Binds to the host page through an injected [`Page`](dom::Page) capability
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Snapshot binary (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ArticlesView: display + handler registration     │
//! │  - Spawner: fire-and-forget handler execution       │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐     ┌───────────────────────┐
//! │ UI Layer (ui/)        │     │ Page Layer (dom/)     │
//! │ - View model          │     │ - Element tree        │
//! │ - Components          │ ──▶ │ - Anchor lookup       │
//! │ - Themes              │     │ - HTML serialization  │
//! └───────────────────────┘     └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Article / Multimedia records                     │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: The article view and handler execution
//! - [`domain`]: Article records and errors
//! - [`dom`]: Element tree, page anchors and HTML output
//! - [`ui`]: Grid rendering with theme support
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use newsdesk::dom::Document;
//! use newsdesk::{app::create_test_spawner, initialize, parse_articles, Config};
//!
//! let config = Config::default();
//! let document = Document::with_anchors(&config.anchors);
//! let view = initialize(&config, &document, create_test_spawner())?;
//!
//! let articles = parse_articles(r#"[{
//!     "title": "Markets rally",
//!     "section": "business",
//!     "published_date": "2023-05-01T09:15:30-04:00",
//!     "byline": "By A. Writer",
//!     "url": "https://example.com/markets",
//!     "abstract": "Stocks rose."
//! }]"#)?;
//!
//! view.display_articles(&articles)?;
//! assert_eq!(view.container().child_element_count(), 1);
//! # Ok::<(), newsdesk::NewsdeskError>(())
//! ```

pub mod app;
pub mod dom;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{ArticlesView, Spawner};
pub use domain::{parse_articles, Article, Multimedia, NewsdeskError, Result};
pub use ui::Theme;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Element ids of the four anchors the view binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnchorIds {
    /// Container receiving the rendered rows. Default: `articles-container`
    pub container: String,
    /// Control that clears the query and triggers reset handlers. Default: `reset-button`
    pub reset_button: String,
    /// Control that triggers search handlers. Default: `search-button`
    pub search_button: String,
    /// Text input holding the query. Default: `search-query`
    pub search_input: String,
}

impl Default for AnchorIds {
    fn default() -> Self {
        Self {
            container: "articles-container".to_string(),
            reset_button: "reset-button".to_string(),
            search_button: "search-button".to_string(),
            search_input: "search-query".to_string(),
        }
    }
}

/// Renderer configuration.
///
/// # Example
///
/// ```toml
/// theme = "minimal"
/// trace_level = "debug"
/// page_title = "Top Stories"
/// stylesheet = "https://cdn.example.com/bootstrap.min.css"
///
/// [anchors]
/// container = "results"
/// search_input = "q"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Ids of the host page anchors.
    pub anchors: AnchorIds,

    /// Built-in theme name (`bootstrap`, `minimal`). Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level (`trace`, `debug`, `info`, `warn`, `error`). Default: `"info"`
    pub trace_level: Option<String>,

    /// Title of the snapshot page. Default: `"Articles"`
    pub page_title: String,

    /// Stylesheet linked from the snapshot page.
    pub stylesheet: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchors: AnchorIds::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            page_title: "Articles".to_string(),
            stylesheet: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// Equivalent to [`Config::default`] followed by [`Config::merge_map`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use newsdesk::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("container_id".to_string(), "#results".to_string());
    /// map.insert("theme".to_string(), "minimal".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.anchors.container, "results");
    /// assert_eq!(config.anchors.search_input, "search-query");
    /// assert_eq!(config.theme_name.as_deref(), Some("minimal"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self::default().merge_map(config)
    }

    /// Overrides fields with the values of a flat key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `container_id`, `reset_button_id`, `search_button_id`, `search_input_id`:
    ///   anchor ids (a leading `#` is stripped)
    /// - `theme`, `theme_file`, `trace_level`, `stylesheet`: optional strings
    /// - `page_title`: string
    ///
    /// Missing or blank values keep the current setting. Unknown keys are ignored.
    #[must_use]
    pub fn merge_map(mut self, config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        let anchor = |key: &str| {
            value(key)
                .map(|id| id.trim_start_matches('#').to_string())
                .filter(|id| !id.is_empty())
        };

        if let Some(id) = anchor("container_id") {
            self.anchors.container = id;
        }
        if let Some(id) = anchor("reset_button_id") {
            self.anchors.reset_button = id;
        }
        if let Some(id) = anchor("search_button_id") {
            self.anchors.search_button = id;
        }
        if let Some(id) = anchor("search_input_id") {
            self.anchors.search_input = id;
        }
        if let Some(theme_name) = value("theme") {
            self.theme_name = Some(theme_name);
        }
        if let Some(theme_file) = value("theme_file") {
            self.theme_file = Some(theme_file);
        }
        if let Some(trace_level) = value("trace_level") {
            self.trace_level = Some(trace_level);
        }
        if let Some(page_title) = value("page_title") {
            self.page_title = page_title;
        }
        if let Some(stylesheet) = value("stylesheet") {
            self.stylesheet = Some(stylesheet);
        }
        self
    }

    /// Loads configuration from a TOML file. Every field is optional.
    ///
    /// # Errors
    ///
    /// Returns [`NewsdeskError::Io`] if the file cannot be read and
    /// [`NewsdeskError::Config`] if the TOML is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| NewsdeskError::Config(format!("Failed to parse config TOML: {e}")))
    }

    /// Resolves the configured theme.
    ///
    /// `theme_file` beats `theme_name`, which beats the default theme. A theme that
    /// fails to load is logged and replaced by the default.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Builds an [`ArticlesView`] bound to `page` from configuration.
///
/// Resolves the theme via [`Config::resolve_theme`] and binds the configured
/// anchors.
///
/// # Errors
///
/// Returns [`NewsdeskError::MissingAnchor`] if the page lacks a configured anchor.
pub fn initialize<P, S>(config: &Config, page: &P, spawner: S) -> Result<ArticlesView<S>>
where
    P: dom::Page + ?Sized,
    S: Spawner + 'static,
{
    tracing::debug!("initializing article view");

    let theme = config.resolve_theme();
    ArticlesView::bind(page, &config.anchors, theme, spawner)
}
