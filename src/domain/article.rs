//! Article domain model.
//!
//! Articles are supplied by an external data source and are read-only input to the
//! renderer. The field layout follows the Top Stories JSON records the page was built
//! against, so records can be decoded straight from a response body.

use crate::domain::error::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// A single news item with its display metadata.
///
/// `published_date` is kept as the raw ISO-like string (`YYYY-MM-DDTHH:MM:SS±HH:MM`);
/// it is only reformatted at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub section: String,
    pub published_date: String,
    pub byline: String,
    pub url: String,
    /// Abstract text. Serialized as `abstract`.
    #[serde(rename = "abstract")]
    pub summary: String,
    #[serde(default)]
    pub multimedia: Option<Vec<Multimedia>>,
}

/// An image reference attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multimedia {
    pub url: String,
    /// Alternate text for the image. Absent and `null` captions are empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub caption: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Article {
    /// Returns the image shown on the article's card, if any.
    ///
    /// Only the first multimedia entry is ever used. An absent, `null` or empty
    /// multimedia list yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsdesk::{Article, Multimedia};
    ///
    /// let mut article = Article {
    ///     title: "Title".into(),
    ///     section: "world".into(),
    ///     published_date: "2023-05-01T09:15:30-04:00".into(),
    ///     byline: "By Someone".into(),
    ///     url: "https://example.com/a".into(),
    ///     summary: "Abstract".into(),
    ///     multimedia: Some(vec![]),
    /// };
    /// assert!(article.lead_image().is_none());
    ///
    /// article.multimedia = Some(vec![Multimedia { url: "a.jpg".into(), caption: "A".into() }]);
    /// assert_eq!(article.lead_image().unwrap().url, "a.jpg");
    /// ```
    #[must_use]
    pub fn lead_image(&self) -> Option<&Multimedia> {
        self.multimedia.as_deref().and_then(<[Multimedia]>::first)
    }
}

/// Response envelope carrying articles under `results`.
#[derive(Debug, Deserialize)]
struct ArticleFeed {
    results: Vec<Article>,
}

/// Decodes articles from JSON.
///
/// Accepts either a bare array of article objects or an object wrapping them in a
/// `results` array. Unknown fields are ignored.
///
/// # Errors
///
/// Returns [`NewsdeskError::Json`](crate::NewsdeskError::Json) when the payload
/// matches neither shape. The error names the offending field and its position.
///
/// # Examples
///
/// ```
/// use newsdesk::parse_articles;
///
/// let json = r#"{"status": "OK", "results": []}"#;
/// assert!(parse_articles(json)?.is_empty());
/// # Ok::<(), newsdesk::NewsdeskError>(())
/// ```
pub fn parse_articles(json: &str) -> Result<Vec<Article>> {
    let articles = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Article>>(json)?
    } else {
        serde_json::from_str::<ArticleFeed>(json)?.results
    };
    tracing::debug!(article_count = articles.len(), "decoded articles");
    Ok(articles)
}
