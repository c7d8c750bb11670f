//! View model types representing a renderable article grid.
//!
//! View models are computed from article records before any element is created.
//! They hold display-ready text only (upper-cased section, formatted date, body ids),
//! so every fallible transformation has already happened by the time the container
//! is touched.
//!
//! # Example
//!
//! ```rust
//! use newsdesk::ui::GridViewModel;
//!
//! let vm = GridViewModel::from_articles(&[])?;
//! assert!(vm.rows.is_empty());
//! # Ok::<(), newsdesk::NewsdeskError>(())
//! ```

use crate::domain::error::Result;
use crate::domain::Article;
use crate::ui::helpers::{format_date, section_label};

/// Number of cards per row.
pub const CARDS_PER_ROW: usize = 2;

/// The complete grid: rows in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViewModel {
    pub rows: Vec<RowViewModel>,
}

/// One row of one or two cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    pub cards: Vec<CardViewModel>,
}

/// Display information for a single article card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardViewModel {
    /// Id of the card body, `article-<n>` with `n` the 1-based input position.
    pub body_id: String,
    pub image: Option<ImageInfo>,
    pub title: String,
    /// Section name, upper-cased.
    pub section: String,
    /// Publication date as `YYYY-MM-DD HH:MM`.
    pub date: String,
    pub byline: String,
    pub url: String,
    pub summary: String,
}

/// Lead image of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub src: String,
    pub alt: String,
}

impl GridViewModel {
    /// Builds the grid for `articles`.
    ///
    /// Articles are grouped into consecutive pairs preserving order; an odd final
    /// article sits alone in the last row.
    ///
    /// # Errors
    ///
    /// Fails with [`NewsdeskError::MalformedDate`](crate::NewsdeskError::MalformedDate)
    /// on the first article whose `published_date` cannot be formatted.
    pub fn from_articles(articles: &[Article]) -> Result<Self> {
        let rows = articles
            .chunks(CARDS_PER_ROW)
            .enumerate()
            .map(|(row_index, pair)| {
                let cards = pair
                    .iter()
                    .enumerate()
                    .map(|(offset, article)| {
                        CardViewModel::from_article(article, row_index * CARDS_PER_ROW + offset)
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(RowViewModel { cards })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    /// Total number of cards across all rows.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows.iter().map(|row| row.cards.len()).sum()
    }
}

impl CardViewModel {
    /// Builds the card for the article at zero-based position `index`.
    ///
    /// # Errors
    ///
    /// Fails when the article's date is malformed.
    pub fn from_article(article: &Article, index: usize) -> Result<Self> {
        Ok(Self {
            body_id: format!("article-{}", index + 1),
            image: article.lead_image().map(|media| ImageInfo {
                src: media.url.clone(),
                alt: media.caption.clone(),
            }),
            title: article.title.clone(),
            section: section_label(&article.section),
            date: format_date(&article.published_date)?,
            byline: article.byline.clone(),
            url: article.url.clone(),
            summary: article.summary.clone(),
        })
    }
}
