//! Composable element builders for the article grid.
//!
//! Each component turns a slice of the view model into a detached [`Element`]
//! subtree. Nothing here touches the page; the renderer attaches the result.
//!
//! # Components
//!
//! - [`card`]: Column wrapper, card and card body
//! - [`image`]: Lead image
//! - [`text`]: Title, meta lines, link and abstract
//!
//! # Layout
//!
//! ```text
//! div.row
//! ├── div.column
//! │   └── div.card
//! │       ├── img.card_image            (optional)
//! │       └── div.card_body#article-<n>
//! │           ├── h6.title
//! │           ├── p.meta > small.muted  (SECTION)
//! │           ├── p.meta > small.muted  (date)
//! │           ├── p.meta > small.muted  (byline)
//! │           ├── p.text > small > a    (LINK)
//! │           └── p.text                (abstract)
//! └── div.column ...                    (second card, if any)
//! ```

mod card;
mod image;
mod text;

pub use card::render_card;

use crate::dom::Element;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GridViewModel, RowViewModel};

/// Renders every row of the grid, in order.
#[must_use]
pub fn render_grid(vm: &GridViewModel, theme: &Theme) -> Vec<Element> {
    vm.rows.iter().map(|row| render_row(row, theme)).collect()
}

/// Renders a single row holding one column per card.
#[must_use]
pub fn render_row(row: &RowViewModel, theme: &Theme) -> Element {
    let row_el = Element::new("div").with_class(&theme.classes.row);
    for card in &row.cards {
        row_el.append(render_card(card, theme));
    }
    row_el
}
