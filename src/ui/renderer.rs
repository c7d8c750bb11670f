//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `&[Article]` → [`GridViewModel`] (may fail)
//! 2. **Component Rendering**: [`GridViewModel`] → row elements, swapped into the
//!    container
//!
//! Step 1 finishes before the container is modified, so a failure leaves the
//! previously rendered rows in place.

use crate::dom::Element;
use crate::domain::error::Result;
use crate::domain::Article;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GridViewModel;

/// Renders `articles` into `container`, replacing all of its children.
///
/// # Errors
///
/// Returns [`NewsdeskError::MalformedDate`](crate::NewsdeskError::MalformedDate)
/// if any article's date cannot be formatted. The container is not modified in
/// that case.
///
/// # Example
///
/// ```rust
/// use newsdesk::dom::Element;
/// use newsdesk::ui::{render, Theme};
///
/// let container = Element::new("div");
/// container.append(Element::new("p").with_text("stale"));
///
/// render(&container, &[], &Theme::default())?;
/// assert_eq!(container.child_element_count(), 0);
/// # Ok::<(), newsdesk::NewsdeskError>(())
/// ```
pub fn render(container: &Element, articles: &[Article], theme: &Theme) -> Result<()> {
    let viewmodel = GridViewModel::from_articles(articles)?;

    render_viewmodel(container, &viewmodel, theme);
    Ok(())
}

/// Replaces the container's children with the rows of `vm`.
pub fn render_viewmodel(container: &Element, vm: &GridViewModel, theme: &Theme) {
    let rows = components::render_grid(vm, theme);

    container.clear_children();
    for row in rows {
        container.append(row);
    }

    tracing::debug!(
        row_count = vm.rows.len(),
        card_count = vm.card_count(),
        "rendered article grid"
    );
}
