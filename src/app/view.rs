//! The article view: anchor binding, grid display and control wiring.
//!
//! [`ArticlesView`] is bound once to four anchors of the host page and then serves
//! any number of display and registration calls, in any order:
//!
//! ```text
//! Controller ──display_articles──▶ ArticlesView ──render──▶ container
//!     ▲                                │
//!     │         click(search/reset)    │ guard + spawn
//!     └────────── handler future ◀─────┘
//! ```

use std::future::Future;
use std::rc::Rc;

use crate::app::spawner::{guard, HandlerKind, Spawner};
use crate::dom::{Element, Page};
use crate::domain::error::{NewsdeskError, Result};
use crate::domain::Article;
use crate::ui::{self, Theme};
use crate::AnchorIds;

/// Renders article grids into a container and dispatches search/reset activations.
///
/// Holds only the anchor handles, the theme and the spawner; rendered content
/// lives in the page.
///
/// Registered callbacks are owned by the view's buttons. A callback holding an
/// `Rc<ArticlesView>` forms a reference cycle and the view is never dropped;
/// capture a [`Weak`](std::rc::Weak) and upgrade it inside the callback instead.
///
/// # Example
///
/// ```rust
/// use newsdesk::app::{create_test_spawner, ArticlesView};
/// use newsdesk::dom::{Document, Page};
/// use newsdesk::{AnchorIds, Theme};
///
/// let anchors = AnchorIds::default();
/// let document = Document::with_anchors(&anchors);
/// let view = ArticlesView::bind(&document, &anchors, Theme::default(), create_test_spawner())?;
///
/// view.add_search_event_handler(|query| async move {
///     assert_eq!(query, "rust");
///     Ok(())
/// });
///
/// view.search_input().set_value("rust");
/// view.search_button().click();
/// # Ok::<(), newsdesk::NewsdeskError>(())
/// ```
pub struct ArticlesView<S: Spawner> {
    container: Element,
    reset_button: Element,
    search_button: Element,
    search_input: Element,
    theme: Theme,
    spawner: Rc<S>,
}

impl<S: Spawner + 'static> ArticlesView<S> {
    /// Binds a view to the anchors of `page`.
    ///
    /// # Errors
    ///
    /// Returns [`NewsdeskError::MissingAnchor`] for the first anchor the page does
    /// not provide, checked in the order container, reset button, search button,
    /// search input.
    pub fn bind<P: Page + ?Sized>(
        page: &P,
        anchors: &AnchorIds,
        theme: Theme,
        spawner: S,
    ) -> Result<Self> {
        let _span = tracing::debug_span!("bind_anchors", theme = %theme.name).entered();

        let container = resolve_anchor(page, "articles container", &anchors.container)?;
        let reset_button = resolve_anchor(page, "reset button", &anchors.reset_button)?;
        let search_button = resolve_anchor(page, "search button", &anchors.search_button)?;
        let search_input = resolve_anchor(page, "search input", &anchors.search_input)?;

        tracing::debug!("anchors bound");

        Ok(Self {
            container,
            reset_button,
            search_button,
            search_input,
            theme,
            spawner: Rc::new(spawner),
        })
    }

    /// Replaces the container's contents with a grid of `articles`.
    ///
    /// # Errors
    ///
    /// Returns [`NewsdeskError::MalformedDate`] if any article's date lacks the
    /// expected separators. Nothing is rendered in that case and the previous rows
    /// remain.
    pub fn display_articles(&self, articles: &[Article]) -> Result<()> {
        let _span =
            tracing::debug_span!("display_articles", article_count = articles.len()).entered();

        match ui::render(&self.container, articles, &self.theme) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::debug!(error = %e, "render aborted");
                Err(e)
            }
        }
    }

    /// Registers `callback` to run with the search input's value on every search
    /// activation.
    ///
    /// Registrations accumulate. The returned future is spawned, not awaited; an
    /// error it yields is logged and dropped.
    pub fn add_search_event_handler<F, Fut>(&self, callback: F)
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<()>> + 'static,
    {
        let input = self.search_input.clone();
        let spawner = Rc::clone(&self.spawner);

        self.search_button.add_click_listener(move || {
            let query = input.value();
            tracing::debug!(query = %query, "search activated");
            spawner.spawn(guard(HandlerKind::Search, callback(query)));
        });
    }

    /// Registers `callback` to run on every reset activation.
    ///
    /// The search input is cleared before the callback is invoked. Same
    /// accumulation and fire-and-forget semantics as
    /// [`add_search_event_handler`](Self::add_search_event_handler).
    pub fn add_reset_event_handler<F, Fut>(&self, callback: F)
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<()>> + 'static,
    {
        let input = self.search_input.clone();
        let spawner = Rc::clone(&self.spawner);

        self.reset_button.add_click_listener(move || {
            input.set_value("");
            tracing::debug!("reset activated");
            spawner.spawn(guard(HandlerKind::Reset, callback()));
        });
    }
}

impl<S: Spawner> ArticlesView<S> {
    #[must_use]
    pub fn container(&self) -> &Element {
        &self.container
    }

    #[must_use]
    pub fn reset_button(&self) -> &Element {
        &self.reset_button
    }

    #[must_use]
    pub fn search_button(&self) -> &Element {
        &self.search_button
    }

    #[must_use]
    pub fn search_input(&self) -> &Element {
        &self.search_input
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

fn resolve_anchor<P: Page + ?Sized>(page: &P, role: &'static str, id: &str) -> Result<Element> {
    page.element_by_id(id).ok_or_else(|| {
        tracing::error!(role, id, "anchor not found");
        NewsdeskError::MissingAnchor {
            role,
            id: id.to_string(),
        }
    })
}
