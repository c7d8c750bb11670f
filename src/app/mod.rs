//! Application layer: the article view and its handler execution model.
//!
//! # Architecture
//!
//! ```text
//! Controller → display_articles → ui::render → container rows
//! User click → listener → handler(query) → guard → Spawner
//! ```
//!
//! # Modules
//!
//! - [`view`]: [`ArticlesView`], bound to the host page's anchors
//! - [`spawner`]: [`Spawner`] capability and the handler error boundary

pub mod spawner;
pub mod view;

pub use futures_util::future::LocalBoxFuture;
pub use spawner::{guard, HandlerKind, Spawner};
pub use view::ArticlesView;

#[cfg(any(test, feature = "testing"))]
pub use spawner::{create_test_spawner, test_spawner_fn, TestSpawner};
