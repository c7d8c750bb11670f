//! Fire-and-forget execution of handler futures.
//!
//! Registered search/reset handlers are async. The view never awaits them: each
//! returned future is wrapped in an error boundary and handed to a [`Spawner`],
//! which decides how it runs (a local executor, `spawn_local` on a browser event
//! loop, or synchronously in tests).

#[cfg(any(test, feature = "testing"))]
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
#[cfg(any(test, feature = "testing"))]
use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};

/// A spawner for executing handler futures without awaiting them.
///
/// Function pointers and closures taking a `LocalBoxFuture<'static, ()>`
/// implement this trait via the blanket implementation.
///
/// # Example
///
/// ```rust
/// use newsdesk::app::{LocalBoxFuture, Spawner};
///
/// fn drop_it(_future: LocalBoxFuture<'static, ()>) {}
///
/// fn takes_spawner(spawner: impl Spawner) {
///     spawner.spawn(Box::pin(async {}));
/// }
/// takes_spawner(drop_it);
/// ```
pub trait Spawner {
    /// Starts `future` without waiting for it to finish.
    fn spawn(&self, future: LocalBoxFuture<'static, ()>);
}

impl<F> Spawner for F
where
    F: Fn(LocalBoxFuture<'static, ()>),
{
    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        self(future);
    }
}

/// Which control a handler was registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Search,
    Reset,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => f.write_str("search"),
            Self::Reset => f.write_str("reset"),
        }
    }
}

/// Wraps a handler future so that its failure is logged instead of propagated.
///
/// The handler owns its failure handling; this boundary only records that it
/// returned an error.
pub fn guard<Fut>(kind: HandlerKind, future: Fut) -> LocalBoxFuture<'static, ()>
where
    Fut: Future<Output = anyhow::Result<()>> + 'static,
{
    async move {
        if let Err(error) = future.await {
            tracing::warn!(handler = %kind, error = %error, "event handler failed");
        }
    }
    .boxed_local()
}

#[cfg(any(test, feature = "testing"))]
/// Test spawner function that executes futures synchronously.
///
/// This blocks on the future immediately rather than spawning it on an executor.
pub fn test_spawner_fn(future: LocalBoxFuture<'static, ()>) {
    futures::executor::block_on(future);
}

#[cfg(any(test, feature = "testing"))]
/// Creates a test spawner that executes futures synchronously.
///
/// Returns a function pointer that can be passed directly to
/// [`ArticlesView::bind`](crate::app::ArticlesView::bind).
#[must_use]
pub fn create_test_spawner() -> fn(LocalBoxFuture<'static, ()>) {
    test_spawner_fn
}

#[cfg(any(test, feature = "testing"))]
/// Test spawner that queues futures until explicitly run.
///
/// Only available with the `testing` feature or during tests. Clones share the
/// same queue, so keep one clone to drive the futures a view has spawned.
///
/// # Example
///
/// ```rust
/// use newsdesk::app::{Spawner, TestSpawner};
///
/// let spawner = TestSpawner::new();
/// spawner.spawn(Box::pin(async {}));
/// assert_eq!(spawner.pending_count(), 1);
///
/// assert_eq!(spawner.run_pending(), 1);
/// assert_eq!(spawner.pending_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct TestSpawner {
    pending: Rc<RefCell<Vec<LocalBoxFuture<'static, ()>>>>,
}

#[cfg(any(test, feature = "testing"))]
impl TestSpawner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of spawned futures not yet run.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Runs every queued future to completion, in spawn order.
    ///
    /// Futures spawned while these run stay queued for the next call. Returns how
    /// many futures were run.
    pub fn run_pending(&self) -> usize {
        let queued = std::mem::take(&mut *self.pending.borrow_mut());
        let count = queued.len();
        for future in queued {
            futures::executor::block_on(future);
        }
        count
    }
}

#[cfg(any(test, feature = "testing"))]
impl Spawner for TestSpawner {
    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        self.pending.borrow_mut().push(future);
    }
}
