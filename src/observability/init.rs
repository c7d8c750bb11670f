//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Events are formatted by a `tracing-subscriber` fmt layer and written to stderr,
/// keeping stdout free for rendered output.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: if a global subscriber is already installed, this call does nothing.
///
/// # Example
///
/// ```rust
/// use newsdesk::observability::init_tracing;
/// use newsdesk::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false));

    let _ = subscriber.try_init();
}
