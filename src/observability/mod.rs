//! Structured logging setup.
//!
//! The library only emits `tracing` events and spans; installing a subscriber is
//! left to the host. [`init_tracing`] is the subscriber used by the `newsdesk`
//! binary.
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
