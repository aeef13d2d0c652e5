//! Structured diagnostics for the selector.
//!
//! Every layer of the crate reports through `tracing` spans and events: one
//! span per handled event, one per eligible-set derivation, and debug events
//! for context resets and selection changes. Nothing is printed directly.
//! Hosts either install their own subscriber or call [`init_tracing`].
//!
//! # Configuration
//!
//! The filter comes from `Config::trace_level` (any `EnvFilter` directive,
//! e.g. `"debug"` or `"booking_selector=trace"`), defaulting to `"info"`.
//!
//! # Usage
//!
//! ```rust
//! use booking_selector::observability::init_tracing;
//! use booking_selector::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("selector initialized");
//! ```

mod init;

pub use init::init_tracing;
