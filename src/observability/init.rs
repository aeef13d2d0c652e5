//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when none is configured.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// Invalid directives fall back to the default instead of failing.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber. Later calls, or a
/// host that already installed its own subscriber, leave the existing one in
/// place. Returns whether this call installed the subscriber.
///
/// # Example
///
/// ```rust
/// use booking_selector::observability::init_tracing;
/// use booking_selector::Config;
///
/// let config = Config {
///     trace_level: Some("booking_selector=debug".to_string()),
///     ..Config::default()
/// };
///
/// init_tracing(&config);
/// assert!(!init_tracing(&config));
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
