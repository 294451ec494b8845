//! Tracing setup for the detection binary.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber, filtered by `RUST_LOG` or `info`.
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Installs the global subscriber with `default` as the filter used when
/// `RUST_LOG` is unset or unparsable. At debug level and above every closed
/// pipeline step span is logged with its busy time. A second call is a no-op.
pub fn init_with_default(default: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    let span_events = match env_filter.max_level_hint() {
        Some(level) if level >= LevelFilter::DEBUG => FmtSpan::CLOSE,
        _ => FmtSpan::NONE,
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
