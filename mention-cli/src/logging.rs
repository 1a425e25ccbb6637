//! Tracing initialization for the CLI.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// Reads `MENTIONS_LOG` for per-module levels, e.g.
/// `MENTIONS_LOG=mention_parser=trace,mention_config=debug`. Falls back to `warn`
/// when unset or invalid. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("MENTIONS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
