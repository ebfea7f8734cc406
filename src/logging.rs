//! Logging initialization for the CLI.
//!
//! Diagnostics go through `tracing` to stderr; user-facing progress has its
//! own port and is not affected by the level chosen here.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Maps the `-v` count to a level: 0 = WARN, 1 = DEBUG, 2+ = TRACE
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` is honored; the verbosity flag overrides it for this crate.
/// A second call is a no-op.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);

    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Ok(directive) = format!("dep_impact={level}").parse() {
        filter = filter.add_directive(directive);
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
