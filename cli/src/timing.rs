//! Diagnostics setup for `doclist`.
//!
//! All diagnostics go to stderr so rendered tables on stdout stay clean.
//! Command entry points carry `#[instrument]`; with `--timing` each span logs
//! its duration on close. `doclist-table` and `doclist-directive` log through
//! the `log` facade, which the subscriber also picks up.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// `verbose` lowers the default level to debug and shows targets; `timing`
/// turns on span close events. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool, timing: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else if timing {
        // Span close events are INFO.
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let span_events = if timing {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
