//! Logging setup using the `tracing` ecosystem.
//!
//! Logs always go to stderr; stdout is reserved for rendered output.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber. Call once, before any logging.
///
/// Level precedence: `verbose` (debug), then `quiet` (errors only), then
/// `RUST_LOG`, then info.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = level_filter(verbose, quiet);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn level_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("doxysh=debug")
    } else if quiet {
        EnvFilter::new("doxysh=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doxysh=info"))
    }
}
