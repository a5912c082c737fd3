//! Tracing setup for the CLI.
//!
//! Logs go to stderr so stdout carries only command output.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `--verbose` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. `--verbose` forces `debug`; otherwise
/// `RUST_LOG` applies, falling back to `warn`.
pub fn init(verbose: bool) {
    let filter = build_filter(verbose, std::env::var("RUST_LOG").ok().as_deref());
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        _ => EnvFilter::new(DEFAULT_FILTER),
    }
}
