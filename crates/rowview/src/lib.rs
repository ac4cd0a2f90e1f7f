//! Command-line front end for rowview content directories.
//!
//! Re-exports the params crate and provides the report model printed by the
//! `rowview` binary.

pub mod report;

/// Re-export for convenience.
pub use rowview_params as params;

/// Initialize logging using env_logger.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` over
/// `warn`. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .try_init();
}
