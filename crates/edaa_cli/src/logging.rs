//! Installation of the global tracing subscriber.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr `fmt` subscriber.
///
/// `--quiet` limits output to errors and `--verbose` enables debug events;
/// otherwise `RUST_LOG` is honoured, falling back to warnings only.
pub fn init(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .try_init();
}
