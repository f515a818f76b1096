// logging setup - tracing events go to stderr so they never mix with rendered output

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// filter used when RUST_LOG is unset, picked from the number of -v flags
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "pattern_explorer_core=info,pattern_explorer=info,warn",
        2 => "pattern_explorer_core=debug,pattern_explorer=debug,warn",
        _ => "trace",
    }
}

/// install the global subscriber; later calls are ignored
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    if installed.is_ok() {
        tracing::debug!(verbosity, "logging initialised");
    }
}
