//! Logging setup

use tracing_subscriber::EnvFilter;

/// Initialize tracing output. `RUST_LOG` overrides the verbosity flag.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "backend_probe=debug"
    } else {
        "backend_probe=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
