//! Logger bootstrap built on `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, `bin_name` and the Lakeside
/// library crates log at `default_level`. Output goes to stderr so that it
/// never interleaves with what a binary prints on stdout.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let crate_name = bin_name.replace('-', "_");
    let default_directives = format!(
        "{crate_name}={default_level},lakeside_client={default_level},lakeside_shared={default_level}"
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    // A second initialisation (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
