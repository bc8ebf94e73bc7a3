use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the stderr log layer.
///
/// `-v`/`-vv` select the level for the translator directly; otherwise
/// `RUST_LOG` is honoured and the default is `warn`.
pub fn init(quiet: bool, verbose: u8) {
    let filter = match (quiet, verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        (false, 1) => EnvFilter::new("warn,bngl_model=debug"),
        (false, _) => EnvFilter::new("warn,bngl_model=trace"),
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(layer).try_init();
}
