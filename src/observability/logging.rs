use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit log filter (`RUST_LOG` syntax)
pub const LOG_ENV_VAR: &str = "ARTICLE_METRICS_LOG";

/// Map the `-v` count to a default filter directive
pub fn level_for_verbosity(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `ARTICLE_METRICS_LOG`, then `RUST_LOG`, take precedence over the
/// verbosity flags. Calling this twice is harmless.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
