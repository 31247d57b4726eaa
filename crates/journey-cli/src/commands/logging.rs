use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `JOURNEY_LOG=journey_core=debug`.
pub const LOG_ENV: &str = "JOURNEY_LOG";

/// Installs the stderr subscriber; stdout is reserved for command output.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
