use tracing_subscriber::EnvFilter;

/// Env var that overrides the default diagnostic filter.
pub const LOG_ENV: &str = "TASK_CLI_LOG";

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "task_cli=debug"
    } else {
        "task_cli=warn"
    }
}

/// Install the stderr subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
