use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so report output on stdout stays clean.
pub fn init_tracing(log_json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tokio=warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    let _ = if log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
