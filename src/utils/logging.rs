use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (EnvFilter syntax)
pub(crate) const LOG_ENV: &str = "APPTRACK_LOG";

/// Install the stderr subscriber. Prompts own stdout, so logs never go there.
pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!("tracing subscriber already installed: {e}");
    }
}
