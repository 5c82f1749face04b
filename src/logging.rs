use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "REPOBOARD_LOG";

/// Install the stderr subscriber. `REPOBOARD_LOG` wins over `default_level`.
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
