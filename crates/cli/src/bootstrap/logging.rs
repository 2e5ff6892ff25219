use tracing_subscriber::EnvFilter;
use visitor_counter_domain::{config::LogFormat, Config};

/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) {
    let level = config.logging.level.as_str();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config.logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
