use std::io;

/// Reasons a configuration cannot be loaded or accepted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}'")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Rejected configuration: {0}")]
    Validation(String),
}
