pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod visitors;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config, MAX_RETENTION_DAYS};
pub use server::ServerConfig;
pub use visitors::VisitorsConfig;
