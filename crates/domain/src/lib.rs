//! Visitor Counter Domain Layer
pub mod config;
pub mod errors;
pub mod scheduled_job;
pub mod time_window;
pub mod visit;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use scheduled_job::{ScheduledJob, PURGE_JOB_NAME};
pub use time_window::{TimeWindow, UnknownWindowError};
pub use visit::{VisitRecord, VisitorCount, LOOPBACK_PLACEHOLDER, MAX_CLIENT_IDENTIFIER_LEN};
