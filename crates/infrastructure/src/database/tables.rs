use visitor_counter_domain::{config::DatabaseConfig, DomainError};

/// Fully qualified table names, resolved once from the configured prefix.
///
/// The prefix is checked against `[A-Za-z0-9_]` here, which is what makes it
/// safe to splice these names into SQL text. Values are always bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub visitors: String,
    pub visitors_timestamp_idx: String,
    pub scheduled_jobs: String,
}

impl TableNames {
    pub fn new(prefix: &str) -> Result<Self, DomainError> {
        if !DatabaseConfig::is_valid_table_prefix(prefix) {
            return Err(DomainError::InvalidConfiguration(format!(
                "Invalid table prefix '{}'",
                prefix
            )));
        }

        Ok(Self {
            visitors: format!("{}visitors", prefix),
            visitors_timestamp_idx: format!("{}visitors_timestamp_idx", prefix),
            scheduled_jobs: format!("{}scheduled_jobs", prefix),
        })
    }
}
