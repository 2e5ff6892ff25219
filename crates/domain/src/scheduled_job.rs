/// Registration name of the recurring retention sweep.
pub const PURGE_JOB_NAME: &str = "visitors_purge_stale";

pub const DAILY_INTERVAL_SECS: u64 = 86_400;

/// A recurring trigger known to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledJob {
    pub name: String,
    pub interval_secs: u64,
    pub registered_at: Option<String>,
}

impl ScheduledJob {
    pub fn new(name: impl Into<String>, interval_secs: u64) -> Self {
        Self {
            name: name.into(),
            interval_secs,
            registered_at: None,
        }
    }

    pub fn daily(name: impl Into<String>) -> Self {
        Self::new(name, DAILY_INTERVAL_SECS)
    }
}
