use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VisitorsConfig {
    /// Age in days after which visit records are purged. Must cover the
    /// largest counting window.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    /// Interval used when the purge trigger is first registered.
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,

    /// BCP-47 tag driving digit grouping of rendered counts.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Linked from the diagnostic rendered for an unknown scope.
    #[serde(default = "default_stylesheet_url")]
    pub stylesheet_url: String,
}

impl Default for VisitorsConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            purge_interval_secs: default_purge_interval_secs(),
            locale: default_locale(),
            stylesheet_url: default_stylesheet_url(),
        }
    }
}

fn default_retention_days() -> u32 {
    30
}

fn default_purge_interval_secs() -> u64 {
    86_400
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_stylesheet_url() -> String {
    "/static/visitors.css".to_string()
}
