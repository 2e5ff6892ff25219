use serde::{Deserialize, Serialize};
use visitor_counter_domain::VisitorCount;

#[derive(Deserialize, Debug, Default)]
pub struct VisitorsQuery {
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VisitorCountResponse {
    pub scope: String,
    pub count: u64,
    pub formatted: String,
}

impl From<VisitorCount> for VisitorCountResponse {
    fn from(count: VisitorCount) -> Self {
        Self {
            scope: count.window.to_string(),
            count: count.value,
            formatted: count.formatted,
        }
    }
}
