use std::path::PathBuf;
use std::sync::Arc;
use visitor_counter_application::use_cases::{CountVisitorsUseCase, RecordVisitUseCase};

#[derive(Clone)]
pub struct AppState {
    pub record_visit: Arc<RecordVisitUseCase>,
    pub count_visitors: Arc<CountVisitorsUseCase>,
    /// Directory holding `{page}.html` content pages and the `static/` assets.
    pub pages_dir: Arc<PathBuf>,
    pub stylesheet_url: Arc<str>,
}

impl AppState {
    pub fn static_dir(&self) -> PathBuf {
        self.pages_dir.join("static")
    }
}
