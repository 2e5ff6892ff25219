use crate::ports::{Clock, VisitRepository};
use crate::services::CountFormatter;
use std::sync::Arc;
use tracing::debug;
use visitor_counter_domain::{DomainError, TimeWindow, VisitorCount};

pub struct CountVisitorsUseCase {
    repository: Arc<dyn VisitRepository>,
    clock: Arc<dyn Clock>,
    formatter: Arc<CountFormatter>,
}

impl CountVisitorsUseCase {
    pub fn new(
        repository: Arc<dyn VisitRepository>,
        clock: Arc<dyn Clock>,
        formatter: Arc<CountFormatter>,
    ) -> Self {
        Self {
            repository,
            clock,
            formatter,
        }
    }

    /// Counts every visit (not distinct identifiers) newer than
    /// `now - window`. An unknown scope fails with
    /// `DomainError::UnknownWindow` before storage is touched.
    pub async fn execute(&self, scope: Option<&str>) -> Result<VisitorCount, DomainError> {
        let window = TimeWindow::resolve(scope)?;
        let cutoff = self.clock.now() - window.duration();

        let value = self.repository.count_since(cutoff).await?;
        debug!(window = %window, value, "Visitors counted");

        Ok(VisitorCount {
            window,
            value,
            formatted: self.formatter.format(value),
        })
    }
}
