use crate::ports::VisitRepository;
use std::sync::Arc;
use tracing::debug;
use visitor_counter_domain::DomainError;

/// Use case: append a visit for every qualifying page load
pub struct RecordVisitUseCase {
    repository: Arc<dyn VisitRepository>,
}

impl RecordVisitUseCase {
    pub fn new(repository: Arc<dyn VisitRepository>) -> Self {
        Self { repository }
    }

    /// The identifier is stored as given; it comes from untrusted request
    /// data and is never parsed.
    pub async fn execute(&self, client_identifier: &str) -> Result<(), DomainError> {
        debug!(client = %client_identifier, "Recording visit");
        self.repository.record(client_identifier).await
    }
}
