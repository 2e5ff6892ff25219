mod clock;
mod job_registry;
mod schema_manager;
mod visit_repository;

pub use clock::{Clock, SystemClock};
pub use job_registry::JobRegistry;
pub use schema_manager::SchemaManager;
pub use visit_repository::VisitRepository;
