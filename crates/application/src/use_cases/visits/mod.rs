pub mod count_visitors;
pub mod purge_stale_visits;
pub mod record_visit;

pub use count_visitors::CountVisitorsUseCase;
pub use purge_stale_visits::PurgeStaleVisitsUseCase;
pub use record_visit::RecordVisitUseCase;
