pub mod retention;
pub mod runner;

pub use retention::VisitRetentionJob;
pub use runner::JobRunner;
