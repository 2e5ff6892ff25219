pub mod provisioning;
pub mod visits;

pub use provisioning::{InstallOutcome, InstallUseCase, UninstallOutcome, UninstallUseCase};
pub use visits::{CountVisitorsUseCase, PurgeStaleVisitsUseCase, RecordVisitUseCase};
