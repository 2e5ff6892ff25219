pub mod install;
pub mod uninstall;

pub use install::{InstallOutcome, InstallUseCase};
pub use uninstall::{UninstallOutcome, UninstallUseCase};
