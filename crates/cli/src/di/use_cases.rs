use super::Repositories;
use std::sync::Arc;
use visitor_counter_application::{
    ports::{Clock, SystemClock},
    services::CountFormatter,
    use_cases::{
        CountVisitorsUseCase, InstallUseCase, PurgeStaleVisitsUseCase, RecordVisitUseCase,
        UninstallUseCase,
    },
};
use visitor_counter_domain::{Config, DomainError};

pub struct UseCases {
    pub record_visit: Arc<RecordVisitUseCase>,
    pub count_visitors: Arc<CountVisitorsUseCase>,
    pub purge_stale: Arc<PurgeStaleVisitsUseCase>,
    pub install: Arc<InstallUseCase>,
    pub uninstall: Arc<UninstallUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Result<Self, DomainError> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let formatter = Arc::new(CountFormatter::new(&config.visitors.locale)?);

        Ok(Self {
            record_visit: Arc::new(RecordVisitUseCase::new(repos.visits.clone())),
            count_visitors: Arc::new(CountVisitorsUseCase::new(
                repos.visits.clone(),
                clock.clone(),
                formatter,
            )),
            purge_stale: Arc::new(PurgeStaleVisitsUseCase::new(
                repos.visits.clone(),
                clock,
                config.retention_horizon(),
            )),
            install: Arc::new(InstallUseCase::new(
                repos.schema.clone(),
                repos.jobs.clone(),
                config.visitors.purge_interval_secs,
            )),
            uninstall: Arc::new(UninstallUseCase::new(
                repos.schema.clone(),
                repos.jobs.clone(),
            )),
        })
    }
}
