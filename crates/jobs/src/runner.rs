use crate::VisitRetentionJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

impl SpawnableJob for VisitRetentionJob {
    fn with_cancellation(self, token: CancellationToken) -> Self {
        self.with_cancellation(token)
    }

    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.start().await })
    }
}

fn spawn_job<J: SpawnableJob>(job: Option<J>, shutdown: &Option<CancellationToken>) -> bool {
    match job {
        Some(job) => {
            let job = match shutdown {
                Some(token) => job.with_cancellation(token.clone()),
                None => job,
            };
            Arc::new(job).start_job();
            true
        }
        None => false,
    }
}

pub struct JobRunner {
    visit_retention: Option<VisitRetentionJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            visit_retention: None,
            shutdown: None,
        }
    }

    pub fn with_visit_retention(mut self, job: VisitRetentionJob) -> Self {
        self.visit_retention = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    /// Spawns every configured job and returns how many were started.
    pub async fn start(self) -> usize {
        info!("Starting background job runner");

        let started = usize::from(spawn_job(self.visit_retention, &self.shutdown));

        info!(started, "Background jobs started");
        started
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
