use crate::di::{Repositories, UseCases};
use crate::server;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use visitor_counter_api::AppState;
use visitor_counter_application::ports::{JobRegistry, SchemaManager};
use visitor_counter_domain::{Config, PURGE_JOB_NAME};
use visitor_counter_jobs::{JobRunner, VisitRetentionJob};

pub async fn serve(config: &Config, repos: &Repositories, use_cases: &UseCases) -> anyhow::Result<()> {
    info!("Starting Visitor Counter v{}", env!("CARGO_PKG_VERSION"));

    if !repos.schema.tables_exist().await? {
        warn!("Visitors table is missing; run `visitor-counter install` before serving pages");
    }

    let shutdown = CancellationToken::new();
    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    match repos.jobs.find(PURGE_JOB_NAME).await? {
        Some(job) => {
            runner = runner.with_visit_retention(
                VisitRetentionJob::new(use_cases.purge_stale.clone())
                    .with_interval(job.interval_secs),
            );
        }
        None => {
            warn!(
                job = PURGE_JOB_NAME,
                "Purge trigger is not registered; stale visits will not be swept"
            );
        }
    }
    runner.start().await;

    let state = AppState {
        record_visit: use_cases.record_visit.clone(),
        count_visitors: use_cases.count_visitors.clone(),
        pages_dir: Arc::new(PathBuf::from(&config.server.pages_dir)),
        stylesheet_url: Arc::from(config.visitors.stylesheet_url.as_str()),
    };

    let ip: IpAddr = config.server.bind_address.parse()?;
    let web_addr = SocketAddr::new(ip, config.server.web_port);

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        signal_token.cancel();
    });

    server::start_web_server(web_addr, state, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}

pub async fn install(use_cases: &UseCases) -> anyhow::Result<()> {
    let outcome = use_cases.install.execute().await?;
    if outcome.trigger_registered {
        println!(
            "Installed: table created, purge trigger registered (every {}s)",
            outcome.purge_interval_secs
        );
    } else {
        println!(
            "Already installed: purge trigger runs every {}s",
            outcome.purge_interval_secs
        );
    }
    Ok(())
}

pub async fn uninstall(use_cases: &UseCases) -> anyhow::Result<()> {
    let outcome = use_cases.uninstall.execute().await?;
    if outcome.trigger_removed {
        println!("Uninstalled: purge trigger removed, table dropped");
    } else {
        println!("Uninstalled: table dropped (no purge trigger was registered)");
    }
    Ok(())
}

pub async fn purge(use_cases: &UseCases) -> anyhow::Result<()> {
    let deleted = use_cases.purge_stale.execute().await?;
    println!("Purged {} stale visits", deleted);
    Ok(())
}

pub async fn count(use_cases: &UseCases, scope: Option<&str>) -> anyhow::Result<()> {
    let count = use_cases.count_visitors.execute(scope).await?;
    println!("{}", count.formatted);
    Ok(())
}
