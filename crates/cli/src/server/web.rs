use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;
use visitor_counter_api::{create_app, AppState};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        site_url = format!("http://{}", bind_addr),
        api_url = format!("http://{}/api", bind_addr),
        pages_dir = %state.pages_dir.display(),
        "Starting web server"
    );

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { shutdown.cancelled().await })
    .await?;

    Ok(())
}
