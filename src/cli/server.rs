use std::sync::Arc;

use anyhow::Result;
use sequenceit::{
    config::Config,
    middleware::{cache_control_middleware, minify_html_middleware},
    routes::AppState,
};
use sequenceit_notification::{
    BackendChannel, DeliveryChannel, Dispatcher, EmailService, RelayChannel,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

#[tracing::instrument(skip_all)]
pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("starting sequenceit server");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // All writes go through a single connection, reads get their own pool.
    let write_pool = sequenceit::db::create_write_pool(&config.database.url).await?;
    sequenceit::db::migrate(&write_pool).await?;
    let read_pool =
        sequenceit::db::create_read_pool(&config.database.url, config.database.max_connections)
            .await?;

    sequenceit::user::Command(write_pool.clone())
        .ensure_root(&config.root.email, &config.root.password)
        .await?;

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;
    let endpoint = config.contact.endpoint_for(local_addr);
    tracing::info!(endpoint = %endpoint, "smtp channel posts to send-email endpoint");

    let client = reqwest::Client::builder()
        .user_agent(concat!("sequenceit/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let channels: Vec<Arc<dyn DeliveryChannel>> = vec![
        Arc::new(RelayChannel::new(client.clone(), config.relay.clone())),
        Arc::new(BackendChannel::new(client, endpoint)),
    ];
    let dispatcher = Dispatcher::new(channels);
    let mailer = Arc::new(EmailService::new(&config.email)?);

    let state = AppState::new(
        config,
        read_pool.clone(),
        write_pool.clone(),
        dispatcher,
        mailer,
    );

    let app = sequenceit::routes::router(state)
        .layer(axum::middleware::from_fn(cache_control_middleware))
        .layer(axum::middleware::map_response(minify_html_middleware))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    tracing::info!("server listening on {local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("closing database pools");
    read_pool.close().await;
    write_pool.close().await;

    tracing::info!("graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("received SIGTERM signal");
        },
    }

    tracing::info!("starting graceful shutdown");
}
