mod api;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use carefind_geo::{PostalResolver, RequestPacer};

use crate::api::{build_app, default_rate_limit_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = carefind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let records = carefind_data::load_records(&config.data_path)?;
    let resolver = PostalResolver::new(
        &config.geocoder_base_url,
        &config.geocoder_user_agent,
        config.geocoder_timeout_secs,
    )?;
    let pacer = RequestPacer::new(Duration::from_millis(config.geocoder_min_interval_ms));

    let state = AppState {
        records: Arc::new(records),
        resolver: Arc::new(resolver),
        pacer: Arc::new(pacer),
    };
    let app = build_app(state, default_rate_limit_state());

    tracing::info!(bind_addr = %config.bind_addr, "starting carefind server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
