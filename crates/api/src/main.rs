use anyhow::Context;

use orgapi_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    orgapi_observability::init();

    let config = ServerConfig::from_env();
    let app = orgapi_api::app::build_default_app();

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
