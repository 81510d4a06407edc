use anyhow::Context;
use mettwasser_api::{configuration::get_configuration, router, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = get_configuration().context("Failed to load configuration")?;
    let address = format!(
        "{}:{}",
        settings.application.host, settings.application.port
    );

    let state = AppState::new(settings).context("Failed to build the HTTP client")?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
