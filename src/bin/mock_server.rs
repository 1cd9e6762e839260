use anyhow::{Context, Result};
use registration_form::config::Config;
use registration_form::server::{self, REGISTER_PATH};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("registration_form=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let addr = format!("127.0.0.1:{}", config.mock_server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Mock registration endpoint at http://{}{}", addr, REGISTER_PATH);
    server::serve(listener).await.context("Server error")?;
    Ok(())
}
