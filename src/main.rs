mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(
        addr = %config.addr,
        login_endpoint = %client::config::login_config().login_endpoint(),
        "login portal listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
