mod model;
mod server;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    middleware::signature::SignatureVerifier,
    router,
    service::{account::HttpAccountBackend, discord::DiscordHttpApi},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let discord_http = startup::setup_discord_http(&config);

    if config.register_url.is_none() {
        tracing::warn!("REGISTER_URL is not set, /register will report registration as unavailable");
    }

    let state = AppState::new(
        Arc::new(DiscordHttpApi::new(discord_http)),
        Arc::new(HttpAccountBackend::new(
            http_client,
            config.register_url.clone(),
        )),
        SignatureVerifier::new(config.discord_public_key),
        config.discord_guild_id,
        &config.admin_role_name,
    );

    startup::load_registered_commands(&state).await;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Application is running on port {}", config.port);

    axum::serve(listener, router::router(state)).await?;

    Ok(())
}
