use serenity::http::{Http, HttpBuilder};
use std::{sync::Arc, time::Duration};

use crate::server::{
    config::Config,
    error::AppError,
    model::command::COMMANDS,
    service::discord::command::CommandRegistrationService,
    state::AppState,
};

/// Deadline for calls to the account backend.
const HTTP_CLIENT_TIMEOUT: Duration = Duration::from_secs(3);

/// Builds the HTTP client used for the account backend.
///
/// Redirects are disabled so a misconfigured or compromised backend cannot bounce
/// submitted credentials to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_CLIENT_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the serenity REST client authenticated as the bot.
///
/// The application id is set up front since every command endpoint is scoped to it.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    let http = HttpBuilder::new(&config.discord_token)
        .application_id(config.discord_application_id)
        .build();

    Arc::new(http)
}

/// Loads the ids of commands registered by a previous run into the command directory.
///
/// Failure is not fatal: help output falls back to plain `/name` mentions until
/// `/register_commands` is called.
pub async fn load_registered_commands(state: &AppState) {
    let service =
        CommandRegistrationService::new(state.discord.as_ref(), &state.directory, state.guild_id);

    match service.load_existing().await {
        Ok(count) => tracing::info!("Loaded {} registered commands", count),
        Err(e) => tracing::warn!("Could not load registered commands: {}", e),
    }

    if state.directory.len().await < COMMANDS.len() {
        tracing::info!("Some commands are not registered yet, call /register_commands");
    }
}
