use axum::extract::State;

use crate::server::{
    model::command::COMMANDS, service::discord::command::CommandRegistrationService,
    state::AppState,
};

pub const COMMANDS_REGISTERED_MESSAGE: &str = "Commands have been registered";

/// Registers the bot's slash commands in the configured guild.
///
/// Always answers 200 with a plain text status so it can be triggered from a
/// browser; a failure names the HTTP status Discord returned.
pub async fn register_commands(State(state): State<AppState>) -> String {
    let service =
        CommandRegistrationService::new(state.discord.as_ref(), &state.directory, state.guild_id);

    match service.register(COMMANDS).await {
        Ok(_) => COMMANDS_REGISTERED_MESSAGE.to_string(),
        Err(e) => {
            tracing::error!("Failed to register commands: {}", e);

            let code = e
                .upstream_status()
                .map(|status| status.to_string())
                .unwrap_or_else(|| "UNKNOWN".to_string());

            format!("{} error from Discord", code)
        }
    }
}
