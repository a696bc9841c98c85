use crate::{
    model::interaction::InteractionResponseDto,
    server::{
        model::interaction::CommandInvocation,
        service::account::{RegistrationOutcome, RegistrationRequest},
        util::validate::validate_credentials,
    },
};

use super::{InteractionService, REGISTRATION_UNAVAILABLE_MESSAGE, UNKNOWN_ERROR_MESSAGE};

impl InteractionService<'_> {
    /// Validates the requested credentials and forwards them to the account backend.
    ///
    /// Success is only reported once the backend has accepted the registration.
    pub async fn register(&self, command: &CommandInvocation) -> InteractionResponseDto {
        let username = command.option("username").unwrap_or_default();
        let password = command.option("password").unwrap_or_default();

        if let Err(e) = validate_credentials(username, password) {
            tracing::info!(
                "Rejected registration from {}: {}",
                command.invoker.id,
                e.code()
            );
            return InteractionResponseDto::ephemeral(e.message());
        }

        let request = RegistrationRequest {
            username: username.to_string(),
            password: password.to_string(),
            discord_id: command.invoker.id,
            discord_username: command.invoker.tag(),
        };

        match self.accounts.register(request).await {
            Ok(RegistrationOutcome::Accepted) => {
                tracing::info!(
                    "Registered account {} for Discord user {}",
                    username,
                    command.invoker.id
                );
                InteractionResponseDto::ephemeral(format!(
                    "Registration successful! You can now log in as {}.",
                    username
                ))
            }
            Ok(RegistrationOutcome::Rejected(status)) => {
                tracing::error!(
                    "Account backend answered {} to registration of {}",
                    status,
                    username
                );
                InteractionResponseDto::ephemeral(UNKNOWN_ERROR_MESSAGE)
            }
            Ok(RegistrationOutcome::Unavailable) => {
                tracing::warn!("Registration attempted but REGISTER_URL is not configured");
                InteractionResponseDto::ephemeral(REGISTRATION_UNAVAILABLE_MESSAGE)
            }
            Err(e) => {
                tracing::error!("Failed to forward registration of {}: {}", username, e);
                InteractionResponseDto::ephemeral(UNKNOWN_ERROR_MESSAGE)
            }
        }
    }
}
