use crate::{
    model::interaction::InteractionResponseDto, server::model::interaction::CommandInvocation,
};

use super::InteractionService;

impl InteractionService<'_> {
    pub fn link(&self, command: &CommandInvocation) -> InteractionResponseDto {
        acknowledge(command, "Link")
    }

    pub fn relink(&self, command: &CommandInvocation) -> InteractionResponseDto {
        acknowledge(command, "Relink")
    }
}

// TODO: forward link and relink to the account backend once it exposes a link endpoint.
fn acknowledge(command: &CommandInvocation, action: &str) -> InteractionResponseDto {
    let username = command.option("username").unwrap_or_default();
    let issuer = command.invoker.tag();

    tracing::info!(
        "{} requested by {} ({}) for username {}",
        action,
        issuer,
        command.invoker.id,
        username
    );

    InteractionResponseDto::ephemeral(format!(
        "{} {} command received. Username: {}",
        issuer, action, username
    ))
}
