use crate::{
    model::interaction::InteractionResponseDto,
    server::{model::interaction::CommandInvocation, util::parse::parse_user_snowflake},
};

use super::{
    InteractionService, INVALID_USER_ID_MESSAGE, PERMISSION_DENIED_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};

impl InteractionService<'_> {
    /// Publicly pings a member on behalf of staff.
    ///
    /// The target is validated before the role lookup, so a missing or malformed id
    /// gets the same answer whether or not the invoker is staff.
    pub async fn mention(&self, command: &CommandInvocation) -> InteractionResponseDto {
        let Some(target) = command.option("user").and_then(parse_user_snowflake) else {
            return InteractionResponseDto::ephemeral(INVALID_USER_ID_MESSAGE);
        };

        match self
            .admin_roles()
            .is_admin(command.guild_id, &command.invoker)
            .await
        {
            Ok(true) => InteractionResponseDto::public(format!(
                "<@{}>, <@{}> from the staff team would like your attention.",
                target, command.invoker.id
            )),
            Ok(false) => {
                tracing::info!(
                    "Denied /mention to {} ({}): missing admin role",
                    command.invoker.tag(),
                    command.invoker.id
                );
                InteractionResponseDto::ephemeral(PERMISSION_DENIED_MESSAGE)
            }
            Err(e) => {
                tracing::error!(
                    "Role lookup for /mention by {} failed: {}",
                    command.invoker.id,
                    e
                );
                InteractionResponseDto::ephemeral(UNKNOWN_ERROR_MESSAGE)
            }
        }
    }
}
