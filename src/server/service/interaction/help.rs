use crate::{
    model::interaction::InteractionResponseDto,
    server::model::{
        command::{Visibility, COMMANDS},
        interaction::CommandInvocation,
    },
};

use super::InteractionService;

impl InteractionService<'_> {
    /// Lists the commands the invoker may use, visible only to them.
    ///
    /// A failed role lookup is not worth failing help over; the invoker just sees
    /// the public commands.
    pub async fn help(&self, command: &CommandInvocation) -> InteractionResponseDto {
        let admin = match self
            .admin_roles()
            .is_admin(command.guild_id, &command.invoker)
            .await
        {
            Ok(admin) => admin,
            Err(e) => {
                tracing::error!(
                    "Role lookup for /help by {} failed, showing public commands: {}",
                    command.invoker.id,
                    e
                );
                false
            }
        };

        InteractionResponseDto::ephemeral(self.help_text(admin).await)
    }

    /// One line per visible command: mention, two spaces, description.
    pub async fn help_text(&self, admin: bool) -> String {
        let mut lines = Vec::new();

        for definition in COMMANDS
            .iter()
            .filter(|definition| admin || definition.visibility == Visibility::Public)
        {
            let mention = self.directory.mention(definition.name).await;
            let suffix = match definition.visibility {
                Visibility::Admin => " (staff only)",
                Visibility::Public => "",
            };
            lines.push(format!("{}  {}{}", mention, definition.description, suffix));
        }

        lines.join("\n")
    }
}
