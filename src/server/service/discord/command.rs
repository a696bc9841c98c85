use serenity::all::{CreateCommand, CreateCommandOption, GuildId};

use crate::server::{error::AppError, model::command::CommandDefinition};

use super::{directory::CommandDirectory, DiscordApi};

/// Converts static command definitions into Discord registration payloads.
pub fn build_commands(definitions: &[CommandDefinition]) -> Vec<CreateCommand> {
    definitions
        .iter()
        .map(|definition| {
            let options = definition
                .options
                .iter()
                .map(|option| {
                    CreateCommandOption::new(option.kind, option.name, option.description)
                        .required(option.required)
                })
                .collect();

            CreateCommand::new(definition.name)
                .description(definition.description)
                .set_options(options)
        })
        .collect()
}

/// Registers the bot's slash commands in the configured guild.
pub struct CommandRegistrationService<'a> {
    discord: &'a dyn DiscordApi,
    directory: &'a CommandDirectory,
    guild_id: GuildId,
}

impl<'a> CommandRegistrationService<'a> {
    pub fn new(
        discord: &'a dyn DiscordApi,
        directory: &'a CommandDirectory,
        guild_id: GuildId,
    ) -> Self {
        Self {
            discord,
            directory,
            guild_id,
        }
    }

    /// Overwrites the guild's commands with `definitions` and records the new ids.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands Discord reports as registered
    /// - `Err(AppError)` - Discord rejected the request or did not answer in time
    pub async fn register(&self, definitions: &[CommandDefinition]) -> Result<usize, AppError> {
        let registered = self
            .discord
            .set_guild_commands(self.guild_id, build_commands(definitions))
            .await?;

        self.directory.replace(&registered).await;

        tracing::info!(
            "Registered {} commands in guild {}",
            registered.len(),
            self.guild_id
        );

        Ok(registered.len())
    }

    /// Fills the directory with the commands already registered in the guild.
    pub async fn load_existing(&self) -> Result<usize, AppError> {
        let existing = self.discord.guild_commands(self.guild_id).await?;

        self.directory.replace(&existing).await;

        Ok(existing.len())
    }
}
