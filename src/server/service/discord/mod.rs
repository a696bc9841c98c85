//! Outbound Discord REST calls.
//!
//! Everything the bot asks of Discord goes through the `DiscordApi` trait so request
//! handlers can be exercised without a network. `DiscordHttpApi` is the production
//! implementation backed by serenity's `Http` client.

pub mod command;
pub mod directory;
pub mod role;

use async_trait::async_trait;
use serenity::{
    all::{CommandId, CreateCommand, GuildId, Role},
    http::Http,
};
use std::{future::Future, sync::Arc, time::Duration};

use crate::server::error::AppError;

/// Deadline applied to every Discord REST call.
pub const DISCORD_API_TIMEOUT: Duration = Duration::from_secs(3);

/// A slash command as Discord knows it after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCommand {
    pub id: CommandId,
    pub name: String,
}

#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// `GET /guilds/{guild_id}/roles`
    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<Role>, AppError>;

    /// `GET /applications/{application_id}/guilds/{guild_id}/commands`
    async fn guild_commands(&self, guild_id: GuildId) -> Result<Vec<RegisteredCommand>, AppError>;

    /// `PUT /applications/{application_id}/guilds/{guild_id}/commands`
    ///
    /// Replaces every guild command of the application with `commands`.
    async fn set_guild_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<Vec<RegisteredCommand>, AppError>;
}

/// Serenity-backed Discord REST client.
///
/// The wrapped `Http` must have its application id set, otherwise the command
/// endpoints fail.
pub struct DiscordHttpApi {
    http: Arc<Http>,
}

impl DiscordHttpApi {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DiscordApi for DiscordHttpApi {
    async fn guild_roles(&self, guild_id: GuildId) -> Result<Vec<Role>, AppError> {
        tracing::debug!("Fetching roles for guild {}", guild_id);

        with_timeout("guild roles", self.http.get_guild_roles(guild_id)).await
    }

    async fn guild_commands(&self, guild_id: GuildId) -> Result<Vec<RegisteredCommand>, AppError> {
        tracing::debug!("Fetching commands for guild {}", guild_id);

        let commands = with_timeout("guild commands", guild_id.get_commands(&*self.http)).await?;

        Ok(commands
            .into_iter()
            .map(|command| RegisteredCommand {
                id: command.id,
                name: command.name,
            })
            .collect())
    }

    async fn set_guild_commands(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<Vec<RegisteredCommand>, AppError> {
        tracing::debug!(
            "Registering {} commands for guild {}",
            commands.len(),
            guild_id
        );

        let registered = with_timeout(
            "command registration",
            guild_id.set_commands(&*self.http, commands),
        )
        .await?;

        Ok(registered
            .into_iter()
            .map(|command| RegisteredCommand {
                id: command.id,
                name: command.name,
            })
            .collect())
    }
}

async fn with_timeout<T>(
    operation: &str,
    future: impl Future<Output = Result<T, serenity::Error>>,
) -> Result<T, AppError> {
    match tokio::time::timeout(DISCORD_API_TIMEOUT, future).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(AppError::Timeout(operation.to_string())),
    }
}
