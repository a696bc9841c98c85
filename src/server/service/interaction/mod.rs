//! Slash command handling.
//!
//! `InteractionService` routes a parsed interaction to the handler for its command.
//! Each handler lives in its own file and turns one invocation into exactly one
//! reply; failures of outbound calls are logged and become user-facing messages
//! rather than HTTP errors, since Discord shows nothing useful for a failed webhook.

mod help;
mod link;
mod mention;
mod register;

#[cfg(test)]
mod test;

use crate::{
    model::interaction::InteractionResponseDto,
    server::{
        error::AppError,
        model::{
            command::Command,
            interaction::{CommandInvocation, Interaction},
        },
        service::{
            account::AccountBackend,
            discord::{directory::CommandDirectory, role::AdminRoleService, DiscordApi},
        },
    },
};

pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command!";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred, please try again later.";
pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to use this command.";
pub const INVALID_USER_ID_MESSAGE: &str = "Please provide a valid user ID.";
pub const REGISTRATION_UNAVAILABLE_MESSAGE: &str =
    "Registration is currently unavailable, please try again later.";

pub struct InteractionService<'a> {
    discord: &'a dyn DiscordApi,
    accounts: &'a dyn AccountBackend,
    directory: &'a CommandDirectory,
    admin_role_name: &'a str,
}

impl<'a> InteractionService<'a> {
    pub fn new(
        discord: &'a dyn DiscordApi,
        accounts: &'a dyn AccountBackend,
        directory: &'a CommandDirectory,
        admin_role_name: &'a str,
    ) -> Self {
        Self {
            discord,
            accounts,
            directory,
            admin_role_name,
        }
    }

    /// Produces the single reply owed for an interaction.
    ///
    /// # Returns
    /// - `Ok(InteractionResponseDto)` - PONG for pings, a message for commands
    /// - `Err(AppError::BadRequest)` - Interaction type the bot does not handle
    pub async fn handle(&self, interaction: Interaction) -> Result<InteractionResponseDto, AppError> {
        match interaction {
            Interaction::Ping => Ok(InteractionResponseDto::pong()),
            Interaction::Command(command) => Ok(self.dispatch(&command).await),
            Interaction::Unsupported(kind) => Err(AppError::BadRequest(format!(
                "Unsupported interaction type {}",
                kind
            ))),
        }
    }

    /// Routes a command invocation to its handler by exact name.
    pub async fn dispatch(&self, command: &CommandInvocation) -> InteractionResponseDto {
        tracing::info!(
            "/{} invoked by {} ({})",
            command.name,
            command.invoker.tag(),
            command.invoker.id
        );

        match Command::from_name(&command.name) {
            Some(Command::Help) => self.help(command).await,
            Some(Command::Register) => self.register(command).await,
            Some(Command::Link) => self.link(command),
            Some(Command::Relink) => self.relink(command),
            Some(Command::Mention) => self.mention(command).await,
            None => InteractionResponseDto::public(INVALID_COMMAND_MESSAGE),
        }
    }

    fn admin_roles(&self) -> AdminRoleService<'a> {
        AdminRoleService::new(self.discord, self.admin_role_name)
    }
}
