use serenity::all::{GuildId, RoleId, UserId};

use crate::{
    model::interaction::{
        InteractionDto, UserDto, INTERACTION_TYPE_APPLICATION_COMMAND, INTERACTION_TYPE_PING,
    },
    server::{error::AppError, util::parse::parse_snowflake},
};

/// Interaction received from Discord after signature verification.
#[derive(Debug, Clone)]
pub enum Interaction {
    Ping,
    Command(CommandInvocation),
    /// Components, autocomplete and modals are not used by this bot.
    Unsupported(u8),
}

/// A slash command invocation.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    pub name: String,
    /// Option values in the order Discord sent them.
    pub options: Vec<(String, String)>,
    pub guild_id: Option<GuildId>,
    pub invoker: Invoker,
}

impl CommandInvocation {
    /// Returns the first option with the given name.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(option, _)| option == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The user who invoked the command.
#[derive(Debug, Clone)]
pub struct Invoker {
    pub id: UserId,
    pub username: String,
    pub discriminator: Option<String>,
    /// Empty outside of guilds.
    pub role_ids: Vec<RoleId>,
}

impl Invoker {
    /// Username with the legacy `#discriminator` suffix when the account still has one.
    pub fn tag(&self) -> String {
        match self.discriminator.as_deref() {
            Some(discriminator) if discriminator != "0" && !discriminator.is_empty() => {
                format!("{}#{}", self.username, discriminator)
            }
            _ => self.username.clone(),
        }
    }

    fn from_dto(user: UserDto, roles: &[String]) -> Result<Self, AppError> {
        let role_ids = roles
            .iter()
            .map(|role| parse_snowflake(role).map(RoleId::new))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: UserId::new(parse_snowflake(&user.id)?),
            username: user.username,
            discriminator: user.discriminator,
            role_ids,
        })
    }
}

impl TryFrom<InteractionDto> for Interaction {
    type Error = AppError;

    fn try_from(dto: InteractionDto) -> Result<Self, Self::Error> {
        match dto.kind {
            INTERACTION_TYPE_PING => Ok(Self::Ping),
            INTERACTION_TYPE_APPLICATION_COMMAND => {
                let Some(data) = dto.data else {
                    return Err(AppError::BadRequest(
                        "Application command interaction without data".to_string(),
                    ));
                };

                let invoker = match (dto.member, dto.user) {
                    (Some(member), _) => Invoker::from_dto(member.user, &member.roles)?,
                    (None, Some(user)) => Invoker::from_dto(user, &[])?,
                    (None, None) => {
                        return Err(AppError::BadRequest(
                            "Interaction has neither member nor user".to_string(),
                        ))
                    }
                };

                let guild_id = dto
                    .guild_id
                    .as_deref()
                    .map(parse_snowflake)
                    .transpose()?
                    .map(GuildId::new);

                let options = data
                    .options
                    .iter()
                    .filter_map(|option| {
                        option
                            .value_as_string()
                            .map(|value| (option.name.clone(), value))
                    })
                    .collect();

                Ok(Self::Command(CommandInvocation {
                    name: data.name,
                    options,
                    guild_id,
                    invoker,
                }))
            }
            other => Ok(Self::Unsupported(other)),
        }
    }
}
