//! Wire format of Discord interaction webhooks.
//!
//! Only the fields the bot reads are modelled; everything else in Discord's payload
//! is ignored during deserialization. Snowflake ids are kept as strings here and
//! parsed into serenity id types when the payload is converted to the domain model.

use serde::{Deserialize, Serialize};

/// Interaction type sent by Discord to validate the endpoint.
pub const INTERACTION_TYPE_PING: u8 = 1;
/// Interaction type for slash command invocations.
pub const INTERACTION_TYPE_APPLICATION_COMMAND: u8 = 2;

/// Response type acknowledging a PING.
pub const RESPONSE_TYPE_PONG: u8 = 1;
/// Response type replying with a message in the invoking channel.
pub const RESPONSE_TYPE_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

/// Message flag making a reply visible only to the invoking user.
pub const MESSAGE_FLAG_EPHEMERAL: u64 = 1 << 6;

/// Inbound interaction payload.
#[derive(Deserialize, Debug, Clone)]
pub struct InteractionDto {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<CommandDataDto>,
    #[serde(default)]
    pub guild_id: Option<String>,
    /// Present when the command is invoked inside a guild.
    #[serde(default)]
    pub member: Option<MemberDto>,
    /// Present when the command is invoked in a direct message.
    #[serde(default)]
    pub user: Option<UserDto>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CommandDataDto {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOptionDto>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CommandOptionDto {
    pub name: String,
    /// Strings, integers, booleans and snowflakes all arrive here.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl CommandOptionDto {
    /// Renders the option value as text.
    ///
    /// Returns `None` for a missing value or for JSON values without a sensible
    /// scalar representation (arrays, objects, null).
    pub fn value_as_string(&self) -> Option<String> {
        match self.value.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct MemberDto {
    pub user: UserDto,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: Option<String>,
}

/// Outbound interaction response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InteractionResponseDto {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageDataDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageDataDto {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl InteractionResponseDto {
    pub fn pong() -> Self {
        Self {
            kind: RESPONSE_TYPE_PONG,
            data: None,
        }
    }

    /// Message visible to everyone in the channel.
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            kind: RESPONSE_TYPE_CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(MessageDataDto {
                content: content.into(),
                flags: None,
            }),
        }
    }

    /// Message visible only to the invoking user.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            kind: RESPONSE_TYPE_CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(MessageDataDto {
                content: content.into(),
                flags: Some(MESSAGE_FLAG_EPHEMERAL),
            }),
        }
    }

    #[cfg(test)]
    pub fn is_ephemeral(&self) -> bool {
        self.data
            .as_ref()
            .and_then(|d| d.flags)
            .is_some_and(|flags| flags & MESSAGE_FLAG_EPHEMERAL != 0)
    }

    #[cfg(test)]
    pub fn content(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pong_serializes_without_data() {
        let value = serde_json::to_value(InteractionResponseDto::pong()).unwrap();
        assert_eq!(value, json!({ "type": 1 }));
    }

    #[test]
    fn ephemeral_reply_sets_flag_64() {
        let value = serde_json::to_value(InteractionResponseDto::ephemeral("hi")).unwrap();
        assert_eq!(
            value,
            json!({ "type": 4, "data": { "content": "hi", "flags": 64 } })
        );
    }

    #[test]
    fn public_reply_omits_flags() {
        let response = InteractionResponseDto::public("hello");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({ "type": 4, "data": { "content": "hello" } }));
        assert!(!response.is_ephemeral());
    }

    #[test]
    fn option_values_render_as_text() {
        let string = CommandOptionDto {
            name: "username".to_string(),
            value: Some(json!("someone")),
        };
        let number = CommandOptionDto {
            name: "count".to_string(),
            value: Some(json!(42)),
        };
        let missing = CommandOptionDto {
            name: "user".to_string(),
            value: None,
        };

        assert_eq!(string.value_as_string().as_deref(), Some("someone"));
        assert_eq!(number.value_as_string().as_deref(), Some("42"));
        assert_eq!(missing.value_as_string(), None);
    }

    #[test]
    fn deserializes_guild_command_payload() {
        let payload = json!({
            "id": "1",
            "application_id": "2",
            "type": 2,
            "token": "abc",
            "version": 1,
            "guild_id": "300",
            "data": {
                "id": "4",
                "name": "register",
                "type": 1,
                "options": [
                    { "name": "username", "type": 3, "value": "Val1dname" }
                ]
            },
            "member": {
                "roles": ["10", "11"],
                "user": { "id": "500", "username": "someone", "discriminator": "0" }
            }
        });

        let interaction: InteractionDto = serde_json::from_value(payload).unwrap();

        assert_eq!(interaction.kind, INTERACTION_TYPE_APPLICATION_COMMAND);
        let data = interaction.data.unwrap();
        assert_eq!(data.name, "register");
        assert_eq!(data.options.len(), 1);
        let member = interaction.member.unwrap();
        assert_eq!(member.roles, vec!["10", "11"]);
        assert_eq!(member.user.username, "someone");
    }
}
