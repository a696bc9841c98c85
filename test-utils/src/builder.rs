use serde_json::{json, Map, Value};

use crate::fixture::{TEST_GUILD_ID, TEST_USERNAME, TEST_USER_ID};

/// Builder for Discord interaction webhook payloads.
///
/// Produces the JSON Discord POSTs to the interactions endpoint, including the
/// fields the bot ignores (`id`, `token`, `version`, ...) so tests exercise the
/// same deserialization path as production traffic.
///
/// # Example
///
/// ```rust,ignore
/// let payload = InteractionBuilder::command("register")
///     .option("username", "Val1dname")
///     .option("password", "Val1dpassw0rd")
///     .role(fixture::STAFF_ROLE_ID)
///     .build();
/// ```
pub struct InteractionBuilder {
    kind: u8,
    name: Option<String>,
    options: Vec<(String, Value)>,
    guild_id: Option<u64>,
    user_id: u64,
    username: String,
    discriminator: String,
    roles: Vec<u64>,
}

impl InteractionBuilder {
    /// PING interaction Discord sends to validate the endpoint.
    pub fn ping() -> Self {
        Self::of_kind(1)
    }

    /// Slash command invoked in the test guild by the test user with no roles.
    pub fn command(name: &str) -> Self {
        let mut builder = Self::of_kind(2);
        builder.name = Some(name.to_string());
        builder
    }

    /// Interaction of an arbitrary type, e.g. 3 for message components.
    pub fn of_kind(kind: u8) -> Self {
        Self {
            kind,
            name: None,
            options: Vec::new(),
            guild_id: Some(TEST_GUILD_ID),
            user_id: TEST_USER_ID,
            username: TEST_USERNAME.to_string(),
            discriminator: "0".to_string(),
            roles: Vec::new(),
        }
    }

    /// Adds a command option. Options keep insertion order.
    pub fn option(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.options.push((name.to_string(), value.into()));
        self
    }

    pub fn user(mut self, user_id: u64, username: &str) -> Self {
        self.user_id = user_id;
        self.username = username.to_string();
        self
    }

    pub fn discriminator(mut self, discriminator: &str) -> Self {
        self.discriminator = discriminator.to_string();
        self
    }

    /// Gives the invoking member a role.
    pub fn role(mut self, role_id: u64) -> Self {
        self.roles.push(role_id);
        self
    }

    /// Moves the interaction out of the guild into a direct message.
    ///
    /// The invoker is then sent as `user` instead of `member`, and has no roles.
    pub fn direct_message(mut self) -> Self {
        self.guild_id = None;
        self.roles.clear();
        self
    }

    pub fn build(self) -> Value {
        let mut payload = Map::new();
        payload.insert("id".to_string(), json!("1000000000000000001"));
        payload.insert("application_id".to_string(), json!("1000000000000000002"));
        payload.insert("type".to_string(), json!(self.kind));
        payload.insert("token".to_string(), json!("interaction-token"));
        payload.insert("version".to_string(), json!(1));

        if let Some(name) = self.name {
            let options: Vec<Value> = self
                .options
                .into_iter()
                .map(|(name, value)| json!({ "name": name, "type": option_type(&value), "value": value }))
                .collect();

            payload.insert(
                "data".to_string(),
                json!({
                    "id": "1000000000000000003",
                    "name": name,
                    "type": 1,
                    "options": options,
                }),
            );
        }

        let user = json!({
            "id": self.user_id.to_string(),
            "username": self.username,
            "discriminator": self.discriminator,
        });

        match self.guild_id {
            Some(guild_id) => {
                payload.insert("guild_id".to_string(), json!(guild_id.to_string()));
                let roles: Vec<String> = self.roles.iter().map(u64::to_string).collect();
                payload.insert("member".to_string(), json!({ "roles": roles, "user": user }));
            }
            None => {
                payload.insert("user".to_string(), user);
            }
        }

        Value::Object(payload)
    }
}

/// Discord application command option type for a JSON value.
fn option_type(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 5,
        Value::Number(n) if n.is_f64() => 10,
        Value::Number(_) => 4,
        _ => 3,
    }
}
