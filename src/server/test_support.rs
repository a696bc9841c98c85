//! Stub implementations of the outbound seams for in-crate tests.

use async_trait::async_trait;
use serenity::all::{CommandId, CreateCommand, GuildId, Role};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use test_utils::{fixture, signing::TestSigner};

use crate::{
    model::interaction::InteractionDto,
    server::{
        error::AppError,
        middleware::signature::SignatureVerifier,
        model::interaction::{CommandInvocation, Interaction},
        service::{
            account::{AccountBackend, RegistrationOutcome, RegistrationRequest},
            discord::{DiscordApi, RegisteredCommand},
        },
        state::AppState,
    },
};

/// Discord API answering from memory.
#[derive(Default)]
pub struct StubDiscordApi {
    pub roles: Vec<Role>,
    pub existing_commands: Vec<RegisteredCommand>,
    /// Every call fails with a timeout when set.
    pub fail: bool,
    pub role_lookups: AtomicUsize,
    pub registrations: AtomicUsize,
}

impl StubDiscordApi {
    /// Guild with the roles from `test_utils::fixture::guild_roles`.
    pub fn with_guild_roles() -> Self {
        Self {
            roles: fixture::guild_roles(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn role_lookups(&self) -> usize {
        self.role_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscordApi for StubDiscordApi {
    async fn guild_roles(&self, _guild_id: GuildId) -> Result<Vec<Role>, AppError> {
        self.role_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Timeout("guild roles".to_string()));
        }
        Ok(self.roles.clone())
    }

    async fn guild_commands(&self, _guild_id: GuildId) -> Result<Vec<RegisteredCommand>, AppError> {
        if self.fail {
            return Err(AppError::Timeout("guild commands".to_string()));
        }
        Ok(self.existing_commands.clone())
    }

    async fn set_guild_commands(
        &self,
        _guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<Vec<RegisteredCommand>, AppError> {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Timeout("command registration".to_string()));
        }

        // Discord assigns ids; number them in submission order.
        Ok(commands
            .iter()
            .enumerate()
            .map(|(index, command)| {
                let payload = serde_json::to_value(command).unwrap_or_default();
                RegisteredCommand {
                    id: CommandId::new(1_000 + index as u64),
                    name: payload["name"].as_str().unwrap_or_default().to_string(),
                }
            })
            .collect())
    }
}

/// Account backend recording submissions and answering with a fixed outcome.
pub struct StubAccountBackend {
    /// `None` makes every submission fail like a transport error.
    pub outcome: Option<RegistrationOutcome>,
    pub requests: Mutex<Vec<RegistrationRequest>>,
}

impl StubAccountBackend {
    pub fn answering(outcome: RegistrationOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            outcome: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RegistrationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountBackend for StubAccountBackend {
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, AppError> {
        self.requests.lock().unwrap().push(request);
        self.outcome
            .ok_or_else(|| AppError::Timeout("account backend".to_string()))
    }
}

/// Parses a payload from `test_utils::builder::InteractionBuilder` into a command.
pub fn invocation(payload: serde_json::Value) -> CommandInvocation {
    let dto: InteractionDto = serde_json::from_value(payload).unwrap();
    match Interaction::try_from(dto).unwrap() {
        Interaction::Command(command) => command,
        other => panic!("expected a command interaction, got {:?}", other),
    }
}

/// Application state wired to stubs and verifying with `signer`'s key.
pub fn test_state(
    discord: Arc<StubDiscordApi>,
    accounts: Arc<StubAccountBackend>,
    signer: &TestSigner,
) -> AppState {
    AppState::new(
        discord,
        accounts,
        SignatureVerifier::new(signer.public_key()),
        GuildId::new(fixture::TEST_GUILD_ID),
        "Staff",
    )
}
