use std::sync::Arc;

use test_utils::{builder::InteractionBuilder, fixture};

use crate::{
    model::interaction::InteractionResponseDto,
    server::{
        service::{
            account::RegistrationOutcome, discord::directory::CommandDirectory,
            interaction::InteractionService,
        },
        test_support::{invocation, StubAccountBackend, StubDiscordApi},
    },
};


/// Stubs plus a directory, owned so tests can borrow them into a service.
struct Harness {
    discord: Arc<StubDiscordApi>,
    accounts: Arc<StubAccountBackend>,
    directory: CommandDirectory,
}

impl Harness {
    fn new(discord: StubDiscordApi, accounts: StubAccountBackend) -> Self {
        Self {
            discord: Arc::new(discord),
            accounts: Arc::new(accounts),
            directory: CommandDirectory::new(),
        }
    }

    /// Guild with a Staff role and a backend accepting every registration.
    fn standard() -> Self {
        Self::new(
            StubDiscordApi::with_guild_roles(),
            StubAccountBackend::answering(RegistrationOutcome::Accepted),
        )
    }

    fn service(&self) -> InteractionService<'_> {
        InteractionService::new(
            self.discord.as_ref(),
            self.accounts.as_ref(),
            &self.directory,
            "Staff",
        )
    }

    async fn run(&self, builder: InteractionBuilder) -> InteractionResponseDto {
        self.service().dispatch(&invocation(builder.build())).await
    }
}

fn staff_command(name: &str) -> InteractionBuilder {
    InteractionBuilder::command(name)
        .role(fixture::MEMBER_ROLE_ID)
        .role(fixture::STAFF_ROLE_ID)
}

fn member_command(name: &str) -> InteractionBuilder {
    InteractionBuilder::command(name).role(fixture::MEMBER_ROLE_ID)
}
