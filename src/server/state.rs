//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use serenity::all::GuildId;
use std::sync::Arc;

use super::{
    middleware::signature::SignatureVerifier,
    service::{account::AccountBackend, discord::directory::CommandDirectory, discord::DiscordApi},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: trait objects and the command directory are
/// reference-counted, the verifier is a 32-byte key.
#[derive(Clone)]
pub struct AppState {
    /// Discord REST client for role lookups and command registration.
    pub discord: Arc<dyn DiscordApi>,

    /// Account backend receiving registrations.
    pub accounts: Arc<dyn AccountBackend>,

    /// Ids of the registered slash commands, used to render help output.
    pub directory: CommandDirectory,

    /// Verifies that interaction requests come from Discord.
    pub verifier: SignatureVerifier,

    /// Guild the bot's commands are registered in.
    pub guild_id: GuildId,

    /// Name of the role granting access to staff-only commands.
    pub admin_role_name: Arc<str>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `discord` - Discord REST client
    /// - `accounts` - Account backend client
    /// - `verifier` - Request signature verifier built from the application's public key
    /// - `guild_id` - Guild commands are registered in
    /// - `admin_role_name` - Name of the staff role
    pub fn new(
        discord: Arc<dyn DiscordApi>,
        accounts: Arc<dyn AccountBackend>,
        verifier: SignatureVerifier,
        guild_id: GuildId,
        admin_role_name: &str,
    ) -> Self {
        Self {
            discord,
            accounts,
            directory: CommandDirectory::new(),
            verifier,
            guild_id,
            admin_role_name: Arc::from(admin_role_name),
        }
    }
}
