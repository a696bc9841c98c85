use serenity::all::{GuildId, Role, RoleId};

use crate::server::{error::AppError, model::interaction::Invoker};

use super::DiscordApi;

/// Decides whether an invoker holds the admin role.
///
/// Roles are fetched from Discord on every check; nothing is cached.
pub struct AdminRoleService<'a> {
    discord: &'a dyn DiscordApi,
    admin_role_name: &'a str,
}

impl<'a> AdminRoleService<'a> {
    pub fn new(discord: &'a dyn DiscordApi, admin_role_name: &'a str) -> Self {
        Self {
            discord,
            admin_role_name,
        }
    }

    /// Checks the invoker's roles against the guild's admin role.
    ///
    /// Invokers outside a guild, or without any roles, are never admins and no
    /// request is made to Discord for them.
    ///
    /// # Returns
    /// - `Ok(true)` - One of the invoker's roles is named like the admin role
    /// - `Ok(false)` - No admin role on the invoker
    /// - `Err(AppError)` - Role lookup failed or timed out
    pub async fn is_admin(
        &self,
        guild_id: Option<GuildId>,
        invoker: &Invoker,
    ) -> Result<bool, AppError> {
        let Some(guild_id) = guild_id else {
            return Ok(false);
        };
        if invoker.role_ids.is_empty() {
            return Ok(false);
        }

        let roles = self.discord.guild_roles(guild_id).await?;
        let admin = has_admin_role(&roles, self.admin_role_name, &invoker.role_ids);

        tracing::debug!(
            "User {} admin check in guild {}: {}",
            invoker.id,
            guild_id,
            admin
        );

        Ok(admin)
    }
}

/// Returns true when any role named `admin_role_name` is in `member_roles`.
///
/// Guilds may hold several roles with the same name; any of them grants access.
pub fn has_admin_role(roles: &[Role], admin_role_name: &str, member_roles: &[RoleId]) -> bool {
    roles
        .iter()
        .filter(|role| role.name == admin_role_name)
        .any(|role| member_roles.contains(&role.id))
}
