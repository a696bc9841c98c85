use serenity::all::{ApplicationId, GuildId};
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3131;
const DEFAULT_ADMIN_ROLE_NAME: &str = "Staff";

pub struct Config {
    pub discord_token: String,
    /// Ed25519 public key of the application, decoded from hex.
    pub discord_public_key: [u8; 32],
    pub discord_application_id: ApplicationId,
    pub discord_guild_id: GuildId,

    pub port: u16,

    /// Account backend receiving `/register` submissions. Registration is
    /// disabled when unset.
    pub register_url: Option<Url>,
    /// Guild role granting access to staff-only commands.
    pub admin_role_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Unset and empty variables are both treated as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        Ok(Self {
            discord_token: required("TOKEN")?,
            discord_public_key: parse_public_key(&required("PUBLIC_KEY")?)?,
            discord_application_id: ApplicationId::new(parse_snowflake(
                "APPLICATION_ID",
                &required("APPLICATION_ID")?,
            )?),
            discord_guild_id: GuildId::new(parse_snowflake("GUILD_ID", &required("GUILD_ID")?)?),
            port: match optional("PORT") {
                Some(port) => port.trim().parse().map_err(|e| invalid("PORT", e))?,
                None => DEFAULT_PORT,
            },
            register_url: optional("REGISTER_URL")
                .map(|url| Url::parse(url.trim()).map_err(|e| invalid("REGISTER_URL", e)))
                .transpose()?,
            admin_role_name: optional("ADMIN_ROLE_NAME")
                .unwrap_or_else(|| DEFAULT_ADMIN_ROLE_NAME.to_string()),
        })
    }
}

fn invalid(name: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_snowflake(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<std::num::NonZeroU64>()
        .map(|id| id.get())
        .map_err(|e| invalid(name, e))
}

pub(crate) fn parse_public_key(value: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = hex::decode(value.trim()).map_err(|e| invalid("PUBLIC_KEY", e))?;

    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| invalid("PUBLIC_KEY", format!("expected 32 bytes, got {}", bytes.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    fn base_vars() -> Vec<(&'static str, String)> {
        vec![
            ("TOKEN", "bot-token".to_string()),
            ("PUBLIC_KEY", "ab".repeat(32)),
            ("APPLICATION_ID", "1127447095893315594".to_string()),
            ("GUILD_ID", "300000000000000001".to_string()),
        ]
    }

    fn load_with(overrides: &[(&'static str, &str)]) -> Result<Config, AppError> {
        let mut vars = base_vars();
        for &(name, value) in overrides {
            vars.retain(|(existing, _)| *existing != name);
            vars.push((name, value.to_string()));
        }
        let borrowed: Vec<(&str, &str)> = vars
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        load(&borrowed)
    }

    fn invalid_var(result: Result<Config, AppError>) -> String {
        match result {
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, .. })) => name,
            Err(e) => panic!("expected InvalidEnvVar, got {}", e),
            Ok(_) => panic!("expected InvalidEnvVar, got a config"),
        }
    }

    #[test]
    fn loads_required_vars_with_defaults() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.discord_token, "bot-token");
        assert_eq!(config.discord_public_key, [0xab; 32]);
        assert_eq!(config.discord_guild_id, GuildId::new(300000000000000001));
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.register_url.is_none());
        assert_eq!(config.admin_role_name, "Staff");
    }

    #[test]
    fn loads_optional_vars() {
        let config = load_with(&[
            ("PORT", "8080"),
            ("REGISTER_URL", "https://accounts.example.com/register"),
            ("ADMIN_ROLE_NAME", "Moderators"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.register_url.unwrap().as_str(),
            "https://accounts.example.com/register"
        );
        assert_eq!(config.admin_role_name, "Moderators");
    }

    #[test]
    fn missing_required_var_is_reported_by_name() {
        for missing in ["TOKEN", "PUBLIC_KEY", "APPLICATION_ID", "GUILD_ID"] {
            let vars: Vec<(&str, String)> = base_vars()
                .into_iter()
                .filter(|(name, _)| *name != missing)
                .collect();
            let borrowed: Vec<(&str, &str)> = vars
                .iter()
                .map(|(name, value)| (*name, value.as_str()))
                .collect();

            match load(&borrowed) {
                Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                    assert_eq!(name, missing)
                }
                Err(e) => panic!("expected MissingEnvVar for {}, got {}", missing, e),
                Ok(_) => panic!("config loaded without {}", missing),
            }
        }
    }

    #[test]
    fn empty_required_var_counts_as_missing() {
        assert!(matches!(
            load_with(&[("TOKEN", "  ")]),
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
    }

    #[test]
    fn empty_optional_vars_fall_back_to_defaults() {
        let config = load_with(&[("PORT", ""), ("REGISTER_URL", "")]).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.register_url.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        assert_eq!(invalid_var(load_with(&[("PORT", "http")])), "PORT");
        assert_eq!(invalid_var(load_with(&[("PORT", "70000")])), "PORT");
    }

    #[test]
    fn rejects_bad_register_url() {
        assert_eq!(
            invalid_var(load_with(&[("REGISTER_URL", "not a url")])),
            "REGISTER_URL"
        );
    }

    #[test]
    fn rejects_bad_snowflakes() {
        assert_eq!(invalid_var(load_with(&[("GUILD_ID", "guild")])), "GUILD_ID");
        assert_eq!(
            invalid_var(load_with(&[("APPLICATION_ID", "0")])),
            "APPLICATION_ID"
        );
    }

    #[test]
    fn parses_hex_public_key() {
        let key = parse_public_key(&"ab".repeat(32)).unwrap();
        assert_eq!(key, [0xab; 32]);
    }

    #[test]
    fn rejects_short_public_key() {
        let err = parse_public_key("abcd").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { ref name, .. } if name == "PUBLIC_KEY"));
    }

    #[test]
    fn rejects_non_hex_public_key() {
        assert!(parse_public_key(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn snowflakes_must_be_non_zero() {
        assert_eq!(parse_snowflake("GUILD_ID", "1234").unwrap(), 1234);
        assert!(parse_snowflake("GUILD_ID", "0").is_err());
        assert!(parse_snowflake("GUILD_ID", "guild").is_err());
    }
}
