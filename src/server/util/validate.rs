//! Shape checks for account credentials submitted through `/register`.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Letters and digits only, 6 to 16 characters.
const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9]{6,16}$";

/// 8 to 64 characters, none of them a line terminator (`\n`, `\r`, U+2028, U+2029).
/// The character class requirements are checked separately because `regex` has no
/// look-around.
const PASSWORD_LENGTH_PATTERN: &str = r"^[^\n\r\u{2028}\u{2029}]{8,64}$";

static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
static PASSWORD_LENGTH_REGEX: OnceLock<Regex> = OnceLock::new();

/// Rejection reasons for registration input, each with a canned user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    #[error("INVALID_USERNAME")]
    InvalidUsername,
    #[error("INVALID_PASSWORD")]
    InvalidPassword,
}

impl CredentialError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidPassword => "INVALID_PASSWORD",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidUsername => {
                "Invalid username. Usernames must be 6-16 characters long and contain only letters and numbers."
            }
            Self::InvalidPassword => {
                "Invalid password. Passwords must be 8-64 characters long and contain at least one lowercase letter, one uppercase letter and one number."
            }
        }
    }
}

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX
        .get_or_init(|| Regex::new(USERNAME_PATTERN).expect("username pattern compiles"))
        .is_match(username)
}

pub fn is_valid_password(password: &str) -> bool {
    let length_ok = PASSWORD_LENGTH_REGEX
        .get_or_init(|| Regex::new(PASSWORD_LENGTH_PATTERN).expect("password pattern compiles"))
        .is_match(password);

    length_ok
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Validates a username/password pair, username first.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), CredentialError> {
    if !is_valid_username(username) {
        return Err(CredentialError::InvalidUsername);
    }
    if !is_valid_password(password) {
        return Err(CredentialError::InvalidPassword);
    }
    Ok(())
}
