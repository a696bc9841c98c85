use std::num::NonZeroU64;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake id from String
///
/// Snowflakes are never zero, so `"0"` is rejected along with anything that is not
/// a decimal `u64`.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to a non-zero `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a snowflake
pub fn parse_snowflake(value: &str) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result.get())
}

/// Parses a user supplied snowflake, returning `None` instead of an error.
///
/// Accepts the raw id as well as the `<@id>` / `<@!id>` mention forms users
/// tend to paste into text options.
pub fn parse_user_snowflake(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    let id = trimmed
        .strip_prefix("<@")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|inner| inner.trim_start_matches('!'))
        .unwrap_or(trimmed);

    id.parse::<NonZeroU64>().ok().map(NonZeroU64::get)
}
