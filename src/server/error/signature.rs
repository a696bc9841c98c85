use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum SignatureError {
    /// A signature header required by Discord's request signing is absent or not UTF-8.
    #[error("Missing or unreadable header {0}")]
    MissingHeader(&'static str),

    /// The signature header is not valid hex.
    #[error("Signature is not valid hex: {0}")]
    MalformedSignature(#[from] hex::FromHexError),

    /// The signature does not match the request body and timestamp.
    #[error("Signature does not match request")]
    Mismatch,
}

/// Converts signature errors into HTTP responses.
///
/// Discord expects 401 Unauthorized for any request that fails verification. The
/// detailed reason is logged at debug level while the client only sees a generic
/// message.
impl IntoResponse for SignatureError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected interaction request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Bad request signature".to_string(),
            }),
        )
            .into_response()
    }
}
