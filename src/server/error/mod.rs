//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in endpoints.

pub mod config;
pub mod internal;
pub mod signature;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, internal::InternalError, signature::SignatureError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `SignatureError` handle their own
/// response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Interaction request failed signature verification.
    ///
    /// Delegates to `SignatureError::into_response()` which answers 401 Unauthorized.
    #[error(transparent)]
    SignatureErr(#[from] SignatureError),

    /// Unexpected condition inside the codebase.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when the account backend call fails.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error when
    /// Discord REST operations fail.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Outbound call exceeded its deadline.
    ///
    /// # Fields
    /// - Name of the operation that timed out
    #[error("Timed out waiting for {0}")]
    Timeout(String),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Request body exceeded the accepted size.
    ///
    /// Results in 413 Payload Too Large.
    ///
    /// # Fields
    /// - Largest accepted body in bytes
    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// HTTP status code returned by the upstream service, if any.
    ///
    /// Used to report Discord failures to operators as `{code} error from Discord`.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::DiscordErr(err) => match err.as_ref() {
                serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(response)) => {
                    Some(response.status_code.as_u16())
                }
                _ => None,
            },
            Self::ReqwestErr(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 401 Unauthorized - For `SignatureErr`, delegated to `SignatureError::into_response()`
/// - 413 Payload Too Large - For `PayloadTooLarge` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::SignatureErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err @ Self::PayloadTooLarge(_) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
