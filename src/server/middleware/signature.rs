//! Discord interaction request verification.
//!
//! Discord signs every webhook with the application's Ed25519 key and requires the
//! endpoint to reject requests whose signature does not verify; it probes this with
//! deliberately bad signatures when the endpoint URL is saved.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header::CONTENT_LENGTH, HeaderMap},
    middleware::Next,
    response::Response,
};
use ring::signature::{UnparsedPublicKey, ED25519};

use crate::server::{
    error::{signature::SignatureError, AppError},
    state::AppState,
};

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Interaction payloads are small; anything larger is not from Discord.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Verifies Ed25519 signatures against the application's public key.
#[derive(Clone)]
pub struct SignatureVerifier {
    public_key: [u8; 32],
}

impl SignatureVerifier {
    pub fn new(public_key: [u8; 32]) -> Self {
        Self { public_key }
    }

    /// Checks `signature_hex` against `timestamp || body`.
    pub fn verify(
        &self,
        signature_hex: &str,
        timestamp: &str,
        body: &[u8],
    ) -> Result<(), SignatureError> {
        let signature = hex::decode(signature_hex.trim())?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        UnparsedPublicKey::new(&ED25519, &self.public_key)
            .verify(&message, &signature)
            .map_err(|_| SignatureError::Mismatch)
    }
}

/// Rejects interaction requests that are not signed by Discord.
///
/// Buffers the body to verify it, then hands an identical request to the next
/// layer so the handler can still extract JSON from it.
pub async fn verify_signature(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();

    if declared_length(&parts.headers).is_some_and(|length| length > MAX_BODY_BYTES) {
        return Err(AppError::PayloadTooLarge(MAX_BODY_BYTES));
    }

    let signature = header(&parts.headers, SIGNATURE_HEADER)?;
    let timestamp = header(&parts.headers, TIMESTAMP_HEADER)?;

    // Buffering only fails past the limit or when the client goes away mid-body.
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        tracing::debug!("Failed to buffer interaction body: {}", e);
        AppError::PayloadTooLarge(MAX_BODY_BYTES)
    })?;

    state.verifier.verify(&signature, &timestamp, &bytes)?;

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

fn header(headers: &HeaderMap, name: &'static str) -> Result<String, SignatureError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or(SignatureError::MissingHeader(name))
}
