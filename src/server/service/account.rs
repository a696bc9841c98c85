//! Client for the external account backend that owns ADNF accounts.
//!
//! The bot never stores accounts itself; `/register` submissions are forwarded as a
//! multipart form and the backend's HTTP status decides the reply.

use async_trait::async_trait;
use reqwest::multipart::Form;
use serenity::all::UserId;
use url::Url;

use crate::server::error::AppError;

/// Registration submitted through `/register`.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub discord_id: UserId,
    pub discord_username: String,
}

impl RegistrationRequest {
    fn into_form(self) -> Form {
        Form::new()
            .text("username", self.username)
            .text("password", self.password)
            .text("discord_id", self.discord_id.to_string())
            .text("discord_username", self.discord_username)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Backend answered with a 2xx status.
    Accepted,
    /// Backend answered with the given non-2xx status.
    Rejected(u16),
    /// No registration endpoint is configured.
    Unavailable,
}

#[async_trait]
pub trait AccountBackend: Send + Sync {
    /// Submits a registration, reporting how the backend answered.
    ///
    /// Transport failures and timeouts are errors; an answer with a failure status
    /// is `Ok(RegistrationOutcome::Rejected)`.
    async fn register(&self, request: RegistrationRequest)
        -> Result<RegistrationOutcome, AppError>;
}

/// Account backend reached over HTTPS.
pub struct HttpAccountBackend {
    http_client: reqwest::Client,
    register_url: Option<Url>,
}

impl HttpAccountBackend {
    pub fn new(http_client: reqwest::Client, register_url: Option<Url>) -> Self {
        Self {
            http_client,
            register_url,
        }
    }
}

#[async_trait]
impl AccountBackend for HttpAccountBackend {
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, AppError> {
        let Some(url) = self.register_url.as_ref() else {
            return Ok(RegistrationOutcome::Unavailable);
        };

        tracing::debug!(
            "Forwarding registration of {} for Discord user {}",
            request.username,
            request.discord_id
        );

        let response = self
            .http_client
            .post(url.clone())
            .multipart(request.into_form())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(RegistrationOutcome::Accepted)
        } else {
            tracing::warn!("Account backend rejected registration with {}", status);
            Ok(RegistrationOutcome::Rejected(status.as_u16()))
        }
    }
}
