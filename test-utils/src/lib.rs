//! ADNF Bot Test Utils
//!
//! Shared helpers for testing the bot without talking to Discord.
//!
//! # Overview
//!
//! - **InteractionBuilder**: Fluent builder for interaction webhook payloads (JSON)
//! - **fixture**: Well-known ids and guild roles used across tests
//! - **serenity**: Factories for Serenity model types deserialized from JSON
//! - **signing**: Ed25519 signer producing the headers Discord attaches to webhooks
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::InteractionBuilder, signing::TestSigner};
//!
//! let signer = TestSigner::generate();
//! let body = InteractionBuilder::command("help").build().to_string();
//! let (signature, timestamp) = signer.sign_body(&body);
//! ```

pub mod builder;
pub mod fixture;
pub mod serenity;
pub mod signing;
