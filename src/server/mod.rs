//! Server-side webhook backend and business logic.
//!
//! The backend uses Axum as the web framework and Serenity's REST client for the
//! Discord API. It receives slash command interactions over a signed webhook and
//! answers each with exactly one message.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Command handling, role checks, outbound calls
//! - **Model Layer** (`model/`) - Parsed interactions and static command definitions
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request signature verification
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (Discord client, backend client, ...)
//! - **Startup** (`startup`) - Construction of HTTP clients, command id preload
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives `POST /interactions`
//! 2. **Middleware** verifies the Ed25519 signature over the raw body
//! 3. **Controller** parses the payload into an `Interaction`
//! 4. **Service** dispatches on the command name and performs any outbound call
//! 5. **Controller** serializes the single reply

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
pub mod test_support;
