//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the outside world:
//!
//! - **interaction**: Dispatch of slash commands to their handlers
//! - **discord**: Discord REST calls, admin role check, command registration
//! - **account**: Forwarding registrations to the account backend

pub mod account;
pub mod discord;
pub mod interaction;
