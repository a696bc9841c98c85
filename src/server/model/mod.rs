//! Server-side domain models.
//!
//! Payload DTOs from `crate::model` are converted into these types at the controller
//! boundary so handlers work with parsed snowflakes and a closed set of commands.

pub mod command;
pub mod interaction;
