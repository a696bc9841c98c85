//! Request and response bodies exchanged over HTTP.

pub mod api;
pub mod interaction;
