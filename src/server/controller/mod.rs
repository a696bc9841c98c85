//! HTTP handlers.
//!
//! Controllers extract request data, build the services they need from `AppState`
//! and convert results into responses. Business rules live in `service`.

pub mod admin;
pub mod health;
pub mod interaction;

#[cfg(test)]
mod test;
