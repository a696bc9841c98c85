//! Request processing ahead of the handlers.

pub mod signature;
