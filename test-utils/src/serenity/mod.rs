//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's REST API would return to the bot's role lookup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_role;
//!
//! let staff = create_test_role(111111111, "Staff", 0xFF0000, 10);
//! let member = create_test_role(222222222, "Member", 0x00FF00, 1);
//! ```

pub mod role;

pub use role::create_test_role;
