//! Well-known ids and in-memory Discord data shared by tests.
//!
//! Fixtures never touch the network; they describe the guild the tests pretend to
//! run in. Use them with `InteractionBuilder` and the stub Discord API so both sides
//! agree on which role is the staff role.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let roles = fixture::guild_roles();
//! let payload = InteractionBuilder::command("mention")
//!     .role(fixture::STAFF_ROLE_ID)
//!     .build();
//! ```

use serenity::all::Role;

use crate::serenity::create_test_role;

pub const TEST_GUILD_ID: u64 = 300_000_000_000_000_001;
pub const TEST_USER_ID: u64 = 500_000_000_000_000_001;
pub const TEST_USERNAME: &str = "tester";

/// Member targeted by `/mention` in tests.
pub const TARGET_USER_ID: u64 = 500_000_000_000_000_002;

pub const STAFF_ROLE_ID: u64 = 900_000_000_000_000_001;
pub const MEMBER_ROLE_ID: u64 = 900_000_000_000_000_002;
/// Role named like the staff role but with different casing.
pub const LOOKALIKE_ROLE_ID: u64 = 900_000_000_000_000_003;

/// Roles of the test guild: `Staff`, `Member` and a lowercase `staff` decoy.
pub fn guild_roles() -> Vec<Role> {
    vec![
        create_test_role(STAFF_ROLE_ID, "Staff", 0xE67E22, 10),
        create_test_role(MEMBER_ROLE_ID, "Member", 0x2ECC71, 1),
        create_test_role(LOOKALIKE_ROLE_ID, "staff", 0, 2),
    ]
}
