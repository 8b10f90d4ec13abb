//! Shared constant values for test fixtures.

/// Domain appended to fixture usernames to build unique email addresses.
pub static TEST_EMAIL_DOMAIN: &str = "example.com";

/// Password hash placeholder for fixture users that never log in.
///
/// Not a valid PHC string, so password verification against it always fails.
pub static UNUSABLE_PASSWORD_HASH: &str = "!unusable";

/// Default tag color for fixture tags.
pub static TEST_TAG_COLOR: &str = "#E26C2D";
