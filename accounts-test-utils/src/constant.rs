//! Constant values shared across tests.

/// Authentication domain test application state is configured with.
///
/// Userids built for fixture users take the form `acct:<username>@example.com`.
pub static TEST_AUTH_DOMAIN: &str = "example.com";

/// Domain used for fixture user email addresses.
pub static TEST_EMAIL_DOMAIN: &str = "mail.example.com";
