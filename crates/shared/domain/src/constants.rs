//! Domain-level constants.

// =============================================================================
// Users
// =============================================================================

/// Table holding user records
pub const USERS_TABLE: &str = "users";

/// Returned by name lookups when the user does not exist or has no name
pub const USER_NOT_FOUND_NAME: &str = "User not found";

/// Message of the validation error raised when creating a user
pub const NAME_AND_EMAIL_REQUIRED: &str = "name and email are required";

// =============================================================================
// Passwords
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;
