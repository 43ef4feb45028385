//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Gender
// =============================================================================

/// Label stored for [`crate::Gender::Male`]
pub const GENDER_MALE: &str = "MALE";

/// Label stored for [`crate::Gender::Female`]
pub const GENDER_FEMALE: &str = "FEMALE";

/// Label stored for [`crate::Gender::Other`]
pub const GENDER_OTHER: &str = "OTHER";

// =============================================================================
// Validation
// =============================================================================

/// Email grammar: dot-separated alphanumeric runs on each side of a single `@`.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9]+(\.[A-Za-z0-9]+)*@[A-Za-z0-9]+(\.[A-Za-z0-9]+)*$";

// =============================================================================
// Persistence
// =============================================================================

/// Table holding user records
pub const USER_TABLE: &str = "demo_user";

/// Table holding organisational units
pub const ORGANISATIONAL_UNIT_TABLE: &str = "organisational_unit";
