//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::{GENDER_FEMALE, GENDER_MALE, GENDER_OTHER};

/// Gender enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Textual label as stored and rendered
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => GENDER_MALE,
            Gender::Female => GENDER_FEMALE,
            Gender::Other => GENDER_OTHER,
        }
    }

    /// Parse a stored label, `None` for unknown values
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            GENDER_MALE => Some(Gender::Male),
            GENDER_FEMALE => Some(Gender::Female),
            GENDER_OTHER => Some(Gender::Other),
            _ => None,
        }
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User domain entity
///
/// `id` is `None` until the store has assigned one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub sur_name: String,
    pub gender: Option<Gender>,
    /// Weak reference to the unit the user belongs to
    pub organisational_unit_id: Option<i64>,
}

impl User {
    /// Build a not yet persisted user from a draft
    pub fn from_draft(draft: UserDraft) -> Self {
        Self {
            id: None,
            email: draft.email,
            first_name: draft.first_name,
            sur_name: draft.sur_name,
            gender: draft.gender,
            organisational_unit_id: None,
        }
    }

    /// Replace all draft fields, keeping id and unit reference
    pub fn apply_draft(&mut self, draft: UserDraft) {
        self.email = draft.email;
        self.first_name = draft.first_name;
        self.sur_name = draft.sur_name;
        self.gender = draft.gender;
    }

    /// Point the user at an organisational unit
    pub fn assign_unit(&mut self, unit_id: i64) {
        self.organisational_unit_id = Some(unit_id);
    }
}

/// Payload for user creation and full update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "hujber@test.com"))]
    pub email: String,
    /// First name
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: String,
    /// Surname
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub sur_name: String,
    /// Optional gender
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Read projection of a user returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub sur_name: String,
    /// Gender label, if set
    pub gender: Option<String>,
    /// Name of the assigned organisational unit, if any
    pub organisational_unit: Option<String>,
}

impl UserView {
    /// Project a persisted user, substituting the unit reference by its name.
    pub fn new(id: i64, user: User, organisational_unit: Option<String>) -> Self {
        Self {
            id,
            email: user.email,
            first_name: user.first_name,
            sur_name: user.sur_name,
            gender: user.gender.map(String::from),
            organisational_unit,
        }
    }
}
