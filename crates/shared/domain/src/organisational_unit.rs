//! Organisational unit domain entity.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Named grouping users may belong to. Membership is derived from the
/// users' references; the unit does not own them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganisationalUnit {
    pub id: Option<i64>,
    pub name: String,
}

impl OrganisationalUnit {
    /// Build a not yet persisted unit from a draft
    pub fn from_draft(draft: OrganisationalUnitDraft) -> Self {
        Self {
            id: None,
            name: draft.name,
        }
    }
}

/// Payload for unit creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrganisationalUnitDraft {
    #[cfg_attr(feature = "openapi", schema(example = "Engineering"))]
    pub name: String,
}

/// Member entry inside a unit view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UnitMember {
    pub id: i64,
    pub email: String,
}

/// Read projection of a unit with its derived member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrganisationalUnitView {
    pub id: i64,
    pub name: String,
    pub users: Vec<UnitMember>,
}

impl OrganisationalUnitView {
    pub fn new(id: i64, unit: OrganisationalUnit, members: Vec<User>) -> Self {
        Self {
            id,
            name: unit.name,
            users: members
                .into_iter()
                .filter_map(|user| {
                    user.id.map(|id| UnitMember {
                        id,
                        email: user.email,
                    })
                })
                .collect(),
        }
    }
}
