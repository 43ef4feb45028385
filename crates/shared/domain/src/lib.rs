//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! users, organisational units, the email grammar and the drafts/views
//! exchanged with clients.

pub mod constants;
pub mod email;
pub mod error;
pub mod organisational_unit;
pub mod user;

pub use constants::*;
pub use email::{is_valid_email, validate_email};
pub use error::{DomainError, DomainResult};
pub use organisational_unit::{
    OrganisationalUnit, OrganisationalUnitDraft, OrganisationalUnitView, UnitMember,
};
pub use user::{Gender, User, UserDraft, UserView};
