//! Application services - use cases over the repositories.

mod organisational_unit_service;
mod user_service;

pub use organisational_unit_service::{OrganisationalUnitManager, OrganisationalUnitService};
pub use user_service::{UserManager, UserService};
