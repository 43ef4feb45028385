//! Repository layer for data access.

pub mod entities;
mod organisational_unit_repository;
mod user_repository;

pub use organisational_unit_repository::{OrganisationalUnitRepository, OrganisationalUnitStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use organisational_unit_repository::MockOrganisationalUnitRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
