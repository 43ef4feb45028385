//! HTTP request handlers.

pub mod health_handler;
pub mod organisational_unit_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use organisational_unit_handler::organisational_unit_routes;
pub use user_handler::user_routes;
