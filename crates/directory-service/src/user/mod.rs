//! User directory services.

pub mod service;
pub mod validation;

pub use service::{HealthReport, UserService};
pub use validation::UserValidator;
