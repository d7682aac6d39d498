//! # directory-service
//!
//! Business logic for the user directory. [`UserService`] answers list
//! queries and orchestrates the record lifecycle across the record store
//! and the media store; the export module renders records as CSV.
//!
//! Services follow constructor injection: all collaborators are provided
//! at construction time via `Arc` references.

pub mod export;
pub mod outcome;
pub mod user;

pub use outcome::Outcome;
pub use user::{HealthReport, UserService, UserValidator};
