//! # directory-core
//!
//! Core crate for the user directory. Contains the media store trait,
//! configuration schemas, typed identifiers, pagination/sorting/search
//! types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other directory crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
