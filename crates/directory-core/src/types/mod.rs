//! Core type definitions used across the directory workspace.

pub mod filter;
pub mod id;
pub mod pagination;
pub mod sorting;

pub use filter::SearchFilter;
pub use id::UserId;
pub use pagination::{PageRequest, PageResponse};
pub use sorting::SortDirection;
