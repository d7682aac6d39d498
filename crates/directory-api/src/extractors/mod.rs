//! Custom Axum extractors.

pub mod form;
pub mod pagination;
pub mod path;

pub use form::UserSubmission;
pub use pagination::ListQuery;
pub use path::parse_user_id;
