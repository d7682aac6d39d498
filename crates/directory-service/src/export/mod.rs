//! Export formats for user records.

pub mod csv;

pub use self::csv::{CSV_HEADER, render_users_csv};
