//! Core traits defined in `directory-core` and implemented by other crates.

pub mod media;

pub use media::{MediaStore, MediaUpload};
