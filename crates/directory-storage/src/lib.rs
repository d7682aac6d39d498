//! # directory-storage
//!
//! Media store implementations for profile images. Supports the local
//! filesystem, Cloudinary, and an in-process memory store.

pub mod manager;
pub mod providers;

pub use manager::build_media_store;
