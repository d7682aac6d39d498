//! Media store implementations.

#[cfg(feature = "cloudinary")]
pub mod cloudinary;
pub mod local;
pub mod memory;

#[cfg(feature = "cloudinary")]
pub use cloudinary::CloudinaryMediaStore;
pub use local::LocalMediaStore;
pub use memory::MemoryMediaStore;
