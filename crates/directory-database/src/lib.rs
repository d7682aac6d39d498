//! # directory-database
//!
//! Record store for the user directory: the [`UserStore`] trait, a
//! PostgreSQL implementation backed by sqlx, and an in-memory
//! implementation used for development and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryUserStore;
pub use provider::connect_user_store;
pub use repositories::UserRepository;
pub use store::UserStore;
