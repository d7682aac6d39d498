//! User domain entities.

pub mod gender;
pub mod model;
pub mod status;

pub use gender::Gender;
pub use model::{User, UserDocument, UserFields};
pub use status::UserStatus;
