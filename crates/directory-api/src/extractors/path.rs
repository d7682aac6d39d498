//! Typed path parameter helpers.

use directory_core::error::AppError;
use directory_core::types::UserId;

/// Parses a user id from a path segment.
///
/// A malformed id cannot name a record, so it is reported as not found.
pub fn parse_user_id(s: &str) -> Result<UserId, AppError> {
    s.parse()
        .map_err(|_| AppError::not_found("User not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        let id = UserId::new();
        assert_eq!(parse_user_id(&id.to_string()).unwrap(), id);
        assert!(parse_user_id("nope").unwrap_err().is_not_found());
    }
}
