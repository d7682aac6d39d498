//! Gender enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender recorded for a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_gender")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Any other answer.
    Other,
}

impl Gender {
    /// Return the label as stored and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = directory_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(directory_core::AppError::validation(format!(
                "Invalid gender: '{s}'. Expected one of: Male, Female, Other"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" other ".parse::<Gender>().unwrap(), Gender::Other);
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"Male\"");
        let parsed: Gender = serde_json::from_str("\"Other\"").unwrap();
        assert_eq!(parsed, Gender::Other);
    }
}
