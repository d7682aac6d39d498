//! Free-text search filter shared by every record store.

use serde::{Deserialize, Serialize};

/// Case-insensitive substring search across a fixed set of fields.
///
/// An empty term matches everything. The term is taken literally: no
/// wildcard or regex characters carry special meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    term: Option<String>,
}

impl SearchFilter {
    /// Build a filter from raw user input. Empty input means "match all".
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            term: if term.is_empty() { None } else { Some(term) },
        }
    }

    /// A filter matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// The search term, if any.
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Whether any of `fields` contains the term, ignoring case.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        match &self.term {
            None => true,
            Some(term) => {
                let needle = term.to_lowercase();
                fields
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }

    /// SQL `ILIKE` pattern for the term with `\`, `%` and `_` escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.term.as_ref().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for ch in term.chars() {
                if matches!(ch, '\\' | '%' | '_') {
                    pattern.push('\\');
                }
                pattern.push(ch);
            }
            pattern.push('%');
            pattern
        })
    }
}
