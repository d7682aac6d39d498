//! Successful results that carry non-fatal warnings.

use serde::Serialize;
use tracing::warn;

/// The value of a completed operation plus any cleanup problems met on
/// the way (e.g. an image that could not be removed from the media store).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    /// The operation's result.
    pub value: T,
    /// Human-readable warnings, in the order they occurred.
    pub warnings: Vec<String>,
}

impl<T> Outcome<T> {
    /// A result with no warnings.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// A result with the given warnings.
    pub fn with_warnings(value: T, warnings: Vec<String>) -> Self {
        Self { value, warnings }
    }

    /// Whether any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Transform the value, keeping the warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Split into value and warnings.
    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.value, self.warnings)
    }
}

/// Collects warnings while an operation runs and logs each one.
#[derive(Debug, Default)]
pub(crate) struct Warnings(Vec<String>);

impl Warnings {
    pub(crate) fn push(&mut self, warning: String) {
        warn!("{warning}");
        self.0.push(warning);
    }

    pub(crate) fn finish<T>(self, value: T) -> Outcome<T> {
        Outcome::with_warnings(value, self.0)
    }
}
