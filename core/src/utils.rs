//! Utility functions and types.

use std::fmt::{self, Debug};

/// Redacts secrets when formatted with `Debug`.
///
/// - Empty input prints `EMPTY`.
/// - Input shorter than 12 characters is fully redacted.
/// - Longer input keeps the first and last three characters so different
///   keys stay distinguishable in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = self.0.len();
        if length == 0 {
            return f.write_str("EMPTY");
        }
        if length < 12 || !self.0.is_char_boundary(3) || !self.0.is_char_boundary(length - 3) {
            return f.write_str("***");
        }

        write!(f, "{}***{}", &self.0[..3], &self.0[length - 3..])
    }
}
