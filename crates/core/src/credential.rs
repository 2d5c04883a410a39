//! The stored credential

use crate::{CoreError, CoreResult};
use std::fmt;

/// Opaque password-like value sent as a static header on every request.
///
/// Never empty: an empty stored value is the same as no value at all.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw value, rejecting the empty string
    pub fn new(value: impl Into<String>) -> CoreResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::EmptyCredential);
        }
        Ok(Self(value))
    }

    /// The raw value, exactly as it was entered
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
