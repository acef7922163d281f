//! Revision Value Object
//!
//! An opaque git revision (sha, branch, tag, `HEAD~2`, ...). Octoship never
//! interprets it; git resolves it. Validation only guarantees that it can be
//! passed as a single argv element without being mistaken for an option.

use std::fmt;
use std::str::FromStr;

use crate::error::{OctoshipError, OctoshipResult};

/// A validated revision identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    /// Validate and wrap a revision identifier
    pub fn parse(value: &str) -> OctoshipResult<Self> {
        let reject = |reason: &str| OctoshipError::InvalidRevision {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if value.is_empty() {
            return Err(reject("revision is empty"));
        }
        if value.starts_with('-') {
            return Err(reject("revision must not start with '-'"));
        }
        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(reject("revision must not contain whitespace or control characters"));
        }
        if value.contains("..") {
            return Err(reject("revision ranges are not allowed, pass a single revision"));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `older..newer`, the range syntax understood by `git rev-list`
    pub fn range_to(&self, newer: &Revision) -> String {
        format!("{}..{}", self.0, newer.0)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Revision {
    type Err = OctoshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
