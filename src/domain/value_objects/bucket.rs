//! Bucket Name Value Object
//!
//! S3 bucket names follow DNS-style rules: 3-63 lowercase letters, digits,
//! dots and hyphens, starting and ending with a letter or digit.

use std::fmt;
use std::str::FromStr;

use crate::error::{OctoshipError, OctoshipResult};

/// A validated S3 bucket name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 63;

    /// Validate and wrap a bucket name
    pub fn parse(value: &str) -> OctoshipResult<Self> {
        let reject = |reason: &str| OctoshipError::InvalidBucket {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let len = value.len();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(reject("must be between 3 and 63 characters long"));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'-')
        {
            return Err(reject(
                "may only contain lowercase letters, digits, '.' and '-'",
            ));
        }

        let alnum = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
        let bytes = value.as_bytes();
        if !alnum(bytes[0]) || !alnum(bytes[len - 1]) {
            return Err(reject("must start and end with a letter or digit"));
        }
        if value.contains("..") {
            return Err(reject("must not contain consecutive dots"));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Destination URL handed to the sync tool
    pub fn url(&self) -> String {
        format!("s3://{}/", self.0)
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BucketName {
    type Err = OctoshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
