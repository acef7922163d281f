//! Deploy Result

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Outcome of a successful deployment
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub bucket: String,
    pub revision: String,
    /// `s3://{bucket}/`
    pub destination: String,
    /// Top-level site entries handed to the sync tool (`public/index.html`, ...)
    pub uploaded: Vec<PathBuf>,
    pub dry_run: bool,
    /// Where the workspace was; it has been removed by the time this is returned
    pub workspace: PathBuf,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl DeployReport {
    pub fn uploaded_count(&self) -> usize {
        self.uploaded.len()
    }
}
