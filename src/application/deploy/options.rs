//! Deploy Options
//!
//! Per-invocation settings for the deploy use case. Tool locations and build
//! layout come from [`crate::config::Config`].

use std::path::PathBuf;

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Repository `git archive` reads the revision from
    pub repo_root: PathBuf,
    /// Directory the dependency snapshot (`.bundle`, `vendor`) is copied from
    pub source_root: PathBuf,
    /// Ask the sync tool to report what it would upload without uploading
    pub dry_run: bool,
    /// Let build and sync output go straight to the terminal
    pub stream_output: bool,
}

impl DeployOptions {
    /// Options rooted at `root` for both the repository and the dependency snapshot
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            repo_root: root.clone(),
            source_root: root,
            dry_run: false,
            stream_output: false,
        }
    }

    pub fn with_repo_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.repo_root = root.into();
        self
    }

    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = root.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_stream_output(mut self, stream: bool) -> Self {
        self.stream_output = stream;
        self
    }
}
