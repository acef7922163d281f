//! Error types for Octoship
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Step;

/// Result type alias for Octoship operations
pub type OctoshipResult<T> = Result<T, OctoshipError>;

/// Failure of one deployment, tagged by the step that stopped it.
///
/// Every variant is fatal. Nothing is retried and nothing is rolled back,
/// but the workspace has always been removed by the time the caller sees one.
#[derive(Error, Debug)]
pub enum DeployError {
    /// The temporary workspace could not be created
    #[error("could not create deployment workspace: {0}")]
    Workspace(#[source] std::io::Error),

    /// The revision snapshot could not be produced or unpacked
    #[error("could not extract revision '{revision}': {message}")]
    Extraction { revision: String, message: String },

    /// A dependency directory is missing or could not be copied
    #[error("could not prepare dependency snapshot from {}: {message}", path.display())]
    DependencyPrep { path: PathBuf, message: String },

    /// The site build exited non-zero or produced nothing to upload
    #[error("site build failed: {message}")]
    Build { message: String },

    /// The storage sync exited non-zero
    #[error("sync to {destination} failed: {message}")]
    Sync { destination: String, message: String },
}

impl DeployError {
    /// The pipeline step this error stopped at
    pub fn step(&self) -> Step {
        match self {
            Self::Workspace(_) => Step::Workspace,
            Self::Extraction { .. } => Step::Extract,
            Self::DependencyPrep { .. } => Step::PrepareDependencies,
            Self::Build { .. } => Step::Build,
            Self::Sync { .. } => Step::Sync,
        }
    }
}

/// Failure of a read-only history query.
#[derive(Error, Debug)]
pub enum HistoryQueryError {
    /// git could not be started at all
    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// git ran but rejected the query (unknown revision, not a repository, ...)
    #[error("couldn't figure out the relationship between '{older}' and '{newer}' (exit code {code:?})")]
    Rejected {
        older: String,
        newer: String,
        code: Option<i32>,
        output: String,
    },

    /// The two revisions share no common ancestor
    #[error("'{older}' and '{newer}' have no common ancestor")]
    Unrelated { older: String, newer: String },
}

impl HistoryQueryError {
    /// Raw tool output captured for the failed query, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Rejected { output, .. } => Some(output.as_str()),
            _ => None,
        }
    }
}

/// Main error type for Octoship operations
#[derive(Error, Debug)]
pub enum OctoshipError {
    /// A revision identifier failed validation
    #[error("invalid revision '{value}': {reason}")]
    InvalidRevision { value: String, reason: String },

    /// A bucket name failed validation
    #[error("invalid bucket name '{value}': {reason}")]
    InvalidBucket { value: String, reason: String },

    /// Configuration file could not be parsed or is inconsistent
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    #[error(transparent)]
    History(#[from] HistoryQueryError),
}
