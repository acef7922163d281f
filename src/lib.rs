//! Octoship - deploy a static site revision to S3
//!
//! Octoship extracts one revision of an Octopress-style site into a throwaway
//! workspace, builds it there, and syncs the generated output to an S3 bucket.
//! A companion comparator answers distance and fast-forward questions about
//! the repository history, so callers can refuse to deploy a revision that
//! would move a published site backwards.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, Deployer, RevisionComparator};
pub use config::Config;
pub use domain::ports::{CommandRunner, Event, EventSink};
pub use domain::value_objects::{BucketName, Revision, Step};
pub use error::{DeployError, HistoryQueryError, OctoshipError, OctoshipResult};
pub use infrastructure::{JsonEventSink, SystemCommandRunner};
