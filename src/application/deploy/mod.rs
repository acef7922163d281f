//! Deploy Module
//!
//! Builds a single revision of the site in a throwaway workspace and syncs
//! the output to a bucket.
//!
//! ## Structure
//!
//! - `options` - Per-invocation settings (`DeployOptions`)
//! - `result` - Outcome of a successful deploy (`DeployReport`)
//! - `use_case` - The pipeline itself (`Deployer`)
//!
//! ## Usage
//!
//! ```ignore
//! use octoship::application::deploy::{DeployOptions, Deployer};
//!
//! let deployer = Deployer::new(SystemCommandRunner::new(), config, DeployOptions::new("."));
//! let report = deployer.deploy_to_bucket_from_commit(&bucket, &revision)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployReport;
pub use use_case::{site_entries, Deployer, SYNC_FLAGS};
