//! Application Layer
//!
//! Use cases that orchestrate the external tools through the domain ports.
//! This layer:
//! - Depends on the Domain layer (value objects, ports)
//! - Never spawns processes directly; everything goes through `CommandRunner`
//!
//! ## Use Cases
//!
//! - `Deployer` - Extract, build, and sync one revision to a bucket
//! - `RevisionComparator` - Distance and fast-forward queries over history

pub mod deploy;
pub mod revision;

pub use deploy::{DeployOptions, DeployReport, Deployer};
pub use revision::{count_revisions, RevisionComparator};
