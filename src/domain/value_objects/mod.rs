//! Domain Value Objects
//!
//! Immutable, validated values passed between the CLI and the use cases.

mod bucket;
mod revision;
mod step;

pub use bucket::BucketName;
pub use revision::Revision;
pub use step::Step;
