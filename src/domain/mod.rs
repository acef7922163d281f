//! Domain Layer
//!
//! Validated values and the ports the use cases talk through.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Revision, BucketName, Step)
//! - `ports/` - Interface definitions for infrastructure (CommandRunner, EventSink)
//!
//! This layer never spawns processes or touches the file system itself.

pub mod ports;
pub mod value_objects;
