//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - Subprocess runner (SystemCommandRunner)
//! - `fs/` - Directory copying for workspace preparation
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::copy_dir_all;
pub use process::SystemCommandRunner;
