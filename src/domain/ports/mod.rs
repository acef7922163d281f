//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod events;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec, OutputMode};
pub use events::{Event, EventSink, NoopEventSink};

#[cfg(test)]
pub use command_runner::ScriptedRunner;
#[cfg(test)]
pub use events::RecordingEventSink;
