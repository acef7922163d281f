//! Event Port
//!
//! Observable progress for deployments and history queries. The NDJSON sink
//! lives in `infrastructure::events`, the console sink in the binary's `ui`.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::value_objects::Step;

/// Event emitted while deploying or querying history
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Deploy started
    Started {
        bucket: String,
        revision: String,
        destination: String,
        dry_run: bool,
    },

    /// A pipeline step is about to run
    StepStarted { step: Step },

    /// A subprocess is about to be spawned (detailed sinks only)
    CommandSpawned {
        step: Step,
        program: String,
        args: Vec<String>,
    },

    /// A pipeline step finished successfully
    StepCompleted { step: Step, elapsed: Duration },

    /// A pipeline step failed; the deploy stops here
    StepFailed { step: Step, error: String },

    /// The workspace could not be removed after a successful deploy
    WorkspaceCleanupFailed { path: PathBuf, error: String },

    /// Deploy completed
    Completed {
        destination: String,
        uploaded: usize,
        elapsed: Duration,
    },

    /// A history query failed; `output` is the raw git output
    HistoryQueryFailed { range: String, output: String },
}

/// Trait for receiving events
pub trait EventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: Event);

    /// Check if this sink wants per-command events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: Event) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Sink that keeps every event, for assertions
#[cfg(test)]
#[derive(Default)]
pub struct RecordingEventSink {
    events: std::sync::Mutex<Vec<Event>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl EventSink for RecordingEventSink {
    fn on_event(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}
