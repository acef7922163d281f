//! JSON Event Sink
//!
//! Outputs events as NDJSON for CI/automation consumption.

use crate::domain::ports::{Event, EventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(obj) = event.as_object_mut() {
            obj.insert("command".to_string(), self.command.into());
            obj.insert(
                "timestamp".to_string(),
                chrono::Utc::now().to_rfc3339().into(),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl EventSink for JsonEventSink {
    fn on_event(&self, event: Event) {
        let json = match event {
            Event::Started {
                bucket,
                revision,
                destination,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "bucket": bucket,
                "revision": revision,
                "destination": destination,
                "dry_run": dry_run,
            }),

            Event::StepStarted { step } => serde_json::json!({
                "event": "step_start",
                "step": step,
            }),

            Event::CommandSpawned {
                step,
                program,
                args,
            } => serde_json::json!({
                "event": "command",
                "step": step,
                "program": program,
                "args": args,
            }),

            Event::StepCompleted { step, elapsed } => serde_json::json!({
                "event": "step_complete",
                "step": step,
                "elapsed_ms": elapsed.as_millis() as u64,
            }),

            Event::StepFailed { step, error } => serde_json::json!({
                "event": "step_failed",
                "step": step,
                "error": error,
            }),

            Event::WorkspaceCleanupFailed { path, error } => serde_json::json!({
                "event": "cleanup_failed",
                "path": path.display().to_string(),
                "error": error,
            }),

            Event::Completed {
                destination,
                uploaded,
                elapsed,
            } => serde_json::json!({
                "event": "complete",
                "status": "success",
                "destination": destination,
                "uploaded": uploaded,
                "elapsed_ms": elapsed.as_millis() as u64,
            }),

            Event::HistoryQueryFailed { range, output } => serde_json::json!({
                "event": "history_query_failed",
                "range": range,
                "output": output,
            }),
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
