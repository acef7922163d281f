//! Command handlers: parse user input into domain values, wire the use case
//! to the system runner and an event sink, then render the outcome.

pub mod deploy;
pub mod revision;
pub mod version;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use octoship::{EventSink, JsonEventSink};

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

/// NDJSON on stdout under `--json`, progress lines on stderr otherwise
fn event_sink(command: &'static str, ui: UiContext) -> Arc<dyn EventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stderr(ui))
    }
}

/// `dir` relative to `cwd`, or `cwd` itself when not given
fn resolve_dir(cwd: &Path, dir: Option<PathBuf>) -> PathBuf {
    match dir {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    }
}
