//! Console Event Sink
//!
//! Human-readable progress on stderr, so stdout stays free for results.

use std::io::{self, Write};
use std::sync::Mutex;

use octoship::{Event, EventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn dim(&self, text: impl Into<String>) -> String {
        ColoredText::dim(text).render(self.ui.color)
    }

    fn write(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }

    fn render(&self, event: Event) -> Option<String> {
        let line = match event {
            // Header and summary are printed by the command itself.
            Event::Started { .. } | Event::Completed { .. } => return None,

            Event::StepStarted { step } => {
                format!("{} {}...\n", self.icon(Icon::Progress), step.describe())
            }

            Event::CommandSpawned { program, args, .. } => {
                let mut line = program;
                for arg in args {
                    line.push(' ');
                    line.push_str(&arg);
                }
                format!("  {} {}\n", self.icon(Icon::Arrow), self.dim(line))
            }

            Event::StepCompleted { step, elapsed } => format!(
                "{} {} {}\n",
                self.icon(Icon::Success),
                step.describe(),
                self.dim(format!("({}ms)", elapsed.as_millis()))
            ),

            Event::StepFailed { step, error } => format!(
                "{} {} failed\n",
                self.icon(Icon::Error),
                step.describe()
            ) + &indent(&error),

            Event::WorkspaceCleanupFailed { path, error } => format!(
                "{} could not remove workspace {}: {}\n",
                self.icon(Icon::Warning),
                path.display(),
                error
            ),

            // Raw git output, verbatim.
            Event::HistoryQueryFailed { output, .. } => output,
        };
        Some(line)
    }
}

fn indent(text: &str) -> String {
    text.lines().map(|l| format!("    {l}\n")).collect()
}

impl EventSink for ConsoleEventSink {
    fn on_event(&self, event: Event) {
        if let Some(text) = self.render(event) {
            self.write(&text);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.verbose > 0
    }
}
