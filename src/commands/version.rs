use std::process::ExitCode;

use anyhow::Result;
use octoship::config::LoadedConfig;
use octoship::SystemCommandRunner;

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::version::{render_version, ToolStatus};

fn tool_statuses(loaded: &LoadedConfig) -> Vec<ToolStatus> {
    let config = &loaded.config;
    let build = config.build.command.first().cloned().unwrap_or_default();

    [
        ("git", config.tools.git.clone()),
        ("tar", config.tools.tar.clone()),
        ("build", build),
        ("sync", config.sync.program.clone()),
    ]
    .into_iter()
    .map(|(role, program)| ToolStatus {
        role,
        available: SystemCommandRunner::is_available(&program),
        program,
    })
    .collect()
}

pub fn cmd_version(loaded: &LoadedConfig, ui: UiContext) -> Result<ExitCode> {
    let tools = tool_statuses(loaded);
    let config_path = loaded.path.as_ref().map(|p| p.display().to_string());

    if ui.json {
        let tools: Vec<_> = tools
            .iter()
            .map(|t| {
                serde_json::json!({
                    "role": t.role,
                    "program": t.program,
                    "available": t.available,
                })
            })
            .collect();
        json::emit(
            "version",
            serde_json::json!({
                "event": "version",
                "version": env!("CARGO_PKG_VERSION"),
                "config": config_path,
                "build_command": loaded.config.build.command,
                "tools": tools,
            }),
        )?;
    } else {
        print!(
            "{}",
            render_version(
                env!("CARGO_PKG_VERSION"),
                config_path.as_deref(),
                &tools,
                ui.color,
                ui.unicode,
            )
        );
    }

    Ok(ExitCode::SUCCESS)
}
