use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// A configured external tool and whether it answered `--version`
pub struct ToolStatus {
    pub role: &'static str,
    pub program: String,
    pub available: bool,
}

pub fn render_version(
    version: &str,
    config_path: Option<&str>,
    tools: &[ToolStatus],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{}\n",
        ColoredText::info(format!("Octoship v{version}"))
            .bold()
            .render(supports_color)
    );
    out.push_str(&format!("Config: {}\n\n", config_path.unwrap_or("(defaults)")));
    out.push_str("Tools:\n");

    for tool in tools {
        let icon = if tool.available {
            Icon::Success
        } else {
            Icon::Warning
        };
        out.push_str(&format!(
            "  {} {:<8} {}\n",
            icon.colored(supports_color, supports_unicode),
            tool.role,
            tool.program
        ));
    }
    out
}
