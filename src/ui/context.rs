use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Output decisions for one invocation, made once from flags and terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
    /// A human is at the keyboard and may be prompted
    pub interactive: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8) -> Self {
        Self::from_caps(json, verbose, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, verbose: u8, caps: TerminalCapabilities) -> Self {
        Self {
            json,
            verbose,
            color: !json && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
            interactive: !json && caps.stdin_is_tty && caps.is_tty && !caps.is_ci,
        }
    }
}
