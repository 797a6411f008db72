//! Terminal UI.

use super::theme::IdemseqTheme;
use super::{OutputMode, UserInterface};

/// Writes status to stdout and problems to stderr.
#[derive(Debug)]
pub struct TerminalUI {
    mode: OutputMode,
    theme: IdemseqTheme,
}

impl TerminalUI {
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            IdemseqTheme::new()
        } else {
            IdemseqTheme::plain()
        };
        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn theme(&self) -> &IdemseqTheme {
        &self.theme
    }
}

/// Create the UI for the current terminal.
pub fn create_ui(mode: OutputMode, colors: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ui_keeps_mode() {
        let ui = create_ui(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn plain_ui_uses_plain_theme() {
        let ui = TerminalUI::new(OutputMode::Normal, false);
        assert_eq!(ui.theme().format_success("ok"), "✓ ok");
    }
}
