//! Visual theme and styling.

use console::Style;

use crate::state::StepStatus;

/// idemseq's visual theme.
#[derive(Debug, Clone)]
pub struct IdemseqTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for step names (bold).
    pub highlight: Style,
}

impl Default for IdemseqTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl IdemseqTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Status text colored by value.
    pub fn format_status(&self, status: StepStatus) -> String {
        let style = match status {
            StepStatus::Finished => &self.success,
            StepStatus::Failed => &self.error,
            StepStatus::Unknown => &self.dim,
        };
        format!("{}", style.apply_to(status.as_str()))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = IdemseqTheme::plain().format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = IdemseqTheme::plain().format_warning("Caution");
        assert_eq!(msg, "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let msg = IdemseqTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_skipped() {
        let msg = IdemseqTheme::plain().format_skipped("Skipped");
        assert_eq!(msg, "○ Skipped");
    }

    #[test]
    fn plain_status_is_bare_text() {
        let theme = IdemseqTheme::plain();
        for status in StepStatus::ALL {
            assert_eq!(theme.format_status(status), status.as_str());
        }
    }

    #[test]
    fn colored_theme_keeps_text() {
        let msg = IdemseqTheme::new().format_status(StepStatus::Finished);
        assert!(msg.contains("finished"));
    }
}
