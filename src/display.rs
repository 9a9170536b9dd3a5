//! Terminal styling for headings.

use console::style;

use crate::config::DisplayConfig;

pub struct Theme;

impl Theme {
    /// Colors are off when `NO_COLOR` is set or stdout is not a terminal.
    pub fn should_disable_colors() -> bool {
        std::env::var_os("NO_COLOR").is_some() || !console::colors_enabled()
    }

    /// Apply the `[display]` settings for the rest of the process.
    pub fn apply(config: &DisplayConfig) {
        if !config.color {
            console::set_colors_enabled(false);
        }
    }

    /// Cyan bold heading, or plain text when colors are disabled.
    pub fn heading(text: &str) -> String {
        if Self::should_disable_colors() {
            text.to_string()
        } else {
            style(text).cyan().bold().to_string()
        }
    }
}
