//! Output configuration types

use termcolor::ColorChoice;

/// Configuration for console output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print the "N directories, M files" footer after the tree
    pub show_summary: bool,
}

impl OutputConfig {
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_summary: true,
        }
    }
}
