//! Presentation-level configuration
//!
//! Resolved output settings after merging the config file with CLI flags.

use cosmos_domain::OutputFormat;

/// How remote-load progress is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// Animated spinners, for a terminal
    Spinner,
    /// One line per event, for logs and pipes
    Plain,
    Off,
}

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show spinners while remote sources load
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Spinners and colour only make sense for text output
    pub fn for_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        if format == OutputFormat::Json {
            self.color = false;
            self.show_progress = false;
        }
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        if quiet {
            self.show_progress = false;
        }
        self
    }

    /// Pick the progress display given whether stderr is a terminal
    pub fn progress_mode(&self, interactive: bool) -> ProgressMode {
        match (self.show_progress, interactive) {
            (false, _) => ProgressMode::Off,
            (true, true) => ProgressMode::Spinner,
            (true, false) => ProgressMode::Plain,
        }
    }

    /// Apply the colour setting process-wide
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_disables_decoration() {
        let config = OutputConfig::default().for_format(OutputFormat::Json);
        assert!(!config.color);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_quiet() {
        assert!(!OutputConfig::default().quiet(true).show_progress);
        assert!(OutputConfig::default().quiet(false).show_progress);
    }

    #[test]
    fn test_progress_mode_follows_terminal() {
        let config = OutputConfig::default();
        assert_eq!(config.progress_mode(true), ProgressMode::Spinner);
        assert_eq!(config.progress_mode(false), ProgressMode::Plain);
        assert_eq!(config.quiet(true).progress_mode(true), ProgressMode::Off);
    }
}
