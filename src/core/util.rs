//! Common utilities

use colored::Colorize;

/// Stderr diagnostics, printed only in verbose mode
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    verbose: bool,
}

impl Diagnostics {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a diagnostic line to stderr
    pub fn debug(&self, message: impl AsRef<str>) {
        if let Some(line) = self.format(message.as_ref()) {
            eprintln!("{}", line);
        }
    }

    fn format(&self, message: &str) -> Option<String> {
        self.verbose
            .then(|| format!("{} {}", "[vowelscan]".dimmed(), message))
    }
}

/// Toggle ANSI styling for everything printed through `colored`
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
