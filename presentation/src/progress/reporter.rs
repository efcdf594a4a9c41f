//! Progress reporting for remote fetches

use colored::Colorize;
use cosmos_application::LoadProgressNotifier;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner per source while it loads
pub struct ProgressReporter {
    multi: MultiProgress,
    spinners: Mutex<HashMap<String, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinners: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take(&self, source: &str) -> Option<ProgressBar> {
        self.spinners.lock().ok()?.remove(source)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self, source: &str) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(source.to_string());
        pb.set_message("loading...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinners) = self.spinners.lock() {
            spinners.insert(source.to_string(), pb);
        }
    }

    fn on_fetch_complete(&self, source: &str, success: bool) {
        if let Some(pb) = self.take(source) {
            if success {
                pb.finish_with_message(format!("{}", "done".green()));
            } else {
                pb.finish_with_message(format!("{}", "failed".red()));
            }
        }
    }

    fn on_fallback(&self, source: &str, reason: &str) {
        let _ = self.multi.println(format!(
            "{} {} unavailable ({}), using built-in data",
            "!".yellow(),
            source,
            reason
        ));
    }
}

/// Plain line-per-event progress for non-interactive stderr
pub struct SimpleProgress<W: Write + Send = io::Stderr> {
    out: Mutex<W>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> SimpleProgress<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", text);
        }
    }
}

impl<W: Write + Send> LoadProgressNotifier for SimpleProgress<W> {
    fn on_fetch_start(&self, source: &str) {
        self.line(format!("{} loading {}", "->".cyan(), source.bold()));
    }

    fn on_fetch_complete(&self, source: &str, success: bool) {
        if success {
            self.line(format!("  {} {}", "v".green(), source));
        } else {
            self.line(format!("  {} {} (failed)", "x".red(), source));
        }
    }

    fn on_fallback(&self, source: &str, reason: &str) {
        self.line(format!(
            "  {} {}: {}, using built-in data",
            "!".yellow(),
            source,
            reason
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_fetch_start("opentdb");
        assert!(reporter.spinners.lock().unwrap().contains_key("opentdb"));

        reporter.on_fetch_complete("opentdb", true);
        assert!(reporter.spinners.lock().unwrap().is_empty());

        // Completing an unknown source is a no-op
        reporter.on_fetch_complete("unknown", false);
    }

    #[test]
    fn test_simple_progress_writes_one_line_per_event() {
        let progress = SimpleProgress::with_writer(Vec::new());
        progress.on_fetch_start("opentdb");
        progress.on_fetch_complete("opentdb", false);
        progress.on_fallback("opentdb", "HTTP 503");

        let text = String::from_utf8(progress.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("opentdb"));
        assert!(lines[1].contains("(failed)"));
        assert!(lines[2].contains("HTTP 503, using built-in data"));
    }
}
