//! Progress notification port
//!
//! Defines the interface for reporting progress while remote data loads.

/// Callback for progress updates during remote fetches
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait LoadProgressNotifier: Send + Sync {
    /// Called when a request to `source` starts
    fn on_fetch_start(&self, source: &str);

    /// Called when a request to `source` finishes
    fn on_fetch_complete(&self, source: &str, success: bool);

    /// Called when built-in content replaces a failed source
    fn on_fallback(&self, _source: &str, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LoadProgressNotifier for NoProgress {
    fn on_fetch_start(&self, _source: &str) {}
    fn on_fetch_complete(&self, _source: &str, _success: bool) {}
}
