//! Progress display while remote sources load

pub mod reporter;

use crate::config::ProgressMode;
use cosmos_application::{LoadProgressNotifier, NoProgress};
use reporter::{ProgressReporter, SimpleProgress};

/// Build the notifier for a progress mode
pub fn notifier_for(mode: ProgressMode) -> Box<dyn LoadProgressNotifier> {
    match mode {
        ProgressMode::Spinner => Box::new(ProgressReporter::new()),
        ProgressMode::Plain => Box::new(SimpleProgress::new()),
        ProgressMode::Off => Box::new(NoProgress),
    }
}
