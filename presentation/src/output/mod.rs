//! Output formatting

pub mod console;
pub mod formatter;
pub mod json;

use cosmos_domain::OutputFormat;

/// Formatter for the selected output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn formatter::OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(console::ConsoleFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
