//! Output formatting
//!
//! Human-readable status lines go to stdout, errors to stderr. JSON mode
//! prints a single pretty-printed document.

use serde::Serialize;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {message}", status::SUCCESS);
}

/// Print an informational message
pub fn print_info(message: &str) {
    println!("{} {message}", status::INFO);
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report a fatal error with its cause chain
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
