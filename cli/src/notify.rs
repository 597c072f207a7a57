//! User-facing status lines.
//!
//! Everything prints to stderr so a stdout insertion target stays clean.

use colored::Colorize;

/// Notification sink with the four severities the pipeline reports at.
pub struct Notifier;

impl Notifier {
    pub fn info(&self, message: &str) {
        eprintln!("{} {message}", "info:".cyan().bold());
    }

    pub fn success(&self, message: &str) {
        eprintln!("{} {message}", "success:".green().bold());
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{} {message}", "warning:".yellow().bold());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "error:".red().bold());
    }
}
