//! Warning and error messages for CLI output.

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow on stderr; suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red on stderr; always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn settings_load_failed(err: &dyn std::fmt::Display) {
    warn(&format!("Failed to load settings, using defaults: {err}"));
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Defaults saved \u{2192} {path}");
    }
}

pub fn short_password(got: usize, wanted: usize) {
    warn(&format!(
        "Warning: {} of {wanted} positions overflowed the pool and were dropped ({got} chars)",
        wanted - got
    ));
}
