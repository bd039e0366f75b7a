//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Keeps the terminal in raw mode for the guard's lifetime.
///
/// If raw mode was already on when the guard was created it is left on.
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        let already = is_raw_mode_enabled()?;
        if !already {
            enable_raw_mode()?;
        }
        Ok(Self { restore: !already })
    }

    pub fn release(&mut self) {
        if self.restore {
            let _ = disable_raw_mode();
            self.restore = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
