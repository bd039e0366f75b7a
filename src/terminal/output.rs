//! Terminal output utilities.
//!
//! Box drawing, checkbox rendering, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const TEAL: &str = "\x1b[38;5;37m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any styling still in effect.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing (52 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 52;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ───────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content            │
pub fn box_line(content: &str) {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// │      content       │
pub fn box_line_center(content: &str) {
    let total = INNER_WIDTH.saturating_sub(console_width(content));
    let left = total / 2;
    println!(
        "│ {}{}{} │",
        " ".repeat(left),
        content,
        " ".repeat(total - left)
    );
}

/// Label on the left, value flush right.
pub fn box_row(label: &str, value: &str) {
    let used = console_width(label) + console_width(value);
    let gap = INNER_WIDTH.saturating_sub(used).max(1);
    println!("│ {}{}{} │", label, " ".repeat(gap), value);
}

pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
