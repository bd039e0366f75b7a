use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Line editor with cursor movement. `None` when the user cancels with Esc.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut input: Vec<char> = initial_value.chars().collect();
    let mut cursor = input.len();
    let mut drawn = input.len();
    let mut cancelled = false;

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return read_cooked(prompt, initial_value),
    };

    print!("{}: {}", prompt, initial_value);
    flush();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => break,
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn + 1));
        print!("\r{}: {}", prompt, text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn = input.len();
    }

    guard.release();
    println!();
    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

/// Fallback when raw mode is unavailable: plain buffered read.
fn read_cooked(prompt: &str, initial_value: &str) -> Option<String> {
    print!("{} [{}]: ", prompt, initial_value);
    flush();
    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                Some(initial_value.to_string())
            } else {
                Some(line.to_string())
            }
        }
    }
}
