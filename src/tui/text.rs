use passform::form::{FormState, Phase};
use passform::pass::{CharacterClass, MAX_LENGTH, MIN_LENGTH, OverflowPolicy};

use crate::terminal::{
    BOLD, RED, RESET, TEAL, box_bottom, box_line, box_line_center, box_row, box_rule, box_top,
    checkbox, print_error,
};

/// Menu key for each class, in on-screen order.
pub const CLASS_KEYS: [(char, CharacterClass); 4] = [
    ('2', CharacterClass::Lowercase),
    ('3', CharacterClass::Uppercase),
    ('4', CharacterClass::Digits),
    ('5', CharacterClass::Symbols),
];

pub fn enter_prompt(form: &FormState) -> &'static str {
    if form.can_generate() {
        "Enter option (or press Enter to generate)"
    } else {
        "Enter option"
    }
}

pub fn print_form(form: &FormState, policy: OverflowPolicy, notice: Option<&str>) {
    box_top("Password Generator");

    let length = if form.length_text().is_empty() {
        "Ex. 8".to_string()
    } else {
        form.length_text().to_string()
    };
    box_row("  1) Password Length", &length);
    if let Some(err) = form.length_error() {
        box_line(&format!("     {RED}{err}{RESET}"));
    }

    for (key, class) in CLASS_KEYS {
        box_row(
            &format!("  {key}) {}", class.label()),
            checkbox(form.classes().contains(class)),
        );
    }

    box_rule();
    let generate = match form.phase() {
        Phase::Ready | Phase::Generated => "[Enter] Generate Password",
        Phase::Idle | Phase::Invalid(_) => "Generate Password (enter a length)",
    };
    box_line(&format!("  r) Reset    {generate}"));
    box_line("  s) Save defaults    h) Help    q) Quit");
    box_bottom();

    if let Some(password) = form.password() {
        println!();
        box_top("");
        box_line_center(&format!("{BOLD}{TEAL}{password}{RESET}"));
        box_bottom();
    }

    if policy != OverflowPolicy::Clamp {
        println!("  overflow policy: {policy}");
    }

    if let Some(msg) = notice {
        println!();
        print_error(msg);
    }
    println!();
}

pub fn print_help() {
    box_top("passform");
    box_line_center("Password generator");
    box_line("");
    box_line(&format!("Length must be {MIN_LENGTH} to {MAX_LENGTH} characters."));
    box_line("Checked classes join the pool:");
    for (key, class) in CLASS_KEYS {
        box_line(&format!("  {key}) {:<11}{}", class.to_string(), class.alphabet()));
    }
    box_line("");
    box_line("Each character is an independent draw.");
    box_line("Reset: lowercase only, password cleared.");
    box_line("");
    box_line("Command line: passform -l 12 -u -d -s");
    box_line("  --no-lower  --seed <N>  --saved  --save");
    box_line("  --overflow <clamp|faithful|strict>");
    box_bottom();
    println!();
}
