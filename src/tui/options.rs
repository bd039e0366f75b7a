use passform::error::FormError;
use passform::form::FormState;
use passform::pass::OverflowPolicy;
use passform::rand::UniformSource;

use crate::cli::{Context, save_defaults};
use crate::terminal::{clear, reset_terminal};

use super::{CLASS_KEYS, enter_prompt, get_editable_input, print_form, print_help};

/// What the menu loop does after a choice has been applied to the form.
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Notice(String),
    EditLength,
    Save,
    Help,
    Break,
}

use LoopAction::*;

pub fn gen_form_menu(ctx: &Context) {
    reset_terminal();

    let policy = ctx.policy();
    let mut source = ctx.source();
    let mut form = ctx.form();
    let mut notice: Option<String> = None;

    loop {
        clear();
        print_form(&form, policy, notice.take().as_deref());

        let Some(input) = get_editable_input(enter_prompt(&form), "") else {
            continue;
        };

        let (next, action) = apply_choice(form, input.trim(), source.as_mut(), policy);
        form = next;

        match action {
            Continue => {}
            Notice(msg) => notice = Some(msg),
            EditLength => {
                if let Some(text) = get_editable_input("Password length", form.length_text()) {
                    form = form.with_length_text(text.trim());
                }
            }
            Save => {
                if !save_defaults(&form, policy) {
                    notice = Some("Could not save defaults".to_string());
                }
            }
            Help => {
                clear();
                print_help();
                let _ = get_editable_input("Press Enter to return", "");
            }
            Break => {
                clear();
                break;
            }
        }
    }
}

/// Apply one menu choice. Everything except length editing, saving and help
/// is handled here without touching the terminal.
pub fn apply_choice(
    form: FormState,
    choice: &str,
    source: &mut dyn UniformSource,
    policy: OverflowPolicy,
) -> (FormState, LoopAction) {
    match choice {
        "" => match form.submit(source, policy) {
            Ok(form) => (form, Continue),
            Err(rejected) => {
                let action = match rejected.error {
                    // shown inline next to the field
                    FormError::Validation(_) => Continue,
                    FormError::Generate(e) => Notice(e.to_string()),
                };
                (rejected.state, action)
            }
        },
        "1" => (form, EditLength),
        "r" => (form.reset(), Continue),
        "s" => (form, Save),
        "h" | "help" => (form, Help),
        "q" | "quit" | "exit" => (form, Break),
        other => {
            let mut chars = other.chars();
            let toggled = match (chars.next(), chars.next()) {
                (Some(key), None) => CLASS_KEYS
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, class)| *class),
                _ => None,
            };
            match toggled {
                Some(class) => (form.toggle(class), Continue),
                None => (form, Notice("Invalid selection".to_string())),
            }
        }
    }
}
