//! CLI context - bundles settings and flags, drives one submission.

use std::path::Path;
use std::process::ExitCode;

use passform::error::{FormError, Rejected};
use passform::form::FormState;
use passform::pass::{CharacterClass, OverflowPolicy};
use passform::rand::{SeededSource, ThreadSource, UniformSource};
use passform::settings::{self, Settings};

use super::{CliFlags, prompts};

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Built-in defaults unless `--saved` asks for the stored ones.
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.saved {
            load_saved()
        } else {
            Settings::default()
        };
        Self { settings, flags }
    }

    /// The interactive form always starts from stored defaults.
    pub fn interactive(flags: CliFlags) -> Self {
        Self {
            settings: load_saved(),
            flags,
        }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.flags.overflow.unwrap_or(self.settings.overflow)
    }

    pub fn source(&self) -> Box<dyn UniformSource> {
        match self.flags.seed {
            Some(seed) => {
                log::info!("using seeded generator ({seed})");
                Box::new(SeededSource::seeded(seed))
            }
            None => Box::new(ThreadSource::thread()),
        }
    }

    /// Initial form with command-line choices applied on top of settings.
    pub fn form(&self) -> FormState {
        let mut form = FormState::from_settings(&self.settings);
        if let Some(ref length) = self.flags.length {
            form = form.with_length_text(length.as_str());
        }
        if self.flags.no_lower {
            form = form.with_class(CharacterClass::Lowercase, false);
        }
        if self.flags.upper {
            form = form.with_class(CharacterClass::Uppercase, true);
        }
        if self.flags.digits {
            form = form.with_class(CharacterClass::Digits, true);
        }
        if self.flags.symbols {
            form = form.with_class(CharacterClass::Symbols, true);
        }
        form
    }

    /// One submission. `save_to` receives the defaults only when it succeeds.
    pub fn submit(&self, save_to: Option<&Path>) -> Result<FormState, Rejected> {
        let policy = self.policy();
        let form = self.form().submit(self.source().as_mut(), policy)?;
        if let Some(path) = save_to {
            save_defaults_to(&form, policy, path);
        }
        Ok(form)
    }

    pub fn run(self) -> ExitCode {
        let save_to = if self.flags.save {
            settings::default_path()
                .map_err(|e| prompts::warn(&format!("Failed to save settings: {e}")))
                .ok()
        } else {
            None
        };

        match self.submit(save_to.as_deref()) {
            Ok(form) => {
                let Some(password) = form.password() else {
                    return ExitCode::FAILURE;
                };
                if let Ok(wanted) = form.validation()
                    && password.len() < wanted
                {
                    prompts::short_password(password.len(), wanted);
                }
                println!("{password}");
                ExitCode::SUCCESS
            }
            Err(rejected) => {
                prompts::error(&describe(&rejected.error));
                ExitCode::FAILURE
            }
        }
    }
}

pub fn describe(error: &FormError) -> String {
    match error {
        FormError::Validation(e) => format!("Password length: {e}"),
        FormError::Generate(e) => e.to_string(),
    }
}

fn load_saved() -> Settings {
    Settings::load_from_file().unwrap_or_else(|e| {
        prompts::settings_load_failed(&e);
        Settings::default()
    })
}

pub fn save_defaults(form: &FormState, policy: OverflowPolicy) -> bool {
    match settings::default_path() {
        Ok(path) => save_defaults_to(form, policy, &path),
        Err(e) => {
            prompts::warn(&format!("Failed to save settings: {e}"));
            false
        }
    }
}

fn save_defaults_to(form: &FormState, policy: OverflowPolicy, path: &Path) -> bool {
    let defaults = Settings {
        length: form.length_text().to_string(),
        overflow: policy,
        classes: form.classes(),
    };
    match defaults.save_to(path) {
        Ok(()) => {
            prompts::settings_saved(&path.display().to_string());
            true
        }
        Err(e) => {
            prompts::warn(&format!("Failed to save settings: {e}"));
            false
        }
    }
}
