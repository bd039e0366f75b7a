//! Error types for validation, generation and settings.

use thiserror::Error;

use crate::form::FormState;

/// Length field validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This is a required field")]
    Required,
    #[error("Should be min of {} character", crate::pass::MIN_LENGTH)]
    TooSmall,
    #[error("Should be max of {} character", crate::pass::MAX_LENGTH)]
    TooLarge,
}

/// Generator failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Select at least one character class")]
    EmptyPool,
    #[error("Sampled index {index} is out of range for a pool of {len} characters")]
    IndexOverflow { index: usize, len: usize },
}

/// Anything that can stop a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// A submission that did not produce a password.
///
/// Hands the form back (marked touched) so the caller keeps its state.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Rejected {
    pub state: FormState,
    pub error: FormError,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not encode settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("no configuration directory for this user")]
    NoConfigDir,
}
