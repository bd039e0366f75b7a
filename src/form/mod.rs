//! Form state for the generator screen.
//!
//! All state the screen holds lives in one [`FormState`] value. Each user
//! action consumes the current state and returns the next one, so handlers
//! never share mutable globals.

use crate::error::{FormError, Rejected, ValidationError};
use crate::pass::{
    CharacterClass, ClassSet, GeneratedPassword, GenerationRequest, OverflowPolicy,
    validate_length,
};
use crate::rand::UniformSource;
use crate::settings::Settings;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing entered yet.
    Idle,
    /// Length entered but rejected.
    Invalid(ValidationError),
    /// Length accepted; generate is enabled.
    Ready,
    /// A password is on display.
    Generated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    length_text: String,
    touched: bool,
    classes: ClassSet,
    password: GeneratedPassword,
    is_generated: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial form seeded from saved defaults.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            length_text: settings.length.clone(),
            classes: settings.classes,
            ..Self::default()
        }
    }

    pub fn length_text(&self) -> &str {
        &self.length_text
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.is_generated.then_some(&self.password)
    }

    pub fn is_generated(&self) -> bool {
        self.is_generated
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Replace the length text. Marks the field touched.
    pub fn with_length_text(mut self, text: impl Into<String>) -> Self {
        self.length_text = text.into();
        self.touched = true;
        self
    }

    /// Set or unset a class. Length is not re-validated.
    pub fn with_class(mut self, class: CharacterClass, enabled: bool) -> Self {
        self.classes = self.classes.with(class, enabled);
        self
    }

    pub fn toggle(mut self, class: CharacterClass) -> Self {
        self.classes = self.classes.toggled(class);
        self
    }

    /// Back to the pristine form: default classes, no password, empty
    /// untouched length field.
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn validation(&self) -> Result<usize, ValidationError> {
        validate_length(&self.length_text)
    }

    /// Error to show next to the length field, once the user has been there.
    pub fn length_error(&self) -> Option<ValidationError> {
        if !self.touched {
            return None;
        }
        self.validation().err()
    }

    pub fn can_generate(&self) -> bool {
        self.validation().is_ok()
    }

    /// A bad length edit after generating reports `Invalid`; the old
    /// password stays on display until the next submit or reset.
    pub fn phase(&self) -> Phase {
        match self.length_error() {
            Some(err) => Phase::Invalid(err),
            None if self.is_generated => Phase::Generated,
            None if self.can_generate() => Phase::Ready,
            None => Phase::Idle,
        }
    }

    /// Validate, generate and store the password.
    ///
    /// On failure the form comes back touched, carrying the error.
    pub fn submit<R: UniformSource + ?Sized>(
        mut self,
        source: &mut R,
        policy: OverflowPolicy,
    ) -> Result<Self, Rejected> {
        self.touched = true;

        let request = match GenerationRequest::new(&self.length_text, self.classes) {
            Ok(request) => request,
            Err(e) => return Err(self.reject(e.into())),
        };

        match request.generate(source, policy) {
            Ok(password) => {
                log::debug!("form generated a {} char password", password.len());
                self.password = password;
                self.is_generated = true;
                Ok(self)
            }
            Err(e) => Err(self.reject(e.into())),
        }
    }

    fn reject(self, error: FormError) -> Rejected {
        log::debug!("submission rejected: {error}");
        Rejected { state: self, error }
    }
}
