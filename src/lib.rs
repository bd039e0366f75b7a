//! Password generator form.
//!
//! Pick a length (4 to 15) and any of four character classes, then draw a
//! password from the combined alphabet.
//!
//! ```
//! use passform::form::FormState;
//! use passform::pass::{CharacterClass, OverflowPolicy};
//! use passform::rand::SeededSource;
//!
//! let form = FormState::new()
//!     .with_length_text("8")
//!     .with_class(CharacterClass::Digits, true)
//!     .submit(&mut SeededSource::seeded(42), OverflowPolicy::Clamp)
//!     .unwrap();
//! assert_eq!(form.password().unwrap().len(), 8);
//! ```

pub mod error;
pub mod form;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::{FormError, GenerateError, Rejected, SettingsError, ValidationError};
pub use form::{FormState, Phase};
pub use settings::Settings;
