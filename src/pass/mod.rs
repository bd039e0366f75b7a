//! Password generation: character classes, length validation, sampling.

pub mod charset;
mod generate;
mod validate;

pub use charset::{CharacterClass, CharacterPool, ClassSet};
pub use generate::{GeneratedPassword, GenerationRequest, OverflowPolicy, generate};
pub use validate::{MAX_LENGTH, MIN_LENGTH, validate_length};
