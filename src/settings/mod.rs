//! Saved defaults for the form.

mod file;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::pass::{ClassSet, OverflowPolicy};

pub use file::default_path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial text of the length field.
    pub length: String,
    pub overflow: OverflowPolicy,
    pub classes: ClassSet,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load(&default_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }
}
