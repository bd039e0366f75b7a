//! Character classes and pool building.

use std::fmt;

use serde::{Deserialize, Serialize};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "`!@#$%^&*:?-=_+";

/// A named, fixed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Declaration order; pools are always built in this order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Include Uppercases",
            CharacterClass::Lowercase => "Include Lowercase",
            CharacterClass::Digits => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// The four include/exclude toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for ClassSet {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }
}

impl ClassSet {
    /// No class selected.
    pub const NONE: ClassSet = ClassSet {
        lowercase: false,
        uppercase: false,
        digits: false,
        symbols: false,
    };

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// Set or unset one class. Idempotent.
    pub fn with(mut self, class: CharacterClass, enabled: bool) -> Self {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Digits => &mut self.digits,
            CharacterClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
        self
    }

    pub fn toggled(self, class: CharacterClass) -> Self {
        let enabled = !self.contains(class);
        self.with(class, enabled)
    }

    pub fn is_empty(&self) -> bool {
        !(self.lowercase || self.uppercase || self.digits || self.symbols)
    }

    /// Enabled classes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ClassSet::NONE, |set, class| set.with(class, true))
    }
}

/// Ordered concatenation of the enabled alphabets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    pub fn build(classes: &ClassSet) -> Self {
        let mut chars = Vec::new();
        for class in classes.iter() {
            chars.extend(class.alphabet().chars());
        }
        CharacterPool(chars)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for CharacterPool {
    fn from(chars: &str) -> Self {
        CharacterPool(chars.chars().collect())
    }
}

impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 15);
    }

    #[test]
    fn default_is_lowercase_only() {
        let set = ClassSet::default();
        let enabled: Vec<_> = set.iter().collect();
        assert_eq!(enabled, vec![CharacterClass::Lowercase]);
    }

    #[test]
    fn pool_follows_declaration_order() {
        let set: ClassSet = [CharacterClass::Symbols, CharacterClass::Uppercase]
            .into_iter()
            .collect();
        let pool = CharacterPool::build(&set);
        assert_eq!(pool.len(), 41);
        assert_eq!(pool.get(0), Some('A'));
        assert_eq!(pool.get(26), Some('`'));
        assert_eq!(pool.to_string(), format!("{UPPERCASE}{SYMBOLS}"));
    }

    #[test]
    fn with_is_idempotent() {
        let set = ClassSet::default()
            .with(CharacterClass::Digits, true)
            .with(CharacterClass::Digits, true);
        assert!(set.digits);
        let set = set.with(CharacterClass::Digits, false);
        assert_eq!(set, ClassSet::default());
    }

    #[test]
    fn toggle_flips_one_flag() {
        let set = ClassSet::default().toggled(CharacterClass::Lowercase);
        assert!(set.is_empty());
        assert!(CharacterPool::build(&set).is_empty());
    }
}
