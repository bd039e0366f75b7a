//! Password generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::charset::{CharacterPool, ClassSet};
use super::validate::validate_length;
use crate::error::{GenerateError, ValidationError};
use crate::rand::UniformSource;

/// What to do when a draw rounds up to `pool.len()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Use the last character of the pool.
    #[default]
    Clamp,
    /// Out-of-range read contributes nothing; the password comes out shorter.
    Faithful,
    /// Fail with [`GenerateError::IndexOverflow`].
    Strict,
}

impl OverflowPolicy {
    pub fn name(self) -> &'static str {
        match self {
            OverflowPolicy::Clamp => "clamp",
            OverflowPolicy::Faithful => "faithful",
            OverflowPolicy::Strict => "strict",
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(OverflowPolicy::Clamp),
            "faithful" => Ok(OverflowPolicy::Faithful),
            "strict" => Ok(OverflowPolicy::Strict),
            other => Err(format!(
                "unknown overflow policy '{other}' (expected clamp, faithful or strict)"
            )),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A generated password. Wiped on drop, redacted in `Debug`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GeneratedPassword(Zeroizing<String>);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GeneratedPassword(***)")
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated length paired with the classes to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length_text: &str, classes: ClassSet) -> Result<Self, ValidationError> {
        let length = validate_length(length_text)?;
        Ok(Self { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn pool(&self) -> CharacterPool {
        CharacterPool::build(&self.classes)
    }

    pub fn generate<R: UniformSource + ?Sized>(
        &self,
        source: &mut R,
        policy: OverflowPolicy,
    ) -> Result<GeneratedPassword, GenerateError> {
        generate(&self.pool(), self.length, source, policy)
    }
}

/// Sample `length` characters from `pool`, one independent draw per position.
///
/// Each index is `round(draw * pool.len())`, which can land on `pool.len()`
/// itself; `policy` decides what happens then.
pub fn generate<R: UniformSource + ?Sized>(
    pool: &CharacterPool,
    length: usize,
    source: &mut R,
    policy: OverflowPolicy,
) -> Result<GeneratedPassword, GenerateError> {
    if pool.is_empty() {
        log::debug!("refusing to generate from an empty pool");
        return Err(GenerateError::EmptyPool);
    }

    log::debug!(
        "generating {length} chars from a pool of {} ({policy})",
        pool.len()
    );

    let mut out = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        let index = sample_index(source.next_unit(), pool.len());
        match pool.get(index) {
            Some(c) => out.push(c),
            None => {
                log::debug!("draw rounded to index {index} of {}", pool.len());
                match policy {
                    OverflowPolicy::Clamp => out.push(pool.as_slice()[pool.len() - 1]),
                    OverflowPolicy::Faithful => {}
                    OverflowPolicy::Strict => {
                        return Err(GenerateError::IndexOverflow {
                            index,
                            len: pool.len(),
                        });
                    }
                }
            }
        }
    }

    Ok(GeneratedPassword(out))
}

#[inline]
fn sample_index(draw: f64, len: usize) -> usize {
    (draw * len as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharacterClass;
    use crate::rand::{SeededSource, SequenceSource};

    fn digits() -> CharacterPool {
        CharacterPool::from("0123456789")
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(sample_index(0.0, 10), 0);
        assert_eq!(sample_index(0.12, 10), 1);
        assert_eq!(sample_index(0.26, 10), 3);
        assert_eq!(sample_index(0.5, 10), 5);
        assert_eq!(sample_index(0.97, 10), 10);
    }

    #[test]
    fn scripted_draws_give_exact_output() {
        let mut src = SequenceSource::new([0.0, 0.12, 0.26, 0.5]);
        let pass = generate(&digits(), 4, &mut src, OverflowPolicy::Clamp).unwrap();
        assert_eq!(pass.as_str(), "0135");
    }

    #[test]
    fn overflow_policies() {
        let draws = [0.0, 0.97, 0.5];

        let mut src = SequenceSource::new(draws);
        let pass = generate(&digits(), 3, &mut src, OverflowPolicy::Clamp).unwrap();
        assert_eq!(pass.as_str(), "095");

        let mut src = SequenceSource::new(draws);
        let pass = generate(&digits(), 3, &mut src, OverflowPolicy::Faithful).unwrap();
        assert_eq!(pass.as_str(), "05");

        let mut src = SequenceSource::new(draws);
        let err = generate(&digits(), 3, &mut src, OverflowPolicy::Strict).unwrap_err();
        assert_eq!(err, GenerateError::IndexOverflow { index: 10, len: 10 });
    }

    #[test]
    fn empty_pool_fails_before_drawing() {
        let pool = CharacterPool::build(&ClassSet::NONE);
        let mut src = SequenceSource::new([0.5]);
        for policy in [OverflowPolicy::Clamp, OverflowPolicy::Faithful, OverflowPolicy::Strict] {
            assert_eq!(
                generate(&pool, 8, &mut src, policy),
                Err(GenerateError::EmptyPool)
            );
        }
    }

    #[test]
    fn request_validates_length() {
        let classes = ClassSet::NONE.with(CharacterClass::Digits, true);
        assert_eq!(
            GenerationRequest::new("3", classes),
            Err(ValidationError::TooSmall)
        );
        let req = GenerationRequest::new("8", classes).unwrap();
        assert_eq!(req.length(), 8);
        assert_eq!(req.pool().to_string(), "0123456789");

        let pass = req
            .generate(&mut SeededSource::seeded(1), OverflowPolicy::Clamp)
            .unwrap();
        assert_eq!(pass.len(), 8);
        assert!(pass.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn policy_names_parse_back() {
        for policy in [OverflowPolicy::Clamp, OverflowPolicy::Faithful, OverflowPolicy::Strict] {
            assert_eq!(policy.name().parse::<OverflowPolicy>(), Ok(policy));
        }
        assert_eq!(" Strict ".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Strict));
        assert!("round".parse::<OverflowPolicy>().is_err());
    }

    #[test]
    fn debug_is_redacted() {
        let mut src = SequenceSource::new([0.5]);
        let pass = generate(&digits(), 4, &mut src, OverflowPolicy::Clamp).unwrap();
        assert_eq!(format!("{pass:?}"), "GeneratedPassword(***)");
        assert_eq!(pass.to_string(), "5555");
    }
}
