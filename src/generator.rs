#![allow(dead_code)]

use crate::charset::{self, CharacterClass};
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

/// Shortest password `generate` will produce.
pub const MIN_LENGTH: usize = 8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password length must be at least {min} characters.")]
    InvalidLength { min: usize, requested: i64 },
}

type Result<T> = std::result::Result<T, PasswordError>;

/// A password length that has already been checked against [`MIN_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub fn new(requested: i64) -> Result<Self> {
        let invalid = PasswordError::InvalidLength {
            min: MIN_LENGTH,
            requested,
        };

        match usize::try_from(requested) {
            Ok(length) if length >= MIN_LENGTH => Ok(Self(length)),
            _ => Err(invalid),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for PasswordLength {
    type Error = PasswordError;

    fn try_from(requested: i64) -> Result<Self> {
        Self::new(requested)
    }
}

/// Generates a password of `length` characters.
///
/// The result always holds at least one lowercase letter, one uppercase
/// letter, one digit and one symbol. The remaining characters are drawn
/// uniformly from the union of those sets, then the whole sequence is
/// shuffled.
///
/// The quality of the output is only as good as `rng`. Nothing here makes
/// the result cryptographically secure.
///
/// # Errors
/// * [`PasswordError::InvalidLength`] if `length` is below [`MIN_LENGTH`].
pub fn generate<R: Rng + ?Sized>(rng: &mut R, length: i64) -> Result<String> {
    let length = PasswordLength::new(length)?;
    Ok(generate_with(rng, length))
}

/// Same as [`generate`] for a length that is already validated.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: PasswordLength) -> String {
    tracing::debug!(length = length.get(), "generating password");

    let mut password: Vec<u8> = CharacterClass::ALL
        .iter()
        .map(|class| pick(rng, class.chars()))
        .collect();

    let alphabet = charset::alphabet();
    let remaining = length.get().saturating_sub(password.len());
    password.extend((0..remaining).map(|_| pick(rng, &alphabet)));

    password.shuffle(rng);

    password.into_iter().map(char::from).collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.gen_range(0..set.len())]
}
