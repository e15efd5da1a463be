//! Password composition.
//!
//! A password is built in three passes: one character from every selected
//! class (the coverage guarantee), the remainder drawn from the combined
//! alphabet, and a uniform shuffle of the whole sequence so the guaranteed
//! characters do not sit at predictable positions.
//!
//! The random source is a type parameter. The binary passes
//! [`rand::rngs::OsRng`]; tests pass a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::charset::CharClasses;
use crate::error::GenError;

/// Longest password the generator will build. Anything above is
/// [`GenError::InvalidLength`] rather than an attempt to allocate it.
pub const MAX_LENGTH: usize = 4096;

/// Desired length plus the classes to draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub classes: CharClasses,
}

impl Request {
    pub fn new(length: usize, classes: CharClasses) -> Self {
        Self { length, classes }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenError> {
        generate(rng, self.length, self.classes)
    }
}

/// Generate a password of exactly `length` characters containing at least
/// one character from every class in `classes`.
///
/// # Errors
///
/// - [`GenError::NoCharacterClassSelected`] if `classes` is empty. This is
///   checked before the length.
/// - [`GenError::InvalidLength`] if `length` is zero, smaller than the
///   number of selected classes, or above [`MAX_LENGTH`].
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    classes: CharClasses,
) -> Result<String, GenError> {
    if classes.is_empty() {
        return Err(GenError::NoCharacterClassSelected);
    }
    if length == 0 || length < classes.len() || length > MAX_LENGTH {
        return Err(GenError::InvalidLength);
    }

    let combined = classes.combined_alphabet();
    let mut out: Vec<u8> = Vec::with_capacity(length);

    for class in classes.iter() {
        out.push(pick(rng, class.alphabet()));
    }
    while out.len() < length {
        out.push(pick(rng, &combined));
    }

    debug_assert!(classes
        .iter()
        .all(|class| out.iter().any(|&b| class.contains(char::from(b)))));

    out.shuffle(rng);

    debug!(length, classes = classes.len(), "generated password");

    // Every alphabet is ASCII, so each byte is one char.
    Ok(out.into_iter().map(char::from).collect())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// Parse a user-entered length.
///
/// Accepts a positive decimal integer up to [`MAX_LENGTH`] surrounded by
/// optional whitespace. Anything else, including zero and negative
/// numbers, is [`GenError::InvalidLength`].
pub fn parse_length(input: &str) -> Result<usize, GenError> {
    let value: i64 = input.trim().parse().map_err(|_| GenError::InvalidLength)?;
    if value <= 0 || value > MAX_LENGTH as i64 {
        return Err(GenError::InvalidLength);
    }
    usize::try_from(value).map_err(|_| GenError::InvalidLength)
}
