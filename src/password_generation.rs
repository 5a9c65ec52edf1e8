//! Utilities for generating passwords.

use log::debug;
use rand::{CryptoRng, Rng};

use crate::Password;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("password length must be between 4 and 32, got {0}")]
    InvalidLength(usize),
    #[error("cannot generate a password from an empty alphabet")]
    EmptyAlphabet,
}

/// Generate a password of `len` characters from `alphabet`, using the thread-local CSPRNG.
pub fn generate(alphabet: &[char], len: usize) -> Result<Password, GenerationError> {
    generate_random_password(&mut rand::thread_rng(), alphabet, len)
}

/// Generate a simple, impossible-to-guess password by just randomly sampling the given alphabet.
///
/// Every position is an independent, uniform draw over the whole alphabet, so there is no
/// guarantee that any particular class shows up.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
pub fn generate_random_password<R>(
    rng: &mut R,
    alphabet: &[char],
    len: usize,
) -> Result<Password, GenerationError>
where
    R: Rng + CryptoRng,
{
    if alphabet.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&len) {
        return Err(GenerationError::InvalidLength(len));
    }
    debug!(
        "generating a {}-character password from {} symbols",
        len,
        alphabet.len()
    );

    let mut password = String::with_capacity(len);
    for _ in 0..len {
        password.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }
    Ok(Password::from(password))
}

/// Clamp a requested length into the supported range.
pub fn clamp_length(requested: i64) -> usize {
    requested.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::charset::{self, CharsetOptions};

    #[test]
    fn output_has_requested_length() {
        let alphabet = charset::build(CharsetOptions::default());
        for len in MIN_LENGTH..=MAX_LENGTH {
            let pw = generate(alphabet.as_chars(), len).unwrap();
            assert_eq!(pw.len(), len);
        }
    }

    #[test]
    fn output_only_uses_the_alphabet() {
        let alphabet = charset::build(CharsetOptions {
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: true,
        });
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..200 {
            let pw = generate_random_password(&mut rng, alphabet.as_chars(), 32).unwrap();
            assert!(pw.as_str().chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn lengths_out_of_range_are_rejected() {
        let alphabet = charset::build(CharsetOptions::default());
        for len in [0, 1, 3, 33, 1000] {
            assert_eq!(
                generate(alphabet.as_chars(), len),
                Err(GenerationError::InvalidLength(len))
            );
        }
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        assert_eq!(generate(&[], 8), Err(GenerationError::EmptyAlphabet));
        // The alphabet is checked before the length.
        assert_eq!(generate(&[], 0), Err(GenerationError::EmptyAlphabet));
    }

    #[test]
    fn single_symbol_alphabet() {
        let pw = generate(&['x'], 5).unwrap();
        assert_eq!(pw.as_str(), "xxxxx");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let alphabet = charset::build(CharsetOptions::default());
        let mut first = ChaCha20Rng::seed_from_u64(42);
        let mut second = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(
            generate_random_password(&mut first, alphabet.as_chars(), 16),
            generate_random_password(&mut second, alphabet.as_chars(), 16),
        );
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_length(-1), MIN_LENGTH);
        assert_eq!(clamp_length(0), MIN_LENGTH);
        assert_eq!(clamp_length(12), 12);
        assert_eq!(clamp_length(100), MAX_LENGTH);
    }
}
