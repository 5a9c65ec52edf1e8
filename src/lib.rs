use std::fmt;

use serde::{Deserialize, Serialize};

pub mod charset;
pub mod config;
pub mod password_generation;
pub mod policy;
pub mod strength;

pub use charset::{Alphabet, CharsetOptions};
pub use config::{ConfigError, GeneratorConfig};
pub use password_generation::{clamp_length, generate, GenerationError, MAX_LENGTH, MIN_LENGTH};
pub use policy::PolicyViolation;
pub use strength::{StrengthLabel, StrengthScore};

/// A generated password.
///
/// The contents are never shown by `Debug`, so a `Password` can sit inside structs that get
/// logged without leaking.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn strength(&self) -> StrengthScore {
        strength::score(self.as_str())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Password {
    fn from(s: String) -> Password {
        Password(s)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
