//! Minimum requirements for a master password.

pub const MIN_MASTER_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PolicyViolation {
    #[error("must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("must contain an uppercase letter")]
    MissingUppercase,
    #[error("must contain a lowercase letter")]
    MissingLowercase,
    #[error("must contain a digit")]
    MissingDigit,
}

/// Check a master password, returning every rule it breaks.
pub fn check(password: &str) -> Result<(), Vec<PolicyViolation>> {
    let mut violations = Vec::new();
    if password.chars().count() < MIN_MASTER_LENGTH {
        violations.push(PolicyViolation::TooShort {
            min: MIN_MASTER_LENGTH,
        });
    }
    if !password.chars().any(char::is_uppercase) {
        violations.push(PolicyViolation::MissingUppercase);
    }
    if !password.chars().any(char::is_lowercase) {
        violations.push(PolicyViolation::MissingLowercase);
    }
    if !password.chars().any(char::is_numeric) {
        violations.push(PolicyViolation::MissingDigit);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
