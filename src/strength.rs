//! Heuristic password strength.

use std::fmt;

use serde::Serialize;

/// Number of conditions a password can satisfy.
pub const MAX_RAW: u8 = 7;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

/// Colour of the strength bar for a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StrengthColor {
    Red,
    Yellow,
    Green,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> StrengthLabel {
        if score < 33 {
            StrengthLabel::Weak
        } else if score < 66 {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Strong
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            StrengthLabel::Weak => StrengthColor::Red,
            StrengthLabel::Medium => StrengthColor::Yellow,
            StrengthLabel::Strong => StrengthColor::Green,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct StrengthScore {
    /// Conditions met, out of [`MAX_RAW`].
    pub raw: u8,
    /// `raw` scaled onto 0..=100.
    pub score: u8,
    pub label: StrengthLabel,
}

/// Score a password.
///
/// One point each for being at least 8, 12 and 16 characters long, and one point each for
/// containing an uppercase letter, a lowercase letter, a digit, and anything that is not an ASCII
/// letter or digit.
pub fn score(password: &str) -> StrengthScore {
    let len = password.chars().count();
    let conditions = [
        len >= 8,
        len >= 12,
        len >= 16,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let raw = conditions.iter().filter(|&&met| met).count() as u8;
    let score = normalize(raw);
    StrengthScore {
        raw,
        score,
        label: StrengthLabel::from_score(score),
    }
}

fn normalize(raw: u8) -> u8 {
    (u32::from(raw) * 100 / u32::from(MAX_RAW)).min(100) as u8
}
