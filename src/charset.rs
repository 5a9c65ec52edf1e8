//! Building the alphabet a password is sampled from.

use log::warn;
use serde::{Deserialize, Serialize};

pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static DIGITS: &str = "0123456789";
/// Every printable ASCII punctuation character, once.
pub static SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]\\:;?><,./-='\"";

/// Which character classes go into the alphabet.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharsetOptions {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharsetOptions {
    fn default() -> CharsetOptions {
        CharsetOptions {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetOptions {
    pub const LOWERCASE_ONLY: CharsetOptions = CharsetOptions {
        uppercase: false,
        lowercase: true,
        digits: false,
        symbols: false,
    };

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }

    /// The options that will actually be used: lowercase-only if nothing was selected.
    pub fn effective(self) -> CharsetOptions {
        if self.is_empty() {
            CharsetOptions::LOWERCASE_ONLY
        } else {
            self
        }
    }

    fn classes(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter_map(|(selected, class)| selected.then_some(class))
    }
}

/// The characters a password is drawn from, in class order (uppercase, lowercase, digits,
/// symbols).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    chars: Vec<char>,
    options: CharsetOptions,
    fell_back: bool,
}

impl Alphabet {
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false` for an alphabet returned by [`build`].
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// The options the alphabet was built from, after the empty-selection fallback.
    pub fn options(&self) -> CharsetOptions {
        self.options
    }

    /// Whether the requested options selected nothing and lowercase was substituted.
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }
}

impl AsRef<[char]> for Alphabet {
    fn as_ref(&self) -> &[char] {
        &self.chars
    }
}

/// Build the alphabet for the given options.
///
/// Selecting no class at all is not an error: lowercase letters are used instead, and the returned
/// alphabet reports it through [`Alphabet::fell_back`].
pub fn build(requested: CharsetOptions) -> Alphabet {
    let options = requested.effective();
    let fell_back = options != requested;
    if fell_back {
        warn!("no character class selected; falling back to lowercase letters");
    }
    Alphabet {
        chars: options.classes().flat_map(str::chars).collect(),
        options,
        fell_back,
    }
}
