//! Generating passwords from the command line.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use passgen::{CharsetOptions, GeneratorConfig, Password, StrengthScore};
use serde::Serialize;

use crate::table::TableRow;
use crate::ProgError;

#[derive(clap::Args)]
pub(crate) struct OptionArgs {
    /// Length of the password; clamped to 4..=32.
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<i64>,
    /// Include uppercase letters (A-Z).
    #[arg(long, overrides_with = "no_uppercase")]
    uppercase: bool,
    /// Leave out uppercase letters.
    #[arg(long, overrides_with = "uppercase")]
    no_uppercase: bool,
    /// Include lowercase letters (a-z).
    #[arg(long, overrides_with = "no_lowercase")]
    lowercase: bool,
    /// Leave out lowercase letters.
    #[arg(long, overrides_with = "lowercase")]
    no_lowercase: bool,
    /// Include digits (0-9).
    #[arg(long, overrides_with = "no_digits")]
    digits: bool,
    /// Leave out digits.
    #[arg(long, overrides_with = "digits")]
    no_digits: bool,
    /// Include symbols.
    #[arg(long, overrides_with = "no_symbols")]
    symbols: bool,
    /// Leave out symbols.
    #[arg(long, overrides_with = "symbols")]
    no_symbols: bool,
    /// Defaults file; `~/.passgen.yaml` if not given.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    options: OptionArgs,
    /// How many passwords to generate.
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
    )]
    count: usize,
    /// Print JSON, one object per line.
    #[arg(long)]
    json: bool,
    /// Copy the (last) password to the clipboard.
    #[arg(long)]
    copy: bool,
}

/// What the generator will actually be asked for, once the config file and flags are merged.
struct Request {
    length: usize,
    alphabet: passgen::Alphabet,
}

/// Ways the request was changed from what the user asked for.
#[derive(Debug, Eq, PartialEq)]
enum Notice {
    LengthClamped { requested: i64, used: usize },
    NoClasses,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LengthClamped { requested, used } => {
                write!(f, "Length {requested} is out of range; using {used}.")
            }
            Notice::NoClasses => {
                write!(f, "No character classes selected; using lowercase letters.")
            }
        }
    }
}

/// `Some(true)` for `--x`, `Some(false)` for `--no-x`, `None` if neither was given.
fn toggle(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

impl OptionArgs {
    fn resolve(self) -> Result<Request, ProgError> {
        let config = crate::load_config(self.config.clone())?;
        let (request, notices) = merge(config, &self);
        for notice in notices {
            eprintln!("{notice}");
        }
        Ok(request)
    }

    fn classes(&self, file: CharsetOptions) -> CharsetOptions {
        CharsetOptions {
            uppercase: toggle(self.uppercase, self.no_uppercase).unwrap_or(file.uppercase),
            lowercase: toggle(self.lowercase, self.no_lowercase).unwrap_or(file.lowercase),
            digits: toggle(self.digits, self.no_digits).unwrap_or(file.digits),
            symbols: toggle(self.symbols, self.no_symbols).unwrap_or(file.symbols),
        }
    }
}

/// Layer the command-line options over the config file.
fn merge(config: GeneratorConfig, args: &OptionArgs) -> (Request, Vec<Notice>) {
    let mut notices = Vec::new();

    let requested = args
        .length
        .unwrap_or_else(|| i64::try_from(config.length).unwrap_or(i64::MAX));
    let length = passgen::clamp_length(requested);
    if length as i64 != requested {
        notices.push(Notice::LengthClamped {
            requested,
            used: length,
        });
    }

    let alphabet = passgen::charset::build(args.classes(config.classes));
    if alphabet.fell_back() {
        notices.push(Notice::NoClasses);
    }
    (Request { length, alphabet }, notices)
}

impl Request {
    fn generate(&self) -> Result<GeneratedPassword, ProgError> {
        let password = passgen::generate(self.alphabet.as_chars(), self.length)?;
        let strength = password.strength();
        Ok(GeneratedPassword { password, strength })
    }
}

#[derive(Serialize)]
struct GeneratedPassword {
    password: Password,
    #[serde(flatten)]
    strength: StrengthScore,
}

impl TableRow for GeneratedPassword {
    const COLUMNS: &'static [&'static str] = &["Password", "Score", "Strength"];

    fn cell(&self, column_index: usize) -> Cow<'_, str> {
        match column_index {
            0 => Cow::from(self.password.as_str()),
            1 => Cow::from(self.strength.score.to_string()),
            2 => Cow::from(self.strength.label.as_str()),
            _ => panic!("no column {column_index}"),
        }
    }
}

pub(crate) fn generate(args: GenerateArgs) -> Result<(), ProgError> {
    let request = args.options.resolve()?;
    let generated = (0..args.count)
        .map(|_| request.generate())
        .collect::<Result<Vec<_>, _>>()?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    if args.json {
        for item in &generated {
            serde_json::to_writer(&mut stdout, item).context("failed to write JSON")?;
            writeln!(stdout).context("failed to write to stdout")?;
        }
    } else if generated.len() == 1 {
        let item = &generated[0];
        writeln!(stdout, "{}", item.password).context("failed to write to stdout")?;
        eprintln!("{}", crate::score::strength_bar(&item.strength));
    } else {
        crate::table::display_table(&generated, &mut stdout)
            .context("failed to write to stdout")?;
    }

    if args.copy {
        if let Some(item) = generated.last() {
            crate::clipboard::send_to_clipboard(item.password.as_str())?;
            eprintln!("Copied to the clipboard.");
        }
    }
    Ok(())
}

pub(crate) fn interactive(options: OptionArgs) -> Result<(), ProgError> {
    let request = options.resolve()?;
    let choices = &["Regenerate", "Copy to the clipboard", "Quit"];

    let mut current = request.generate()?;
    loop {
        println!("{}", current.password);
        eprintln!("{}", crate::score::strength_bar(&current.strength));

        let selection =
            dialoguer::FuzzySelect::with_theme(&dialoguer::theme::ColorfulTheme::default())
                .items(&choices[..])
                .default(0)
                .interact_opt()
                .context("failed to get your answer to a prompt")?;
        match selection {
            Some(0) => current = request.generate()?,
            Some(1) => {
                crate::clipboard::send_to_clipboard(current.password.as_str())?;
                eprintln!("Copied to the clipboard.");
            }
            _ => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(args: &[&str]) -> Result<GenerateArgs, clap::Error> {
        Cli::try_parse_from(std::iter::once("passgen").chain(args.iter().copied()))
            .map(|cli| cli.args)
    }

    fn merged(config: GeneratorConfig, args: &[&str]) -> (Request, Vec<Notice>) {
        merge(config, &parse(args).unwrap().options)
    }

    fn without_symbols() -> GeneratorConfig {
        GeneratorConfig {
            length: 20,
            classes: CharsetOptions {
                symbols: false,
                ..CharsetOptions::default()
            },
        }
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let (request, notices) = merged(GeneratorConfig::default(), &[]);
        assert_eq!(request.length, 12);
        assert_eq!(request.alphabet.options(), CharsetOptions::default());
        assert!(notices.is_empty());
    }

    #[test]
    fn file_values_apply_when_no_flags_given() {
        let (request, notices) = merged(without_symbols(), &[]);
        assert_eq!(request.length, 20);
        assert!(!request.alphabet.options().symbols);
        assert!(request.alphabet.options().uppercase);
        assert!(notices.is_empty());
    }

    #[test]
    fn flags_override_the_file_both_ways() {
        let (request, _) = merged(without_symbols(), &["--symbols", "--no-digits", "-l", "8"]);
        let options = request.alphabet.options();
        assert!(options.symbols);
        assert!(!options.digits);
        assert!(options.uppercase && options.lowercase);
        assert_eq!(request.length, 8);
    }

    #[test]
    fn last_of_a_flag_pair_wins() {
        let (request, _) = merged(GeneratorConfig::default(), &["--no-symbols", "--symbols"]);
        assert!(request.alphabet.options().symbols);
        let (request, _) = merged(GeneratorConfig::default(), &["--symbols", "--no-symbols"]);
        assert!(!request.alphabet.options().symbols);
    }

    #[test]
    fn clamped_lengths_are_reported() {
        let (request, notices) = merged(GeneratorConfig::default(), &["--length", "-1"]);
        assert_eq!(request.length, 4);
        assert_eq!(
            notices,
            [Notice::LengthClamped {
                requested: -1,
                used: 4
            }]
        );

        let short_file = GeneratorConfig {
            length: 2,
            ..GeneratorConfig::default()
        };
        let (request, notices) = merged(short_file, &[]);
        assert_eq!(request.length, 4);
        assert_eq!(
            notices,
            [Notice::LengthClamped {
                requested: 2,
                used: 4
            }]
        );
        assert_eq!(notices[0].to_string(), "Length 2 is out of range; using 4.");
    }

    #[test]
    fn empty_selection_is_reported() {
        let args = ["--no-uppercase", "--no-lowercase", "--no-digits", "--no-symbols"];
        let (request, notices) = merged(GeneratorConfig::default(), &args);
        assert_eq!(request.alphabet.options(), CharsetOptions::LOWERCASE_ONLY);
        assert_eq!(notices, [Notice::NoClasses]);
    }

    #[test]
    fn count_must_be_positive() {
        assert!(parse(&["--count", "0"]).is_err());
        assert_eq!(parse(&["-n", "3"]).unwrap().count, 3);
        assert_eq!(parse(&[]).unwrap().count, 1);
    }
}
