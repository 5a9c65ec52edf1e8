use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;

mod clipboard;
mod generate;
mod score;
mod table;

#[derive(Parser)]
#[command(version, about = "Generate random passwords and rate their strength.")]
enum Args {
    /// Generate one or more passwords.
    Generate(generate::GenerateArgs),
    /// Generate a password, then regenerate or copy it until you're happy.
    Interactive {
        #[command(flatten)]
        options: generate::OptionArgs,
    },
    /// Rate the strength of a password. Prompts for it if it isn't given.
    Score { password: Option<String> },
    /// Check a master password against the minimum requirements.
    Check,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Generate(args) => generate::generate(args)?,
        Args::Interactive { options } => generate::interactive(options)?,
        Args::Score { password } => score::score_password(password)?,
        Args::Check => score::check_master_password()?,
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Generation(err)) => panic!("{err:?}"),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn or_default_config(config_path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match config_path {
        Some(p) => Ok(p),
        None => default_config(),
    }
}

fn default_config() -> anyhow::Result<PathBuf> {
    let home = env::var_os("HOME")
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot find home directory of user"))?;
    let mut p = PathBuf::from(home);
    p.push(".passgen.yaml");
    Ok(p)
}

fn load_config(config_path: Option<PathBuf>) -> Result<passgen::GeneratorConfig, ProgError> {
    let explicit = config_path.is_some();
    let config_path = or_default_config(config_path)?;
    let config = if explicit {
        passgen::GeneratorConfig::load(&config_path)
    } else {
        passgen::GeneratorConfig::load_or_default(&config_path)
    };
    config.map_err(|source| ProgError::Config {
        path: config_path,
        source,
    })
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Passwords did not match.")]
    PasswordsDidntMatch,
    #[error("The password does not meet the requirements.")]
    PolicyFailed,
    #[error("Failed to load config from {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: passgen::ConfigError,
    },
    #[error("Generation error: {0}")]
    Generation(passgen::GenerationError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passgen::GenerationError> for ProgError {
    fn from(err: passgen::GenerationError) -> ProgError {
        ProgError::Generation(err)
    }
}
