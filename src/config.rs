//! Generator defaults, optionally read from a YAML file.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::charset::{self, Alphabet, CharsetOptions};
use crate::password_generation::clamp_length;

pub const DEFAULT_LENGTH: usize = 12;

/// ```yaml
/// length: 16
/// classes:
///   symbols: false
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub length: usize,
    pub classes: CharsetOptions,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            length: DEFAULT_LENGTH,
            classes: CharsetOptions::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[source] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_yaml::Error),
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        let file = File::open(path).map_err(ConfigError::Io)?;
        Self::from_reader(file)
    }

    /// Like [`GeneratorConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        match File::open(path) {
            Ok(file) => Self::from_reader(file),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}; using defaults", path.display());
                Ok(GeneratorConfig::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    pub fn from_reader(rdr: impl Read) -> Result<GeneratorConfig, ConfigError> {
        serde_yaml::from_reader(rdr).map_err(ConfigError::Parse)
    }

    /// The configured length, clamped to what the generator accepts.
    pub fn clamped_length(&self) -> usize {
        clamp_length(i64::try_from(self.length).unwrap_or(i64::MAX))
    }

    pub fn alphabet(&self) -> Alphabet {
        charset::build(self.classes)
    }
}
