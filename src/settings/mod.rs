//! Saved password generation settings.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entropy::Source;
use crate::pass::PasswordRequirements;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("settings I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot encode settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no configuration directory on this system")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub number: usize,
    pub source: Source,
    pub requirements: PasswordRequirements,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number: 1,
            source: Source::Os,
            requirements: PasswordRequirements::default(),
        }
    }
}

impl Settings {
    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        file::load(path)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), Error> {
        file::save(self, path)
    }

    pub fn default_path() -> Result<PathBuf, Error> {
        file::default_path()
    }
}
