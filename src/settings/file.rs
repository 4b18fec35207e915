//! Settings file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Error, Settings};

pub fn save(settings: &Settings, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data)?;
    log::debug!("settings written to {}", path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings, Error> {
    if !path.exists() {
        log::debug!("{} not found, using defaults", path.display());
        return Ok(Settings::default());
    }
    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}

#[inline]
pub fn default_path() -> Result<PathBuf, Error> {
    let dir = dirs::config_dir().ok_or(Error::NoConfigDir)?;
    Ok(dir.join("quotapass").join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::Source;
    use crate::pass::PasswordRequirements;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join("settings.toml");
        let settings = Settings {
            requirements: PasswordRequirements {
                length: 30,
                decimal: 5,
                specials: 0,
                first_is_letter: false,
                allow_repeats: false,
            },
            number: 4,
            source: Source::Hardware,
        };

        save(&settings, &path).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(&dir.path().join("absent.toml")).unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "number = 3\n[requirements]\nlength = 24\n").unwrap();

        let settings = load(&path).unwrap();
        assert_eq!(settings.number, 3);
        assert_eq!(settings.requirements.length, 24);
        assert_eq!(settings.requirements.decimal, 1);
        assert_eq!(settings.source, Source::Os);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "number = \"many\"\n").unwrap();
        assert!(matches!(load(&path), Err(Error::Parse(_))));
    }
}
