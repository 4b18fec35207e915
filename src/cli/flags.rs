use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::entropy::Source;
use crate::settings::Settings;

/// File name used when `--output` is given without a path, or with a directory.
pub const DEFAULT_OUTPUT: &str = "quotapass.txt";

#[derive(Debug, Default, Parser)]
#[command(
    name = "quotapass",
    about = "Generate passwords with exact digit and special character quotas.",
    version,
    long_about = None
)]
pub struct CliFlags {
    /// The length of the password.
    #[arg(short, long)]
    pub length: Option<u16>,

    /// How many decimal digits should the password contain?
    #[arg(short, long)]
    pub decimal: Option<u16>,

    /// How many special characters should the password contain?
    #[arg(short, long)]
    pub specials: Option<u16>,

    /// Do not restrict the first character to only letters.
    #[arg(short = 'f', long, overrides_with = "first_is_letter")]
    pub no_first_is_letter: bool,

    /// Always start the password with a letter.
    #[arg(long, overrides_with = "no_first_is_letter")]
    pub first_is_letter: bool,

    /// Allow characters to be used more than once.
    #[arg(short = 'r', long, overrides_with = "no_repeats")]
    pub allow_repeats: bool,

    /// Never use a character more than once.
    #[arg(long, overrides_with = "allow_repeats")]
    pub no_repeats: bool,

    /// How many passwords to generate.
    #[arg(short, long)]
    pub number: Option<usize>,

    /// Append passwords to a file instead of printing them.
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT)]
    pub output: Option<PathBuf>,

    /// Copy passwords to the clipboard.
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Use the hardware cycle counter entropy source.
    #[arg(long)]
    pub hw: bool,

    /// Print the normalized requirements instead of generating.
    #[arg(long)]
    pub validate: bool,

    /// Start from the saved settings.
    #[arg(long)]
    pub saved: bool,

    /// Save the effective settings as the new saved settings.
    #[arg(long)]
    pub save: bool,

    /// Settings file location.
    #[arg(long, env = "QUOTAPASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress warnings and prompts.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliFlags {
    /// Layer explicit flags over `base`.
    pub fn apply(&self, base: Settings) -> Settings {
        let mut settings = base;
        let req = &mut settings.requirements;

        if let Some(length) = self.length {
            req.length = length;
        }
        if let Some(decimal) = self.decimal {
            req.decimal = decimal;
        }
        if let Some(specials) = self.specials {
            req.specials = specials;
        }
        if self.no_first_is_letter {
            req.first_is_letter = false;
        } else if self.first_is_letter {
            req.first_is_letter = true;
        }
        if self.no_repeats {
            req.allow_repeats = false;
        } else if self.allow_repeats {
            req.allow_repeats = true;
        }

        if let Some(number) = self.number {
            settings.number = number;
        }
        if self.hw {
            settings.source = Source::Hardware;
        }
        settings
    }

    /// Resolved output file, a directory gets [`DEFAULT_OUTPUT`] inside it.
    pub fn output_path(&self) -> Option<PathBuf> {
        let path = self.output.as_ref()?;
        if path.is_dir() {
            Some(path.join(DEFAULT_OUTPUT))
        } else {
            Some(path.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("quotapass").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_keep_base() {
        let base = Settings::default();
        assert_eq!(parse(&[]).apply(base.clone()), base);
    }

    #[test]
    fn explicit_flags_override_base() {
        let flags = parse(&["-l", "30", "-d", "4", "-s", "0", "-f", "--no-repeats", "-n", "3", "--hw"]);
        let settings = flags.apply(Settings::default());
        assert_eq!(settings.requirements.length, 30);
        assert_eq!(settings.requirements.decimal, 4);
        assert_eq!(settings.requirements.specials, 0);
        assert!(!settings.requirements.first_is_letter);
        assert!(!settings.requirements.allow_repeats);
        assert_eq!(settings.number, 3);
        assert_eq!(settings.source, Source::Hardware);
    }

    #[test]
    fn last_repeat_flag_wins() {
        let mut base = Settings::default();
        base.requirements.allow_repeats = false;
        let flags = parse(&["--no-repeats", "-r"]);
        assert!(flags.apply(base).requirements.allow_repeats);
    }

    #[test]
    fn bare_output_uses_default_name() {
        let flags = parse(&["-o"]);
        assert_eq!(flags.output.as_deref(), Some(std::path::Path::new(DEFAULT_OUTPUT)));

        let dir = tempfile::tempdir().unwrap();
        let flags = parse(&["-o", dir.path().to_str().unwrap()]);
        assert_eq!(flags.output_path(), Some(dir.path().join(DEFAULT_OUTPUT)));
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }
}
