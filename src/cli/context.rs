//! CLI context - bundles settings, flags, and clipboard state.

use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::prompts::{self, Prompts};
use super::{CliFlags, Error};
use crate::pass::{PasswordRequirements, Target, generate_batch};
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    pub settings: Settings,
    prompts: Prompts,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self {
            prompts: Prompts::new(flags.quiet),
            flags,
            settings: Settings::default(),
            clipboard: None,
        }
    }

    /// Run CLI: resolve settings, normalize, then validate-only or generate.
    pub fn run(&mut self) -> Result<(), Error> {
        self.resolve_settings();

        let requested = self.settings.requirements;
        let config = requested.validate();
        self.prompts.requirements_adjusted(&requested, &config);
        self.settings.requirements = config;

        self.handle_save()?;
        if self.flags.validate {
            print!("{}", prompts::render_requirements(&config));
            return Ok(());
        }
        self.generate_output(config)
    }

    fn settings_path(&self) -> Result<PathBuf, Error> {
        match &self.flags.config {
            Some(path) => Ok(path.clone()),
            None => Ok(Settings::default_path()?),
        }
    }

    /// Defaults, then saved settings if asked for, then explicit flags.
    fn resolve_settings(&mut self) {
        let base = if self.flags.saved {
            self.settings_path()
                .and_then(|path| Settings::load_from_file(&path).map_err(Error::from))
                .unwrap_or_else(|e| {
                    self.prompts.settings_unreadable(&e);
                    Settings::default()
                })
        } else {
            Settings::default()
        };
        self.settings = self.flags.apply(base);
        log::debug!("effective settings: {:?}", self.settings);
    }

    fn handle_save(&self) -> Result<(), Error> {
        if !self.flags.save {
            return Ok(());
        }
        let path = self.settings_path()?;
        self.settings.save_to_file(&path)?;
        self.prompts.settings_saved(&path);
        Ok(())
    }

    /// Returns false when falling back to terminal output.
    fn open_clipboard(&mut self) -> Result<bool, Error> {
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                Ok(true)
            }
            Err(e) => {
                log::debug!("clipboard unavailable: {e}");
                if self.prompts.print_instead_of_copy() {
                    Ok(false)
                } else {
                    Err(Error::Aborted)
                }
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self, config: PasswordRequirements) -> Result<(), Error> {
        let count = self.settings.number.max(1);
        let source = self.settings.source;
        let mut rng = source.rng();
        log::info!("generating {count} password(s) from {} entropy", source.name());

        if self.flags.board && self.open_clipboard()? {
            let passwords = generate_batch(config, count, Target::Buffer, &mut *rng)?;
            if let (Some(ctx), Some(mut passwords)) = (self.clipboard.as_mut(), passwords) {
                let res = ctx.set_contents(passwords.clone());
                passwords.zeroize();
                res.map_err(|e| Error::Clipboard(e.to_string()))?;
                // Drop the provider's read-back copy as well.
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                self.prompts.copied(count);
            }
            return Ok(());
        }

        match self.flags.output_path() {
            Some(path) => {
                generate_batch(config, count, Target::File(&path), &mut *rng)?;
                let full_path = std::fs::canonicalize(&path).unwrap_or(path);
                self.prompts.written(count, &full_path);
            }
            None => {
                generate_batch(config, count, Target::Stdout, &mut *rng)?;
            }
        }
        Ok(())
    }
}
