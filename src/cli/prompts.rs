//! User-facing messages: requirement corrections, `--validate` output and
//! output summaries.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::pass::PasswordRequirements;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Always shown, quiet or not.
pub fn fatal(msg: &str) {
    eprintln!("{RED}quotapass: {msg}{RESET}");
}

/// One line per value `validate` changed, e.g. `decimal 16 -> 13`.
pub fn adjustments(requested: &PasswordRequirements, validated: &PasswordRequirements) -> Vec<String> {
    [
        ("length", requested.length, validated.length),
        ("decimal", requested.decimal, validated.decimal),
        ("specials", requested.specials, validated.specials),
    ]
    .into_iter()
    .filter(|(_, from, to)| from != to)
    .map(|(name, from, to)| format!("{name} {from} -> {to}"))
    .collect()
}

/// `--validate` output, one `key = value` per line.
pub fn render_requirements(config: &PasswordRequirements) -> String {
    format!(
        "length = {}\ndecimal = {}\nspecials = {}\nletters = {}\nfirst_is_letter = {}\nallow_repeats = {}\n",
        config.length,
        config.decimal,
        config.specials,
        config.letters(),
        config.first_is_letter,
        config.allow_repeats,
    )
}

/// Empty or y/yes, case-insensitive.
fn accepts(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes")
}

/// Notices for one CLI run; `quiet` silences everything but errors.
#[derive(Debug, Clone, Copy)]
pub struct Prompts {
    quiet: bool,
}

impl Prompts {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn notice(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{YELLOW}{msg}{RESET}");
        }
    }

    pub fn requirements_adjusted(&self, requested: &PasswordRequirements, validated: &PasswordRequirements) {
        let changes = adjustments(requested, validated);
        if !changes.is_empty() {
            self.notice(&format!("Requirements adjusted: {}", changes.join(", ")));
        }
    }

    pub fn settings_unreadable(&self, err: &dyn std::fmt::Display) {
        self.notice(&format!("Saved settings unusable ({err}), using defaults"));
    }

    pub fn settings_saved(&self, path: &Path) {
        if !self.quiet {
            println!("Settings saved \u{2192} {}", path.display());
        }
    }

    pub fn copied(&self, count: usize) {
        if !self.quiet {
            println!("{count} password(s) copied to clipboard");
        }
    }

    pub fn written(&self, count: usize, path: &Path) {
        if !self.quiet {
            println!("{count} password(s) \u{2192} {}", path.display());
        }
    }

    /// Ask whether to print instead of copying.
    ///
    /// Quiet runs and non-tty stdin answer yes without asking.
    pub fn print_instead_of_copy(&self) -> bool {
        let interactive = unsafe { libc::isatty(libc::STDIN_FILENO) == 1 };
        if self.quiet || !interactive {
            return true;
        }

        eprint!("No clipboard available. Print the passwords here? [Y/n]: ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => accepts(&answer),
            Err(_) => true,
        }
    }
}
