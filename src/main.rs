use std::process::ExitCode;

use clap::Parser;
use quotapass::cli::{self, CliFlags, Context, prompts};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    // Keep generated passwords out of core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let flags = CliFlags::parse();
    init_logging(flags.verbose);

    match Context::new(flags).run() {
        Ok(()) | Err(cli::Error::Aborted) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::fatal(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
