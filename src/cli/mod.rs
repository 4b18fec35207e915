//! Command-line entry point.

mod context;
mod error;
mod flags;
pub mod prompts;

pub use context::Context;
pub use error::Error;
pub use flags::{CliFlags, DEFAULT_OUTPUT};
