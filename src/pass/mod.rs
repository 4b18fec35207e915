//! Password requirements, generation and output.

pub mod charset;
mod generate;
pub mod output;
mod requirements;

pub use generate::{generate_password, generate_password_with};
pub use output::{SecureBufWriter, Target, generate_batch};
pub use requirements::{MIN_LENGTH, PasswordRequirements, validate_requirements};
