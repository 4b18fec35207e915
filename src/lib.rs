//! Random passwords with exact character-class quotas.
//!
//! Requirements are normalized first, then generated:
//!
//! ```rust
//! use quotapass::{PasswordRequirements, generate_password};
//!
//! let config = PasswordRequirements {
//!     length: 20,
//!     decimal: 4,
//!     specials: 2,
//!     allow_repeats: false,
//!     ..Default::default()
//! }
//! .validate();
//! let password = generate_password(config);
//! assert_eq!(password.len(), 20);
//! ```

pub mod cli;
pub mod entropy;
pub mod pass;
pub mod settings;

pub use pass::charset::{CharKind, DECIMAL, LOWERCASE, SPECIAL_CHARACTERS, UPPERCASE};
pub use pass::{
    MIN_LENGTH, PasswordRequirements, generate_password, generate_password_with,
    validate_requirements,
};
