//! Password requirements and their normalization.

use serde::{Deserialize, Serialize};

use super::charset::{DECIMAL, LETTER_COUNT, SPECIAL_CHARACTERS};

/// Shortest password ever produced.
pub const MIN_LENGTH: u16 = 10;

/// One lowercase and one uppercase letter.
const MIN_LETTERS: u16 = 2;

/// A structure to describe the requirements of a password's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordRequirements {
    /// The length of the password.
    pub length: u16,

    /// How many decimal digits should the password contain?
    pub decimal: u16,

    /// How many special characters should the password contain?
    pub specials: u16,

    /// Should the first character always be a letter?
    pub first_is_letter: bool,

    /// May a character be used more than once?
    pub allow_repeats: bool,
}

impl Default for PasswordRequirements {
    fn default() -> Self {
        Self {
            length: 16,
            decimal: 1,
            specials: 1,
            first_is_letter: true,
            allow_repeats: true,
        }
    }
}

impl PasswordRequirements {
    /// Positions left for letters.
    pub fn letters(&self) -> u16 {
        self.length
            .saturating_sub(self.decimal)
            .saturating_sub(self.specials)
    }

    /// Longest length these requirements can be satisfied with.
    ///
    /// Without repeats this is the number of distinct characters across the
    /// requested classes: 52, 62 (digits), 68 (specials) or 78 (both).
    pub fn max_length(&self) -> u16 {
        if self.allow_repeats {
            return u16::MAX;
        }
        let mut max = LETTER_COUNT;
        if self.decimal > 0 {
            max += DECIMAL.len() as u16;
        }
        if self.specials > 0 {
            max += SPECIAL_CHARACTERS.len() as u16;
        }
        max
    }

    /// Validates the instance's values.
    ///
    /// This returns a corrected copy whose values satisfy "sane minimum
    /// requirements" suitable for any password:
    ///
    /// 1. `length` is not less than 10
    /// 2. `length` is not more than [`max_length`](Self::max_length)
    /// 3. `specials` and `decimal` leave room for 2 letters (1 lowercase,
    ///    1 uppercase) and, when the other class is requested, 1 of those
    /// 4. without repeats, no class is asked for more characters than it has
    ///
    /// # About resolving conflicts
    ///
    /// When `decimal` and `specials` compete for the same positions, `decimal`
    /// takes precedence:
    ///
    /// ```rust
    /// use quotapass::PasswordRequirements;
    /// let req = PasswordRequirements {
    ///     length: 16,
    ///     specials: 16,
    ///     decimal: 16,
    ///     ..Default::default()
    /// };
    /// let expected = PasswordRequirements {
    ///     length: 16,
    ///     specials: 1,
    ///     decimal: 13,
    ///     ..Default::default()
    /// };
    /// assert_eq!(req.validate(), expected);
    /// ```
    pub fn validate(&self) -> Self {
        let mut length = self.length.max(MIN_LENGTH).min(self.max_length());
        if length != self.length {
            log::debug!("length {} clamped to {length}", self.length);
        }

        let room = length - MIN_LETTERS;
        let (mut decimal, mut specials) = match (self.decimal, self.specials) {
            (0, specials) => (0, specials.min(room)),
            (decimal, 0) => (decimal.min(room), 0),
            (decimal, specials) => {
                let decimal = decimal.min(room - 1);
                (decimal, specials.min(room - decimal))
            }
        };

        if !self.allow_repeats {
            decimal = decimal.min(DECIMAL.len() as u16);
            specials = specials.min(SPECIAL_CHARACTERS.len() as u16);
            let distinct = decimal + specials + LETTER_COUNT;
            if length > distinct {
                log::debug!("length {length} exceeds {distinct} distinct characters");
                length = distinct;
            }
        }

        if decimal != self.decimal {
            log::debug!("decimal {} clamped to {decimal}", self.decimal);
        }
        if specials != self.specials {
            log::debug!("specials {} clamped to {specials}", self.specials);
        }

        let validated = Self {
            length,
            decimal,
            specials,
            ..*self
        };
        debug_assert!(validated.letters() >= MIN_LETTERS);
        validated
    }
}

/// Free-function form of [`PasswordRequirements::validate`].
pub fn validate_requirements(config: PasswordRequirements) -> PasswordRequirements {
    config.validate()
}
