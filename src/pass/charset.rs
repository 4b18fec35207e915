//! Character classes used for password generation.

use rand::Rng;

pub const LOWERCASE: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const UPPERCASE: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const DECIMAL: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// The fixed, ordered set of special characters.
pub const SPECIAL_CHARACTERS: [char; 16] = [
    '-', '.', '/', '\\', ':', '\'', '+', '&', ',', '@', '$', '!', '_', '#', '%', '~',
];

/// Number of distinct letters (lowercase + uppercase).
pub const LETTER_COUNT: u16 = (LOWERCASE.len() + UPPERCASE.len()) as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharKind {
    Lowercase,
    Uppercase,
    Decimal,
    Special,
}

impl CharKind {
    /// Classify a character, `None` if it belongs to no class.
    pub fn of(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            Some(Self::Lowercase)
        } else if ch.is_ascii_uppercase() {
            Some(Self::Uppercase)
        } else if ch.is_ascii_digit() {
            Some(Self::Decimal)
        } else if SPECIAL_CHARACTERS.contains(&ch) {
            Some(Self::Special)
        } else {
            None
        }
    }

    pub fn sample(self) -> &'static [char] {
        match self {
            Self::Lowercase => &LOWERCASE,
            Self::Uppercase => &UPPERCASE,
            Self::Decimal => &DECIMAL,
            Self::Special => &SPECIAL_CHARACTERS,
        }
    }

    pub fn is_letter(self) -> bool {
        matches!(self, Self::Lowercase | Self::Uppercase)
    }
}

/// The class assigned to a password position during placement.
///
/// Letter slots draw from both cases; the case balance is fixed up afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Letter,
    Decimal,
    Special,
}

impl Slot {
    /// Number of distinct characters a slot can hold.
    pub fn pool_size(self) -> usize {
        match self {
            Self::Letter => LETTER_COUNT as usize,
            Self::Decimal => DECIMAL.len(),
            Self::Special => SPECIAL_CHARACTERS.len(),
        }
    }

    /// The `index`th character of this slot's pool, letters ordered lowercase first.
    pub fn nth(self, index: usize) -> char {
        match self {
            Self::Letter if index < LOWERCASE.len() => LOWERCASE[index],
            Self::Letter => UPPERCASE[index - LOWERCASE.len()],
            Self::Decimal => DECIMAL[index],
            Self::Special => SPECIAL_CHARACTERS[index],
        }
    }

    /// Uniform draw from this slot's pool.
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        self.nth(rng.random_range(0..self.pool_size()))
    }

    pub fn holds(self, ch: char) -> bool {
        match (self, CharKind::of(ch)) {
            (Self::Letter, Some(kind)) => kind.is_letter(),
            (Self::Decimal, Some(CharKind::Decimal)) => true,
            (Self::Special, Some(CharKind::Special)) => true,
            _ => false,
        }
    }
}
