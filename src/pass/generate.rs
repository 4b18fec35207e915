//! Password generation.

use std::iter;

use rand::Rng;
use rand::seq::SliceRandom;
use zeroize::Zeroize;

use super::charset::{CharKind, Slot};
use super::requirements::PasswordRequirements;

/// Rejection-sampling attempts before falling back to the unused pool.
const MAX_DRAWS: usize = 64;

/// Generate a password given the constraints specified by `config`.
///
/// `config` must already be normalized with
/// [`PasswordRequirements::validate`]; it is not checked again here.
pub fn generate_password(config: PasswordRequirements) -> String {
    generate_password_with(config, &mut rand::rng())
}

/// Same as [`generate_password`], drawing from the given random source.
pub fn generate_password_with<R: Rng + ?Sized>(config: PasswordRequirements, rng: &mut R) -> String {
    let slots = place(&config, rng);

    let mut pass_chars: Vec<char> = Vec::with_capacity(slots.len());
    for slot in slots {
        let ch = if config.allow_repeats {
            slot.draw(rng)
        } else {
            draw_unused(slot, &pass_chars, rng)
        };
        debug_assert!(slot.holds(ch), "{ch:?} drawn for {slot:?}");
        pass_chars.push(ch);
    }

    repair_cases(&mut pass_chars, rng);

    let password = pass_chars.iter().collect();
    pass_chars.zeroize();
    password
}

/// Decide the class of every position.
///
/// A leading letter is pinned before the remaining positions are shuffled.
fn place<R: Rng + ?Sized>(config: &PasswordRequirements, rng: &mut R) -> Vec<Slot> {
    let mut letters = config.letters() as usize;
    let mut slots = Vec::with_capacity(config.length as usize);

    if config.first_is_letter {
        slots.push(Slot::Letter);
        letters -= 1;
    }
    let start = slots.len();

    slots.extend(iter::repeat_n(Slot::Decimal, config.decimal as usize));
    slots.extend(iter::repeat_n(Slot::Special, config.specials as usize));
    slots.extend(iter::repeat_n(Slot::Letter, letters));
    slots[start..].shuffle(rng);
    slots
}

/// Draw a character for `slot` that does not appear in `used`.
fn draw_unused<R: Rng + ?Sized>(slot: Slot, used: &[char], rng: &mut R) -> char {
    for _ in 0..MAX_DRAWS {
        let ch = slot.draw(rng);
        if !used.contains(&ch) {
            return ch;
        }
    }

    let unused: Vec<char> = (0..slot.pool_size())
        .map(|i| slot.nth(i))
        .filter(|ch| !used.contains(ch))
        .collect();
    log::trace!(
        "{MAX_DRAWS} draws for {slot:?} rejected, picking from {} unused",
        unused.len()
    );
    assert!(!unused.is_empty(), "every {slot:?} character is already used");
    unused[rng.random_range(0..unused.len())]
}

/// Lowercase and uppercase occurrences among the letters of a password.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CaseCounts {
    lower: usize,
    upper: usize,
}

impl CaseCounts {
    fn of(pass_chars: &[char]) -> Self {
        let mut counts = Self::default();
        for &ch in pass_chars {
            match CharKind::of(ch) {
                Some(CharKind::Lowercase) => counts.lower += 1,
                Some(CharKind::Uppercase) => counts.upper += 1,
                _ => {}
            }
        }
        counts
    }

    fn missing(&self) -> Option<CharKind> {
        if self.lower == 0 {
            Some(CharKind::Lowercase)
        } else if self.upper == 0 {
            Some(CharKind::Uppercase)
        } else {
            None
        }
    }

    /// The more frequent case, only if it can lose one occurrence and still be present.
    fn surplus(&self) -> Option<CharKind> {
        if self.lower >= self.upper && self.lower > 1 {
            Some(CharKind::Lowercase)
        } else if self.upper > 1 {
            Some(CharKind::Uppercase)
        } else {
            None
        }
    }
}

/// Ensure both letter cases are present.
///
/// The last occurrence of the surplus case is overwritten with a letter of
/// the missing one. The missing case has no occurrence yet, so the new letter
/// never repeats.
fn repair_cases<R: Rng + ?Sized>(pass_chars: &mut [char], rng: &mut R) {
    let counts = CaseCounts::of(pass_chars);
    let Some(missing) = counts.missing() else {
        return;
    };

    let disposable = counts.surplus().and_then(|surplus| {
        pass_chars
            .iter()
            .rposition(|&ch| CharKind::of(ch) == Some(surplus))
    });
    let Some(pos) = disposable else {
        panic!("letters {counts:?} leave no position for a {missing:?} letter");
    };

    let sample = missing.sample();
    log::trace!("replacing position {pos} with a {missing:?} letter");
    pass_chars[pos] = sample[rng.random_range(0..sample.len())];
}
