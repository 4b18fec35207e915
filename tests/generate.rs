use std::collections::HashSet;

use quotapass::entropy::HwRng;
use quotapass::{
    CharKind, PasswordRequirements, generate_password, generate_password_with,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Default)]
struct Counts {
    lowercase: usize,
    uppercase: usize,
    decimal: usize,
    special: usize,
}

fn count(password: &str) -> Counts {
    let mut counts = Counts::default();
    for ch in password.chars() {
        match CharKind::of(ch) {
            Some(CharKind::Lowercase) => counts.lowercase += 1,
            Some(CharKind::Uppercase) => counts.uppercase += 1,
            Some(CharKind::Decimal) => counts.decimal += 1,
            Some(CharKind::Special) => counts.special += 1,
            None => panic!("unexpected character {ch:?} in {password}"),
        }
    }
    counts
}

fn check(config: PasswordRequirements, password: &str) {
    assert_eq!(password.chars().count(), config.length as usize, "{password}");
    let counts = count(password);
    assert_eq!(counts.decimal, config.decimal as usize, "{password}");
    assert_eq!(counts.special, config.specials as usize, "{password}");
    assert_eq!(
        counts.lowercase + counts.uppercase,
        config.letters() as usize,
        "{password}"
    );
    assert!(counts.lowercase > 0 && counts.uppercase > 0, "{password}");
    if config.first_is_letter {
        let first = password.chars().next().unwrap();
        assert!(first.is_ascii_alphabetic(), "{password}");
    }
    if !config.allow_repeats {
        let unique: HashSet<char> = password.chars().collect();
        assert_eq!(unique.len(), password.len(), "repeat in {password}");
    }
}

fn config(length: u16, decimal: u16, specials: u16, allow_repeats: bool) -> PasswordRequirements {
    PasswordRequirements {
        length,
        decimal,
        specials,
        first_is_letter: true,
        allow_repeats,
    }
    .validate()
}

#[test]
fn default_requirements() {
    let config = PasswordRequirements::default();
    for _ in 0..50 {
        check(config, &generate_password(config));
    }
}

#[test]
fn quotas_across_class_combinations() {
    let mut rng = StdRng::seed_from_u64(42);
    for (decimal, specials) in [(0, 0), (4, 0), (0, 4), (1, 1), (13, 1), (0, 14)] {
        for allow_repeats in [true, false] {
            let config = config(16, decimal, specials, allow_repeats);
            for _ in 0..50 {
                check(config, &generate_password_with(config, &mut rng));
            }
        }
    }
}

#[test]
fn first_character_is_letter_over_trials() {
    // Only 2 letters, so position 0 must take one of them.
    let config = config(10, 7, 1, true);
    assert_eq!(config.letters(), 2);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let password = generate_password_with(config, &mut rng);
        assert!(password.starts_with(|c: char| c.is_ascii_alphabetic()), "{password}");
    }
}

#[test]
fn leading_class_varies_without_constraint() {
    let mut config = config(10, 7, 1, true);
    config.first_is_letter = false;
    let mut rng = StdRng::seed_from_u64(2);
    let leading_digit = (0..200)
        .filter(|_| {
            generate_password_with(config, &mut rng).starts_with(|c: char| c.is_ascii_digit())
        })
        .count();
    assert!(leading_digit > 0);
}

#[test]
fn no_repeats_at_maximum_lengths() {
    let mut rng = StdRng::seed_from_u64(3);
    for (decimal, specials, length) in [(0, 0, 52), (10, 0, 62), (0, 16, 68), (10, 16, 78)] {
        let config = config(1000, decimal, specials, false);
        assert_eq!(config.length, length);
        for _ in 0..100 {
            check(config, &generate_password_with(config, &mut rng));
        }
    }
}

#[test]
fn repeats_allowed_beyond_distinct_ceiling() {
    let mut rng = StdRng::seed_from_u64(4);
    let config = config(500, 20, 30, true);
    assert_eq!(config.length, 500);
    let password = generate_password_with(config, &mut rng);
    check(config, &password);
}

#[test]
fn hardware_source_satisfies_quotas() {
    let mut rng = HwRng::new();
    let config = config(78, 10, 16, false);
    for _ in 0..20 {
        check(config, &generate_password_with(config, &mut rng));
    }
}
