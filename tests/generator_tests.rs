mod common;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;

use password_generator::primitives::DEFAULT_SPECIAL_CHARS;
use password_generator::{CharClass, CompositionRules, Phase, PasswordGenerator};

use common::{init_tracing, one_of_each};

#[test]
fn one_of_each_class_within_length_bounds() {
    init_tracing();
    let generator = PasswordGenerator::new(one_of_each(), None);

    for _ in 0..500 {
        let password = generator.generate().expect("generation should succeed");
        let len = password.char_count();
        assert!((8..15).contains(&len), "length {len} outside [8, 15)");

        let counts = password.class_counts(DEFAULT_SPECIAL_CHARS);
        assert!(counts.iter().all(|&n| n >= 1), "missing a class: {counts:?}");
        assert!(password
            .chars()
            .all(|c| CharClass::classify(c, DEFAULT_SPECIAL_CHARS).is_some()));
    }
}

#[test]
fn zero_lengths_default_to_eight_and_fifteen() {
    let generator = PasswordGenerator::new(CompositionRules::default(), None);
    assert_eq!(generator.rules().min_length, 8);
    assert_eq!(generator.rules().max_length, 15);

    let mut lengths = HashSet::new();
    for _ in 0..500 {
        lengths.insert(generator.generate().unwrap().char_count());
    }
    assert!(lengths.iter().all(|len| (8..15).contains(len)));
    assert!(!lengths.contains(&15), "max_length is exclusive");
}

#[test]
fn inverted_lengths_are_coerced_to_min_plus_one() {
    let rules = CompositionRules {
        min_length: 25,
        max_length: 10,
        ..Default::default()
    };
    let generator = PasswordGenerator::new(rules, None);
    assert_eq!(generator.rules().max_length, 26);

    for _ in 0..50 {
        assert_eq!(generator.generate().unwrap().char_count(), 25);
    }
}

#[test]
fn minimums_override_maximum_length() {
    let rules = CompositionRules {
        min_uppercase: 6,
        min_lowercase: 6,
        min_number: 6,
        min_special_char: 6,
        min_length: 8,
        max_length: 15,
    };
    let generator = PasswordGenerator::new(rules, None);
    let password = generator.generate().unwrap();

    assert_eq!(password.char_count(), 24);
    assert_eq!(password.class_counts(DEFAULT_SPECIAL_CHARS), [6, 6, 6, 6]);
}

#[test]
fn custom_specials_replace_default_everywhere() {
    let special = "%^&*";
    let rules = CompositionRules {
        min_special_char: 3,
        min_length: 40,
        max_length: 60,
        ..Default::default()
    };
    let generator = PasswordGenerator::new(rules, Some(special.to_string()));

    let mut seen_custom_in_padding = false;
    for _ in 0..100 {
        let password = generator.generate().unwrap();
        assert!(
            !password.chars().any(|c| DEFAULT_SPECIAL_CHARS.contains(c)),
            "default special leaked into {password}"
        );
        assert!(password.chars().take(3).all(|c| special.contains(c)));
        if password.chars().skip(3).any(|c| special.contains(c)) {
            seen_custom_in_padding = true;
        }
    }
    assert!(seen_custom_in_padding);
}

#[test]
fn non_ascii_specials_are_kept_whole() {
    let generator = PasswordGenerator::new(
        CompositionRules {
            min_special_char: 4,
            ..Default::default()
        },
        Some("€£¥".to_string()),
    );
    let password = generator.generate().unwrap();
    assert!(password.chars().take(4).all(|c| "€£¥".contains(c)));
    assert!(password.class_counts("€£¥")[3] >= 4);
}

#[test]
fn empty_special_override_is_an_error_not_a_hang() {
    init_tracing();
    let generator = PasswordGenerator::new(one_of_each(), Some(String::new()));

    let err = generator.generate().expect_err("empty special set must fail");
    assert_eq!(err.phase(), Some(Phase::MinimumCondition(CharClass::Special)));
    assert!(err.is_degenerate());
    assert!(!err.is_entropy_failure());
    assert_eq!(err.to_string(), "error satisfying minimum special count");
}

#[test]
fn passwords_do_not_repeat() {
    let generator = PasswordGenerator::new(one_of_each(), None);
    let passwords: HashSet<String> = (0..1000)
        .map(|_| generator.generate().unwrap().into_string())
        .collect();
    assert_eq!(passwords.len(), 1000);
}

#[test]
fn padding_characters_are_roughly_uniform() {
    // No minimums, so every character comes from the padding phase.
    let generator = PasswordGenerator::new(CompositionRules::default(), None);
    let eligible = generator.eligible_chars();
    assert_eq!(eligible.len(), 66);

    let mut counts: HashMap<char, usize> = eligible.iter().map(|&c| (c, 0)).collect();
    let mut total = 0usize;
    for _ in 0..1000 {
        for c in generator.generate().unwrap().chars() {
            *counts.get_mut(&c).expect("character outside eligible set") += 1;
            total += 1;
        }
    }

    let expected = total as f64 / eligible.len() as f64;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // 65 degrees of freedom; 130 is far beyond the 99.999th percentile.
    assert!(chi_square < 130.0, "chi-square {chi_square:.1} too large");
}

#[test]
fn shared_generator_across_threads() {
    let generator = Arc::new(PasswordGenerator::new(one_of_each(), None).with_shuffle(true));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                (0..100)
                    .map(|_| generator.generate().unwrap().into_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = HashSet::new();
    for handle in handles {
        for password in handle.join().expect("worker panicked") {
            let len = password.chars().count();
            assert!((8..15).contains(&len));
            all.insert(password);
        }
    }
    assert_eq!(all.len(), 800);
}

#[cfg(feature = "config")]
#[test]
fn config_builds_working_generator() {
    use password_generator::GeneratorConfig;

    let config = GeneratorConfig {
        rules: one_of_each(),
        allowed_special_chars: Some("+=".to_string()),
        shuffle: true,
    };
    let generator = config.build().unwrap();
    let password = generator.generate().unwrap();
    assert!(password.class_counts("+=").iter().all(|&n| n >= 1));
}
