//! Property-based tests for the validation pipeline.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use vatnum::*;

/// Valid numbers and the index of a check digit inside the full string.
const VECTORS: &[(&str, usize)] = &[
    ("ATU10223006", 10),
    ("BE0776091951", 11),
    ("CZ25123891", 9),
    ("DE136695976", 10),
    ("DK13585628", 9),
    ("EE100931558", 10),
    ("EL094259216", 10),
    ("ESA28015865", 10),
    ("FI20774740", 9),
    ("FR40303265045", 3),
    ("GB999999973", 10),
    ("HU12892312", 9),
    ("IT00743110157", 12),
    ("LT119511515", 10),
    ("LU15027442", 9),
    ("LV40003521600", 12),
    ("MT11679112", 9),
    ("NL004495445B01", 10),
    ("PL8567346215", 11),
    ("PT501964843", 10),
    ("RO18547290", 9),
    ("SE556188840401", 11),
    ("SI50223054", 9),
    ("SK2022749619", 11),
];

fn replace_digit(number: &str, index: usize, delta: u8) -> String {
    let mut bytes = number.as_bytes().to_vec();
    let digit = bytes[index] - b'0';
    bytes[index] = b'0' + (digit + delta) % 10;
    String::from_utf8(bytes).unwrap()
}

proptest! {
    #[test]
    fn never_panics(input in any::<String>()) {
        let _ = is_valid_vat_number(&input);
        let _ = validate(&input);
    }

    #[test]
    fn never_panics_on_near_misses(input in "[A-Z]{2}[0-9A-Z*+]{0,14}") {
        let _ = is_valid_vat_number(&input);
        let _ = validate(&input);
    }

    #[test]
    fn deterministic(input in "\\PC{0,20}") {
        prop_assert_eq!(is_valid_vat_number(&input), is_valid_vat_number(&input));
        prop_assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn blank_is_valid(input in "[ \t\r\n]{0,10}") {
        prop_assert!(is_valid_vat_number(&input));
    }

    #[test]
    fn unknown_prefixes_are_invalid(input in "(XX|ZZ|US|CH)[0-9]{2,12}") {
        prop_assert!(!is_valid_vat_number(&input));
        prop_assert_eq!(validate(&input), Ok(Verdict::NoFormatMatch));
    }

    #[test]
    fn lowercase_prefixes_are_invalid(input in "[a-z]{2}[0-9]{8,12}") {
        prop_assert!(!is_valid_vat_number(&input));
    }

    #[test]
    fn unprefixed_nine_digits_are_invalid(input in "[0-9]{9}") {
        prop_assert!(!is_valid_vat_number(&input));
    }

    #[test]
    fn eu_accepts_any_digits(input in "EU[0-9]{9}") {
        prop_assert!(is_valid_vat_number(&input));
    }

    #[test]
    fn bulgaria_accepts_any_digits(input in "BG[0-9]{9,10}") {
        prop_assert!(is_valid_vat_number(&input));
    }

    #[test]
    fn greece_legacy_never_valid(input in "GR[0-9]{8,9}") {
        prop_assert!(!is_valid_vat_number(&input));
    }

    #[test]
    fn changing_a_check_digit_invalidates(
        (number, index) in proptest::sample::select(VECTORS),
        delta in 1u8..10,
    ) {
        prop_assert!(is_valid_vat_number(number));
        let broken = replace_digit(number, index, delta);
        prop_assert!(!is_valid_vat_number(&broken), "{} should be invalid", broken);
    }
}
