#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine, panics are bugs.
        let valid = vatnum::is_valid_vat_number(s);
        if let Ok(verdict) = vatnum::validate(s) {
            assert_eq!(verdict.is_valid(), valid);
        }
        if let Some(m) = vatnum::match_number(s) {
            let _ = vatnum::verify(m.country_code, m.digits);
        }
    }
});
