//! # vatnum
//!
//! Offline validation of European VAT identification numbers: format rules
//! for 29 prefixes and the national check-digit algorithms behind them.
//!
//! No registry lookup is performed; a valid result means the number is
//! well-formed and its check digits are consistent, not that it was issued.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatnum::{is_valid_vat_number, validate, Jurisdiction, Verdict};
//!
//! assert!(is_valid_vat_number("DE136695976"));
//! assert!(!is_valid_vat_number("DE136695977"));
//! assert!(is_valid_vat_number(""));
//!
//! assert_eq!(
//!     validate("NL004495445B01").unwrap(),
//!     Verdict::Checked { country: Jurisdiction::Nl, passed: true },
//! );
//! ```
//!
//! ## Pipeline
//!
//! 1. Blank input is accepted ([`ValidatorConfig::blank_is_valid`]).
//! 2. [`FormatMatcher`] tries the ordered [`RULES`]; first match wins.
//! 3. The matched prefix selects a [`ChecksumPolicy`] via
//!    [`Jurisdiction::policy`], which runs over the payload.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | `vatnum` command-line binary |

pub mod checksum;
pub mod error;
pub mod format;
pub mod jurisdiction;
pub mod validator;

pub use checksum::{ChecksumPolicy, verify};
pub use error::{MalformedReason, VatError};
pub use format::{FormatMatcher, FormatRule, Prefix, RULES, VatMatch};
pub use jurisdiction::Jurisdiction;
pub use validator::{MalformedPolicy, Validator, ValidatorConfig, Verdict};

/// `true` if `raw` is blank, or matches a known format and passes its
/// jurisdiction's checksum policy.
///
/// Never panics and never errors; payloads an algorithm cannot read count
/// as invalid.
pub fn is_valid_vat_number(raw: &str) -> bool {
    Validator::default().is_valid(raw)
}

/// Classifies `raw` with the built-in rules, returning malformed payloads
/// as errors instead of folding them into an invalid verdict.
pub fn validate(raw: &str) -> Result<Verdict, VatError> {
    Validator::new(ValidatorConfig::strict()).check(raw)
}

/// Decomposes `raw` with the built-in rule table.
pub fn match_number(raw: &str) -> Option<VatMatch<'_>> {
    FormatMatcher::builtin().match_number(raw)
}
