//! Country-specific checksum verification.
//!
//! The entry point is [`verify`], which dispatches a country code and the
//! payload following it to the matching algorithm through
//! [`Jurisdiction::policy`]. The individual algorithms are exported as well
//! for callers that already know the jurisdiction.

mod algorithms;
mod payload;
mod tables;
mod weighted;

use std::str::FromStr;

use log::{debug, trace};

pub use algorithms::*;

use crate::error::VatError;
use crate::jurisdiction::Jurisdiction;

/// Signature shared by every national algorithm.
pub type ChecksumFn = fn(&str) -> Result<bool, VatError>;

/// How a jurisdiction's numbers are verified once their format matched.
#[derive(Debug, Clone, Copy)]
pub enum ChecksumPolicy {
    /// Run the national check-digit algorithm.
    Algorithm(ChecksumFn),
    /// Format alone is sufficient.
    AlwaysValid,
    /// Numbers under this prefix are never accepted.
    AlwaysInvalid,
}

impl ChecksumPolicy {
    /// Runs the policy over `digits`; the fixed policies ignore them.
    pub fn apply(self, digits: &str) -> Result<bool, VatError> {
        match self {
            Self::Algorithm(check) => check(digits),
            Self::AlwaysValid => Ok(true),
            Self::AlwaysInvalid => Ok(false),
        }
    }
}

/// Verifies the check digits of `digits` under `country_code`.
///
/// Unknown country codes, including the empty code produced by an
/// unprefixed UK number, are not an error: they yield `Ok(false)`.
///
/// # Examples
///
/// ```
/// assert_eq!(vatnum::checksum::verify("DE", "136695976"), Ok(true));
/// assert_eq!(vatnum::checksum::verify("XX", "123"), Ok(false));
/// ```
pub fn verify(country_code: &str, digits: &str) -> Result<bool, VatError> {
    match Jurisdiction::from_str(country_code) {
        Ok(country) => verify_jurisdiction(country, digits),
        Err(_) => {
            debug!("no checksum registered for country code '{country_code}'");
            Ok(false)
        }
    }
}

/// Verifies `digits` against an already-resolved jurisdiction.
pub fn verify_jurisdiction(country: Jurisdiction, digits: &str) -> Result<bool, VatError> {
    let passed = country.policy().apply(digits)?;
    trace!("{country} checksum on '{digits}': {passed}");
    Ok(passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;

    #[test]
    fn dispatches_by_code() {
        assert_eq!(verify("AT", "10223006"), Ok(true));
        assert_eq!(verify("AT", "10223007"), Ok(false));
        assert_eq!(verify("PL", "8567346215"), Ok(true));
    }

    #[test]
    fn unknown_codes_are_false() {
        assert_eq!(verify("XX", "1234567"), Ok(false));
        assert_eq!(verify("", "999999973"), Ok(false));
        assert_eq!(verify("de", "136695976"), Ok(false));
    }

    #[test]
    fn fixed_policies_ignore_payload() {
        assert_eq!(verify("EU", "123456789"), Ok(true));
        assert_eq!(verify("BG", "anything"), Ok(true));
        assert_eq!(verify("GR", "094259216"), Ok(false));
    }

    #[test]
    fn malformed_payload_propagates() {
        let err = verify("SK", "202274961").unwrap_err();
        assert!(matches!(
            err,
            VatError::MalformedPayload {
                country: Jurisdiction::Sk,
                reason: MalformedReason::TooShort { .. },
                ..
            }
        ));
    }

    #[test]
    fn policy_apply() {
        assert_eq!(ChecksumPolicy::Algorithm(dk).apply("13585628"), Ok(true));
        assert_eq!(ChecksumPolicy::AlwaysValid.apply(""), Ok(true));
        assert_eq!(ChecksumPolicy::AlwaysInvalid.apply("13585628"), Ok(false));
    }
}
