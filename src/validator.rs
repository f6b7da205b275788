//! The configured validation pipeline: blank check, format match, checksum.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::error::VatError;
use crate::format::FormatMatcher;
use crate::jurisdiction::Jurisdiction;

/// What to do when a checksum algorithm cannot read a payload its format
/// rule accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Treat the number as invalid and log a warning.
    #[default]
    Reject,
    /// Return the error to the caller.
    Propagate,
}

/// Validator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub on_malformed: MalformedPolicy,
    /// Empty and whitespace-only input is valid. Whether a value is
    /// required at all is the caller's concern.
    pub blank_is_valid: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            on_malformed: MalformedPolicy::Reject,
            blank_is_valid: true,
        }
    }
}

impl ValidatorConfig {
    /// Defaults, except malformed payloads are returned as errors.
    pub fn strict() -> Self {
        Self {
            on_malformed: MalformedPolicy::Propagate,
            ..Self::default()
        }
    }
}

/// Outcome of validating one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// Input was empty or whitespace.
    Blank,
    /// No format rule matched.
    NoFormatMatch,
    /// A rule matched but its prefix has no checksum policy.
    UnknownCountry { code: String },
    /// The checksum policy of `country` ran.
    Checked { country: Jurisdiction, passed: bool },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Blank => true,
            Self::NoFormatMatch | Self::UnknownCountry { .. } => false,
            Self::Checked { passed, .. } => *passed,
        }
    }
}

/// A [`FormatMatcher`] paired with a [`ValidatorConfig`].
///
/// Holds no mutable state and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Validator<'m> {
    matcher: &'m FormatMatcher,
    config: ValidatorConfig,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl Validator<'static> {
    /// A validator over the built-in rule table.
    pub fn new(config: ValidatorConfig) -> Self {
        Self::with_matcher(FormatMatcher::builtin(), config)
    }
}

impl<'m> Validator<'m> {
    pub fn with_matcher(matcher: &'m FormatMatcher, config: ValidatorConfig) -> Self {
        Self { matcher, config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Classifies `raw`.
    ///
    /// Errors only under [`MalformedPolicy::Propagate`], when a checksum
    /// algorithm could not read the payload.
    pub fn check(&self, raw: &str) -> Result<Verdict, VatError> {
        if self.config.blank_is_valid && raw.trim().is_empty() {
            return Ok(Verdict::Blank);
        }

        let Some(found) = self.matcher.match_number(raw) else {
            return Ok(Verdict::NoFormatMatch);
        };
        let Some(country) = found.jurisdiction() else {
            return Ok(Verdict::UnknownCountry {
                code: found.country_code.to_owned(),
            });
        };

        match checksum::verify_jurisdiction(country, found.digits) {
            Ok(passed) => Ok(Verdict::Checked { country, passed }),
            Err(err) => match self.config.on_malformed {
                MalformedPolicy::Reject => {
                    warn!("rejecting '{raw}': {err}");
                    Ok(Verdict::Checked {
                        country,
                        passed: false,
                    })
                }
                MalformedPolicy::Propagate => Err(err),
            },
        }
    }

    /// `true` if `raw` is blank or a well-formed number with consistent check
    /// digits. Malformed payloads count as invalid whatever the policy.
    pub fn is_valid(&self, raw: &str) -> bool {
        self.check(raw).is_ok_and(|verdict| verdict.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;

    #[test]
    fn default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.on_malformed, MalformedPolicy::Reject);
        assert!(config.blank_is_valid);
        assert_eq!(
            ValidatorConfig::strict().on_malformed,
            MalformedPolicy::Propagate
        );
    }

    #[test]
    fn config_from_partial_json() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"on_malformed":"propagate"}"#).unwrap();
        assert_eq!(config, ValidatorConfig::strict());

        let config: ValidatorConfig = serde_json::from_str(r#"{"blank_is_valid":false}"#).unwrap();
        assert_eq!(config.on_malformed, MalformedPolicy::Reject);
        assert!(!config.blank_is_valid);
    }

    #[test]
    fn verdicts() {
        let v = Validator::default();
        assert_eq!(v.check("").unwrap(), Verdict::Blank);
        assert_eq!(v.check("  \t").unwrap(), Verdict::Blank);
        assert_eq!(v.check("XX1234567").unwrap(), Verdict::NoFormatMatch);
        assert_eq!(
            v.check("999999973").unwrap(),
            Verdict::UnknownCountry {
                code: String::new()
            }
        );
        assert_eq!(
            v.check("DE136695976").unwrap(),
            Verdict::Checked {
                country: Jurisdiction::De,
                passed: true
            }
        );
    }

    #[test]
    fn blank_can_be_invalid() {
        let v = Validator::new(ValidatorConfig {
            blank_is_valid: false,
            ..ValidatorConfig::default()
        });
        assert_eq!(v.check("").unwrap(), Verdict::NoFormatMatch);
        assert!(!v.is_valid(" "));
    }

    #[test]
    fn malformed_rejected_by_default() {
        let v = Validator::default();
        assert_eq!(
            v.check("SK202274961").unwrap(),
            Verdict::Checked {
                country: Jurisdiction::Sk,
                passed: false
            }
        );
    }

    #[test]
    fn malformed_propagated_when_strict() {
        let v = Validator::new(ValidatorConfig::strict());
        match v.check("SK202274961") {
            Err(VatError::MalformedPayload {
                country: Jurisdiction::Sk,
                reason: MalformedReason::TooShort { required: 10, actual: 9 },
                ..
            }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!v.is_valid("SK202274961"));
    }

    #[test]
    fn verdict_serializes_with_outcome_tag() {
        let json = serde_json::to_value(Verdict::Checked {
            country: Jurisdiction::Nl,
            passed: true,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outcome": "checked", "country": "NL", "passed": true})
        );
        let json = serde_json::to_value(Verdict::NoFormatMatch).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "no_format_match"}));
    }
}
