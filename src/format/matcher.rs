use std::str::FromStr;
use std::sync::LazyLock;

use log::{debug, error};
use regex::Regex;
use serde::Serialize;

use crate::error::VatError;
use crate::jurisdiction::Jurisdiction;

use super::rules::{FormatRule, RULES};

static BUILTIN: LazyLock<FormatMatcher> = LazyLock::new(|| FormatMatcher::lenient(RULES));

#[derive(Debug)]
struct CompiledRule {
    rule: FormatRule,
    regex: Regex,
}

/// Decomposition of an input by the first format rule it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VatMatch<'a> {
    /// The rule that matched.
    pub rule: FormatRule,
    /// The prefix as written in the input; empty when an optional prefix
    /// was left out.
    pub country_code: &'a str,
    /// Payload handed to the checksum.
    pub digits: &'a str,
}

impl VatMatch<'_> {
    /// The jurisdiction named by the prefix, if it was written and known.
    pub fn jurisdiction(&self) -> Option<Jurisdiction> {
        Jurisdiction::from_str(self.country_code).ok()
    }
}

/// An ordered set of compiled format rules. First match wins.
#[derive(Debug)]
pub struct FormatMatcher {
    rules: Vec<CompiledRule>,
}

impl FormatMatcher {
    /// Compiles `rules` in the given order.
    ///
    /// Fails on the first shape that is not a valid regular expression.
    pub fn new(rules: &[FormatRule]) -> Result<Self, VatError> {
        let rules = rules
            .iter()
            .map(|rule| compile(*rule))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The matcher over the built-in rule table, compiled on first use.
    pub fn builtin() -> &'static FormatMatcher {
        &BUILTIN
    }

    fn lenient(rules: &[FormatRule]) -> Self {
        let rules = rules
            .iter()
            .filter_map(|rule| match compile(*rule) {
                Ok(compiled) => Some(compiled),
                Err(err) => {
                    error!("skipping format rule: {err}");
                    None
                }
            })
            .collect();
        Self { rules }
    }

    /// Rules in match order.
    pub fn rules(&self) -> impl Iterator<Item = &FormatRule> + '_ {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    /// Matches `input` against every rule in order and decomposes it by the
    /// first one that fits. `None` means the input has no known shape.
    pub fn match_number<'a>(&self, input: &'a str) -> Option<VatMatch<'a>> {
        for compiled in &self.rules {
            let Some(captures) = compiled.regex.captures(input) else {
                continue;
            };

            let prefix = captures.name("cc");
            let country_code = prefix.map_or("", |m| m.as_str());
            let digits = match captures.name("digits") {
                Some(group) => group.as_str(),
                None => &input[prefix.map_or(0, |m| m.end())..],
            };

            debug!(
                "'{input}' matched {} rule '{}'",
                compiled.rule.country, compiled.rule.description
            );
            return Some(VatMatch {
                rule: compiled.rule,
                country_code,
                digits,
            });
        }

        debug!("'{input}' matched no format rule");
        None
    }
}

fn compile(rule: FormatRule) -> Result<CompiledRule, VatError> {
    let regex = Regex::new(&rule.pattern()).map_err(|err| VatError::InvalidPattern {
        country: rule.country,
        description: rule.description.to_owned(),
        message: err.to_string(),
    })?;
    Ok(CompiledRule { rule, regex })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> &'static FormatMatcher {
        FormatMatcher::builtin()
    }

    #[test]
    fn builtin_rules_all_compile() {
        assert_eq!(matcher().rules().count(), RULES.len());
        assert!(FormatMatcher::new(RULES).is_ok());
    }

    #[test]
    fn extracts_prefix_and_payload() {
        let m = matcher().match_number("DE136695976").unwrap();
        assert_eq!(m.country_code, "DE");
        assert_eq!(m.digits, "136695976");
        assert_eq!(m.jurisdiction(), Some(Jurisdiction::De));
    }

    #[test]
    fn named_group_selects_payload() {
        let m = matcher().match_number("ATU10223006").unwrap();
        assert_eq!(m.country_code, "AT");
        assert_eq!(m.digits, "10223006");
    }

    #[test]
    fn optional_prefix_left_out() {
        let m = matcher().match_number("999999973").unwrap();
        assert_eq!(m.rule.country, Jurisdiction::Gb);
        assert_eq!(m.country_code, "");
        assert_eq!(m.digits, "999999973");
        assert_eq!(m.jurisdiction(), None);
    }

    #[test]
    fn gb_special_forms_keep_their_letters() {
        let m = matcher().match_number("GBGD100").unwrap();
        assert_eq!(m.country_code, "GB");
        assert_eq!(m.digits, "GD100");
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert!(matcher().match_number("").is_none());
        assert!(matcher().match_number("XX1234567").is_none());
        assert!(matcher().match_number("de136695976").is_none());
        assert!(matcher().match_number("DE 136695976").is_none());
        assert!(matcher().match_number("DE13669597").is_none());
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        assert!(matcher().match_number("DE１３６６９５９７６").is_none());
        assert!(matcher().match_number("DE١٣٦٦٩٥٩٧٦").is_none());
    }

    #[test]
    fn first_listed_rule_wins() {
        let rules = [
            FormatRule::new(Jurisdiction::Cz, "(?P<digits>[0-9]{8})[0-9]*", "short"),
            FormatRule::new(Jurisdiction::Cz, "[0-9]{8,10}", "full"),
        ];
        let custom = FormatMatcher::new(&rules).unwrap();

        let m = custom.match_number("CZ2512389100").unwrap();
        assert_eq!(m.rule.description, "short");
        assert_eq!(m.digits, "25123891");

        let reversed = FormatMatcher::new(&[rules[1], rules[0]]).unwrap();
        let m = reversed.match_number("CZ2512389100").unwrap();
        assert_eq!(m.rule.description, "full");
        assert_eq!(m.digits, "2512389100");
    }

    #[test]
    fn invalid_shape_is_reported() {
        let rules = [FormatRule::new(Jurisdiction::Mt, "[0-9", "broken")];
        match FormatMatcher::new(&rules) {
            Err(VatError::InvalidPattern {
                country,
                description,
                ..
            }) => {
                assert_eq!(country, Jurisdiction::Mt);
                assert_eq!(description, "broken");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn lenient_skips_broken_rules() {
        let rules = [
            FormatRule::new(Jurisdiction::Mt, "[0-9", "broken"),
            FormatRule::new(Jurisdiction::Mt, "[0-9]{8}", "Malta"),
        ];
        let matcher = FormatMatcher::lenient(&rules);
        assert_eq!(matcher.rules().count(), 1);
        assert!(matcher.match_number("MT11679112").is_some());
    }
}
