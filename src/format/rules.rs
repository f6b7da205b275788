//! The built-in, ordered table of national VAT number shapes.

use serde::Serialize;

use crate::jurisdiction::Jurisdiction;
use crate::jurisdiction::Jurisdiction::*;

/// Whether the country prefix must be present for a rule to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prefix {
    Required,
    /// The prefix may be omitted; such matches carry an empty country code.
    Optional,
}

/// One valid textual shape of a jurisdiction's VAT numbers.
///
/// `shape` describes what follows the prefix. It may declare a named group
/// `digits` to select the payload handed to the checksum; otherwise the
/// payload is everything after the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatRule {
    pub country: Jurisdiction,
    pub prefix: Prefix,
    pub shape: &'static str,
    pub description: &'static str,
}

impl FormatRule {
    pub const fn new(country: Jurisdiction, shape: &'static str, description: &'static str) -> Self {
        Self {
            country,
            prefix: Prefix::Required,
            shape,
            description,
        }
    }

    pub const fn prefix_optional(mut self) -> Self {
        self.prefix = Prefix::Optional;
        self
    }

    /// The anchored regular expression this rule compiles to.
    pub fn pattern(&self) -> String {
        let optional = match self.prefix {
            Prefix::Required => "",
            Prefix::Optional => "?",
        };
        format!(
            "^(?P<cc>{}){optional}(?:{})$",
            self.country.code(),
            self.shape
        )
    }
}

/// Built-in rules in match order. The first rule that matches wins, so
/// order decides which interpretation an ambiguous number gets.
pub static RULES: &[FormatRule] = &[
    FormatRule::new(At, "U(?P<digits>[0-9]{8})", "Austria"),
    FormatRule::new(Be, "0[0-9]{9}", "Belgium"),
    FormatRule::new(Bg, "[0-9]{9,10}", "Bulgaria"),
    FormatRule::new(Cy, "[0-9]{8}[A-Z]", "Cyprus"),
    FormatRule::new(Cz, "[0-9]{8,10}(?:[0-9]{3})?", "Czech Republic"),
    FormatRule::new(De, "[0-9]{9}", "Germany"),
    FormatRule::new(Dk, "[0-9]{8}", "Denmark"),
    FormatRule::new(Ee, "[0-9]{9}", "Estonia"),
    FormatRule::new(El, "[0-9]{9}", "Greece"),
    FormatRule::new(Es, "[A-Z][0-9]{8}", "Spain, legal entity"),
    FormatRule::new(Es, "[0-9]{8}[A-Z]", "Spain, individual"),
    FormatRule::new(Es, "[A-Z][0-9]{7}[A-Z]", "Spain, non-profit or foreign"),
    FormatRule::new(Eu, "[0-9]{9}", "Non-union OSS registration"),
    FormatRule::new(Fi, "[0-9]{8}", "Finland"),
    FormatRule::new(Fr, "[0-9]{11}", "France"),
    FormatRule::new(Fr, "[A-HJ-NP-Z][0-9]{10}", "France, alphanumeric key"),
    FormatRule::new(Fr, "[0-9][A-HJ-NP-Z][0-9]{9}", "France, alphanumeric key"),
    FormatRule::new(Fr, "[A-HJ-NP-Z]{2}[0-9]{9}", "France, alphanumeric key"),
    FormatRule::new(Gb, "[0-9]{9}", "United Kingdom, standard").prefix_optional(),
    FormatRule::new(Gb, "[0-9]{12}", "United Kingdom, Isle of Man").prefix_optional(),
    FormatRule::new(Gb, "GD[0-9]{3}", "United Kingdom, government department").prefix_optional(),
    FormatRule::new(Gb, "HA[0-9]{3}", "United Kingdom, health authority").prefix_optional(),
    FormatRule::new(Gr, "[0-9]{8,9}", "Greece, legacy prefix"),
    FormatRule::new(Hu, "[0-9]{8}", "Hungary"),
    FormatRule::new(Ie, "[0-9]{7}[A-W]", "Ireland"),
    FormatRule::new(Ie, "[7-9][A-Z*+][0-9]{5}[A-W]", "Ireland, legacy"),
    FormatRule::new(It, "[0-9]{11}", "Italy"),
    FormatRule::new(Lv, "[0-9]{11}", "Latvia"),
    FormatRule::new(Lt, "[0-9]{9}|[0-9]{12}", "Lithuania"),
    FormatRule::new(Lu, "[0-9]{8}", "Luxembourg"),
    FormatRule::new(Mt, "[0-9]{8}", "Malta"),
    FormatRule::new(Nl, "[0-9]{9}B[0-9]{2}", "Netherlands"),
    FormatRule::new(Pl, "[0-9]{10}", "Poland"),
    FormatRule::new(Pt, "[0-9]{9}", "Portugal"),
    FormatRule::new(Ro, "[0-9]{2,10}", "Romania"),
    FormatRule::new(Si, "[0-9]{8}", "Slovenia"),
    FormatRule::new(Sk, "[0-9]{9}|[0-9]{10}", "Slovakia"),
    FormatRule::new(Se, "[0-9]{10}[0-9][1-4]", "Sweden"),
];
