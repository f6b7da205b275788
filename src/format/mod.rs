//! Recognising the shape of a VAT number.
//!
//! A [`FormatMatcher`] tries an ordered list of [`FormatRule`]s and commits
//! to the first that matches the whole input, yielding the country prefix
//! and the payload for the checksum stage.

mod matcher;
mod rules;

pub use matcher::{FormatMatcher, VatMatch};
pub use rules::{FormatRule, Prefix, RULES};
