use thiserror::Error;

use crate::jurisdiction::Jurisdiction;

/// Errors that can occur while validating a VAT number.
///
/// An invalid VAT number is not an error: a number that matches no format
/// rule, carries an unknown prefix, or fails its check digit is reported as
/// `false`. These variants cover contract violations between a format rule
/// and the algorithm it feeds, and bad custom rule sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatError {
    /// A format rule accepted a payload that the checksum algorithm cannot
    /// read at one of its fixed positions.
    #[error("malformed {country} payload '{payload}': {reason}")]
    MalformedPayload {
        /// Jurisdiction whose algorithm rejected the payload.
        country: Jurisdiction,
        /// The payload as handed to the algorithm.
        payload: String,
        /// What was wrong with it.
        reason: MalformedReason,
    },

    /// A format rule's shape is not a valid regular expression.
    #[error("invalid format pattern for {country} ({description}): {message}")]
    InvalidPattern {
        /// Jurisdiction the rule belongs to.
        country: Jurisdiction,
        /// The rule's human label.
        description: String,
        /// Message from the regex compiler.
        message: String,
    },
}

/// Why a payload could not be read by a checksum algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// The payload ends before a position the algorithm reads.
    #[error("needs at least {required} characters, got {actual}")]
    TooShort {
        /// Minimum length the algorithm reads up to.
        required: usize,
        /// Actual payload length.
        actual: usize,
    },

    /// A position the algorithm treats as a digit holds something else.
    #[error("expected a digit at position {position}, found '{found}'")]
    NotADigit {
        /// Zero-based byte offset within the payload.
        position: usize,
        /// The character found there.
        found: char,
    },
}
