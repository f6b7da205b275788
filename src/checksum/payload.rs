use std::ops::Range;

use crate::error::{MalformedReason, VatError};
use crate::jurisdiction::Jurisdiction;

/// Fixed-position reader over a payload handed to a checksum algorithm.
///
/// Every accessor fails with [`VatError::MalformedPayload`] instead of
/// panicking when the payload is shorter than the position asked for, or
/// holds a non-digit where a digit is expected.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Payload<'a> {
    country: Jurisdiction,
    text: &'a str,
}

impl<'a> Payload<'a> {
    pub(crate) fn new(country: Jurisdiction, text: &'a str) -> Self {
        Self { country, text }
    }

    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    pub(crate) fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// Fails unless the payload is at least `required` bytes long.
    pub(crate) fn require(&self, required: usize) -> Result<(), VatError> {
        if self.text.len() < required {
            return Err(self.malformed(MalformedReason::TooShort {
                required,
                actual: self.text.len(),
            }));
        }
        Ok(())
    }

    pub(crate) fn byte(&self, position: usize) -> Result<u8, VatError> {
        self.require(position + 1)?;
        Ok(self.text.as_bytes()[position])
    }

    pub(crate) fn digit(&self, position: usize) -> Result<u32, VatError> {
        let byte = self.byte(position)?;
        if !byte.is_ascii_digit() {
            return Err(self.malformed(MalformedReason::NotADigit {
                position,
                found: self.char_at(position),
            }));
        }
        Ok(u32::from(byte - b'0'))
    }

    /// Reads `range` as one decimal number. Saturates at `u64::MAX`, which
    /// never equals a real check value.
    pub(crate) fn number(&self, mut range: Range<usize>) -> Result<u64, VatError> {
        self.require(range.end)?;
        range.try_fold(0u64, |acc, position| {
            let digit = u64::from(self.digit(position)?);
            Ok::<u64, VatError>(acc.saturating_mul(10).saturating_add(digit))
        })
    }

    pub(crate) fn malformed(&self, reason: MalformedReason) -> VatError {
        VatError::MalformedPayload {
            country: self.country,
            payload: self.text.to_owned(),
            reason,
        }
    }

    fn char_at(&self, position: usize) -> char {
        self.text
            .get(position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}
