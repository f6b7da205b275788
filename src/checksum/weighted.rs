//! Shared primitives for positional-weight check digits.

use crate::error::VatError;

use super::payload::Payload;

/// How the weighted total is turned into a check value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// `total mod m`
    Remainder,
    /// `m - (total mod m)`
    Complement,
}

/// What happens to a computed check value that is not a single digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Anything above 9 becomes 0.
    Zero,
    /// Anything above 9 has 10 subtracted (10 → 0, 11 → 1).
    LessTen,
}

impl Overflow {
    fn apply(self, value: u32) -> u32 {
        match (self, value) {
            (_, 0..=9) => value,
            (Self::Zero, _) => 0,
            (Self::LessTen, _) => value - 10,
        }
    }
}

/// A single-digit weighted check, described entirely by data.
///
/// Digit `start + i` is multiplied by `weights[i]`; the products (optionally
/// folded to their digit sum) are added up, `adjust` is added, and the total
/// is reduced modulo `modulus`. The result, after overflow mapping, must
/// equal the digit at `check_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedCheck {
    pub weights: &'static [u32],
    pub start: usize,
    pub check_at: usize,
    pub modulus: u32,
    pub reduction: Reduction,
    pub fold_products: bool,
    pub adjust: u32,
    pub overflow: Overflow,
}

impl WeightedCheck {
    pub(crate) fn total(&self, payload: &Payload<'_>) -> Result<u32, VatError> {
        let mut total = 0;
        for (i, &weight) in self.weights.iter().enumerate() {
            let product = payload.digit(self.start + i)? * weight;
            total += if self.fold_products {
                digit_sum(product)
            } else {
                product
            };
        }
        Ok(total)
    }

    /// Check value before overflow mapping. Letter-valued checks build on this.
    pub(crate) fn raw_check(&self, total: u32) -> u32 {
        let remainder = (total + self.adjust) % self.modulus;
        match self.reduction {
            Reduction::Remainder => remainder,
            Reduction::Complement => self.modulus - remainder,
        }
    }

    pub(crate) fn verify(&self, payload: &Payload<'_>) -> Result<bool, VatError> {
        payload.require(self.check_at + 1)?;
        let total = self.total(payload)?;
        let expected = self.overflow.apply(self.raw_check(total));
        Ok(expected == payload.digit(self.check_at)?)
    }
}

/// Plain `sum(digit[start + i] * weights[i])`.
pub(crate) fn weighted_sum(
    payload: &Payload<'_>,
    weights: &[u32],
    start: usize,
) -> Result<u32, VatError> {
    weights
        .iter()
        .enumerate()
        .try_fold(0, |total, (i, &weight)| {
            Ok::<u32, VatError>(total + payload.digit(start + i)? * weight)
        })
}

/// Sum of the decimal digits of a product (`14` → `5`).
pub(crate) fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// ASCII letter `base + offset`; `b'@'` as base maps 1 → `A`.
pub(crate) fn letter(base: u8, offset: u32) -> u8 {
    u8::try_from(offset)
        .ok()
        .and_then(|offset| base.checked_add(offset))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jurisdiction::Jurisdiction;

    const LUHN_LIKE: WeightedCheck = WeightedCheck {
        weights: &[2, 1, 2, 1],
        start: 0,
        check_at: 4,
        modulus: 10,
        reduction: Reduction::Complement,
        fold_products: true,
        adjust: 0,
        overflow: Overflow::Zero,
    };

    #[test]
    fn overflow_mapping() {
        assert_eq!(Overflow::Zero.apply(7), 7);
        assert_eq!(Overflow::Zero.apply(10), 0);
        assert_eq!(Overflow::Zero.apply(11), 0);
        assert_eq!(Overflow::LessTen.apply(10), 0);
        assert_eq!(Overflow::LessTen.apply(11), 1);
    }

    #[test]
    fn folds_two_digit_products() {
        // 9*2=18 -> 9, 1, 0*2=0, 5 => 15 -> 10 - 5 = 5
        let p = Payload::new(Jurisdiction::Se, "91055");
        assert_eq!(LUHN_LIKE.total(&p).unwrap(), 15);
        assert!(LUHN_LIKE.verify(&p).unwrap());
        assert!(!LUHN_LIKE.verify(&Payload::new(Jurisdiction::Se, "91054")).unwrap());
    }

    #[test]
    fn complement_of_zero_remainder_is_modulus() {
        assert_eq!(LUHN_LIKE.raw_check(20), 10);
    }

    #[test]
    fn verify_reports_short_payload() {
        let p = Payload::new(Jurisdiction::Se, "9105");
        assert!(LUHN_LIKE.verify(&p).is_err());
    }

    #[test]
    fn plain_weighted_sum() {
        let p = Payload::new(Jurisdiction::Dk, "1358");
        assert_eq!(weighted_sum(&p, &[2, 7, 6, 5], 0).unwrap(), 2 + 21 + 30 + 40);
        assert_eq!(weighted_sum(&p, &[1, 1], 2).unwrap(), 13);
    }

    #[test]
    fn letters() {
        assert_eq!(letter(b'A', 15), b'P');
        assert_eq!(letter(b'@', 1), b'A');
        assert_eq!(letter(b'@', 10), b'J');
    }

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(9), 9);
        assert_eq!(digit_sum(18), 9);
        assert_eq!(digit_sum(14), 5);
    }
}
