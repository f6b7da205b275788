//! Per-jurisdiction checksum constants.
//!
//! Weights, moduli and offsets live here as data so they can be audited
//! against the national publications without reading algorithm code.

use std::ops::RangeInclusive;

use super::weighted::{Overflow, Reduction, WeightedCheck};

// ---------------------------------------------------------------------------
// Weighted single-digit checks
// ---------------------------------------------------------------------------

pub const AT: WeightedCheck = WeightedCheck {
    weights: &[1, 2, 1, 2, 1, 2, 1],
    start: 0,
    check_at: 7,
    modulus: 10,
    reduction: Reduction::Complement,
    fold_products: true,
    adjust: 4,
    overflow: Overflow::Zero,
};

pub const CZ: WeightedCheck = WeightedCheck {
    weights: &[8, 7, 6, 5, 4, 3, 2],
    start: 0,
    check_at: 7,
    modulus: 11,
    reduction: Reduction::Complement,
    fold_products: false,
    adjust: 0,
    overflow: Overflow::LessTen,
};

pub const EE: WeightedCheck = WeightedCheck {
    weights: &[3, 7, 1, 3, 7, 1, 3, 7],
    start: 0,
    check_at: 8,
    modulus: 10,
    reduction: Reduction::Complement,
    fold_products: false,
    adjust: 0,
    overflow: Overflow::Zero,
};

pub const EL: WeightedCheck = WeightedCheck {
    weights: &[256, 128, 64, 32, 16, 8, 4, 2],
    start: 0,
    check_at: 8,
    modulus: 11,
    reduction: Reduction::Remainder,
    fold_products: false,
    adjust: 0,
    overflow: Overflow::Zero,
};

/// Spanish legal entities; the leading letter is skipped.
pub const ES_ENTITY: WeightedCheck = WeightedCheck {
    weights: &[2, 1, 2, 1, 2, 1, 2],
    start: 1,
    check_at: 8,
    modulus: 10,
    reduction: Reduction::Complement,
    fold_products: true,
    adjust: 0,
    overflow: Overflow::Zero,
};

pub const FI: WeightedCheck = WeightedCheck {
    weights: &[7, 9, 10, 5, 8, 4, 2],
    start: 0,
    check_at: 7,
    modulus: 11,
    reduction: Reduction::Complement,
    fold_products: false,
    adjust: 0,
    overflow: Overflow::Zero,
};

pub const HU: WeightedCheck = WeightedCheck {
    weights: &[9, 7, 3, 1, 9, 7, 3],
    start: 0,
    check_at: 7,
    modulus: 10,
    reduction: Reduction::Complement,
    fold_products: false,
    adjust: 0,
    overflow: Overflow::Zero,
};

pub const IT: WeightedCheck = WeightedCheck {
    weights: &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2],
    start: 0,
    check_at: 10,
    modulus: 10,
    reduction: Reduction::Complement,
    fold_products: true,
    adjust: 0,
    overflow: Overflow::Zero,
};

pub const NL: WeightedCheck = WeightedCheck {
    weights: &[9, 8, 7, 6, 5, 4, 3, 2],
    start: 0,
    check_at: 8,
    modulus: 11,
    reduction: Reduction::Remainder,
    fold_products: false,
    adjust: 0,
    overflow: Overflow::Zero,
};

pub const PL: WeightedCheck = WeightedCheck {
    weights: &[6, 5, 7, 2, 3, 4, 5, 6, 7],
    start: 0,
    check_at: 9,
    modulus: 11,
    reduction: Reduction::Remainder,
    fold_products: false,
    adjust: 0,
    overflow: Overflow::Zero,
};

pub const PT: WeightedCheck = WeightedCheck {
    weights: &[9, 8, 7, 6, 5, 4, 3, 2],
    start: 0,
    check_at: 8,
    modulus: 11,
    reduction: Reduction::Complement,
    fold_products: false,
    adjust: 0,
    overflow: Overflow::Zero,
};

pub const SE: WeightedCheck = WeightedCheck {
    weights: &[2, 1, 2, 1, 2, 1, 2, 1, 2],
    start: 0,
    check_at: 9,
    modulus: 10,
    reduction: Reduction::Complement,
    fold_products: true,
    adjust: 0,
    overflow: Overflow::Zero,
};

pub const SI: WeightedCheck = WeightedCheck {
    weights: &[8, 7, 6, 5, 4, 3, 2],
    start: 0,
    check_at: 7,
    modulus: 11,
    reduction: Reduction::Complement,
    fold_products: false,
    adjust: 0,
    overflow: Overflow::Zero,
};

// ---------------------------------------------------------------------------
// Everything else
// ---------------------------------------------------------------------------

pub const BE_MODULUS: u64 = 97;

/// Substitution for digits at even positions, indexed by the digit.
pub const CY_EVEN_SUBSTITUTION: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];
pub const CY_MODULUS: u32 = 26;

pub const DE_SEED: u32 = 10;

pub const DK_WEIGHTS: [u32; 8] = [2, 7, 6, 5, 4, 3, 2, 1];
pub const DK_MODULUS: u32 = 11;

pub const FR_MODULUS: u64 = 97;
pub const FR_SHIFT: u64 = 100;
pub const FR_ADJUST: u64 = 12;

pub const GB_WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];
pub const GB_MODULUS: u32 = 97;
/// Post-2010 numbers shift the legacy check by −55 (or +42 below 55).
pub const GB_SHIFT_DOWN: u32 = 55;
pub const GB_SHIFT_UP: u32 = 42;
/// Government departments: `GD000`–`GD499`.
pub const GB_GOVERNMENT_LIMIT: u64 = 500;
/// Health authorities: `HA500`–`HA999`.
pub const GB_HEALTH_FLOOR: u64 = 499;

pub const IE_WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];
pub const IE_MODULUS: u32 = 23;

/// Valid issuing offices, encoded in digits 8–10.
pub const IT_OFFICES: RangeInclusive<u64> = 1..=201;

pub const LT_WEIGHTS: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
pub const LT_RETRY_WEIGHTS: [u32; 8] = [3, 4, 5, 6, 7, 8, 9, 1];
pub const LT_MODULUS: u32 = 11;

pub const LU_MODULUS: u64 = 89;

pub const LV_WEIGHTS: [u32; 10] = [9, 1, 4, 8, 3, 10, 2, 5, 7, 6];
pub const LV_MODULUS: u32 = 11;
pub const LV_ADJUST: u32 = 45;

pub const MT_WEIGHTS: [u32; 6] = [3, 4, 6, 7, 8, 9];
pub const MT_MODULUS: u32 = 37;

/// Right-aligned against the digits preceding the check digit.
pub const RO_WEIGHTS: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];
pub const RO_MODULUS: u32 = 11;

pub const SK_MODULUS: u64 = 11;
