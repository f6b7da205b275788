//! National check-digit algorithms.
//!
//! Each function takes the payload that follows the country prefix (as
//! produced by the format rules) and reports whether its check digits are
//! consistent. A payload too short for a position the algorithm reads is a
//! [`VatError::MalformedPayload`], never a panic.

use crate::error::VatError;
use crate::jurisdiction::Jurisdiction;

use super::payload::Payload;
use super::tables::*;
use super::weighted::{letter, weighted_sum};

/// Austria: `U` already stripped, 8 digits, Luhn-style fold with a +4 offset.
pub fn at(digits: &str) -> Result<bool, VatError> {
    AT.verify(&Payload::new(Jurisdiction::At, digits))
}

/// Belgium: 97 minus the first eight digits mod 97 gives the last two.
///
/// A 10-digit payload must start with `0`; a 9-digit one is zero-padded.
pub fn be(digits: &str) -> Result<bool, VatError> {
    let padded;
    let digits = if digits.len() == 9 {
        padded = format!("0{digits}");
        padded.as_str()
    } else {
        digits
    };

    let payload = Payload::new(Jurisdiction::Be, digits);
    payload.require(10)?;
    if payload.byte(0)? != b'0' {
        return Ok(false);
    }
    let body = payload.number(0..8)?;
    let check = payload.number(8..payload.len())?;
    Ok(BE_MODULUS - body % BE_MODULUS == check)
}

/// Cyprus: even positions go through a substitution table, the total mod 26
/// selects the trailing letter.
pub fn cy(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::Cy, digits);
    payload.require(9)?;

    let mut total = 0;
    for position in 0..8 {
        let digit = payload.digit(position)?;
        total += if position % 2 == 0 {
            CY_EVEN_SUBSTITUTION[digit as usize]
        } else {
            digit
        };
    }
    Ok(payload.byte(8)? == letter(b'A', total % CY_MODULUS))
}

/// Czech Republic: only 8-digit legal-entity numbers are checked; the
/// longer individual forms are rejected.
pub fn cz(digits: &str) -> Result<bool, VatError> {
    if digits.len() != 8 {
        return Ok(false);
    }
    CZ.verify(&Payload::new(Jurisdiction::Cz, digits))
}

/// Germany: ISO 7064 MOD 11,10 hybrid, computed as a running product.
pub fn de(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::De, digits);
    payload.require(9)?;

    let mut product = DE_SEED;
    for position in 0..8 {
        let mut sum = (payload.digit(position)? + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (2 * sum) % 11;
    }

    let mut check = 11 - product;
    if check == 10 {
        check = 0;
    }
    Ok(check == payload.digit(8)?)
}

/// Denmark: the weighted total including the last digit is divisible by 11.
pub fn dk(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::Dk, digits);
    payload.require(DK_WEIGHTS.len())?;
    Ok(weighted_sum(&payload, &DK_WEIGHTS, 0)? % DK_MODULUS == 0)
}

pub fn ee(digits: &str) -> Result<bool, VatError> {
    EE.verify(&Payload::new(Jurisdiction::Ee, digits))
}

/// Greece (`EL` prefix). Eight-digit numbers are left-padded with `0`.
pub fn el(digits: &str) -> Result<bool, VatError> {
    let padded;
    let digits = if digits.len() == 8 {
        padded = format!("0{digits}");
        padded.as_str()
    } else {
        digits
    };
    EL.verify(&Payload::new(Jurisdiction::El, digits))
}

/// Spain.
///
/// Companies (`A`–`H` + 8 digits) carry a numeric check digit; non-profit
/// and public bodies (`N`, `P`, `Q`, `S` + 7 digits + letter) carry the same
/// value as a letter. Every other shape, individuals included, is rejected.
pub fn es(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::Es, digits);

    match payload.bytes() {
        [b'A'..=b'H', rest @ ..] if rest.len() == 8 && rest.iter().all(u8::is_ascii_digit) => {
            ES_ENTITY.verify(&payload)
        }
        [b'N' | b'P' | b'Q' | b'S', body @ .., last]
            if body.len() == 7
                && body.iter().all(u8::is_ascii_digit)
                && last.is_ascii_uppercase() =>
        {
            let total = ES_ENTITY.total(&payload)?;
            Ok(*last == letter(b'@', ES_ENTITY.raw_check(total)))
        }
        _ => Ok(false),
    }
}

pub fn fi(digits: &str) -> Result<bool, VatError> {
    FI.verify(&Payload::new(Jurisdiction::Fi, digits))
}

/// France: the two-digit key is `(SIREN * 100 + 12) mod 97`.
///
/// Keys containing letters belong to the alphanumeric scheme, which has no
/// public algorithm; they cannot be verified and are rejected.
pub fn fr(digits: &str) -> Result<bool, VatError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(false);
    }

    let payload = Payload::new(Jurisdiction::Fr, digits);
    payload.require(11)?;
    let key = payload.number(0..2)?;
    let siren = payload.number(2..payload.len())?;
    Ok(siren.saturating_mul(FR_SHIFT).saturating_add(FR_ADJUST) % FR_MODULUS == key)
}

/// United Kingdom.
///
/// `GDnnn` (government) and `HAnnn` (health authority) are validated by
/// range. Standard 9-digit and commercial 10-digit (`…3`) numbers use a
/// mod-97 check, tried first in its legacy form and then shifted by 55 for
/// numbers issued since 2010. Isle of Man 12-digit numbers are not checked
/// and are rejected.
pub fn gb(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::Gb, digits);

    match payload.bytes() {
        [b'G', b'D', ..] => Ok(payload.number(2..5)? < GB_GOVERNMENT_LIMIT),
        [b'H', b'A', ..] => Ok(payload.number(2..5)? > GB_HEALTH_FLOOR),
        _ if matches!(payload.len(), 9 | 10) => {
            if payload.len() == 10 && payload.byte(9)? != b'3' {
                return Ok(false);
            }

            let total = weighted_sum(&payload, &GB_WEIGHTS, 0)?;
            let check = payload.number(7..9)?;

            let legacy = (GB_MODULUS - total % GB_MODULUS) % GB_MODULUS;
            if u64::from(legacy) == check {
                return Ok(true);
            }

            let current = if legacy >= GB_SHIFT_DOWN {
                legacy - GB_SHIFT_DOWN
            } else {
                legacy + GB_SHIFT_UP
            };
            Ok(u64::from(current) == check)
        }
        _ => Ok(false),
    }
}

pub fn hu(digits: &str) -> Result<bool, VatError> {
    HU.verify(&Payload::new(Jurisdiction::Hu, digits))
}

/// Ireland: mod-23 check letter (`W` for a zero remainder).
///
/// Legacy numbers with a letter, `*` or `+` in second position are first
/// rewritten to the current layout: `0`, digits 3–7, digit 1, check letter.
pub fn ie(digits: &str) -> Result<bool, VatError> {
    let written = Payload::new(Jurisdiction::Ie, digits);
    let reordered;
    let digits = match written.bytes() {
        [first, second, ..]
            if first.is_ascii_digit() && matches!(*second, b'A'..=b'Z' | b'*' | b'+') =>
        {
            written.require(8)?;
            let bytes = written.bytes();
            let mut current = Vec::with_capacity(8);
            current.push(b'0');
            current.extend_from_slice(&bytes[2..7]);
            current.push(bytes[0]);
            current.push(bytes[7]);
            reordered = String::from_utf8_lossy(&current).into_owned();
            reordered.as_str()
        }
        _ => digits,
    };

    let payload = Payload::new(Jurisdiction::Ie, digits);
    payload.require(8)?;
    let remainder = weighted_sum(&payload, &IE_WEIGHTS, 0)? % IE_MODULUS;
    let expected = if remainder == 0 {
        b'W'
    } else {
        letter(b'@', remainder)
    };
    Ok(payload.byte(7)? == expected)
}

/// Italy: issuing office (digits 8–10) must be 001–201, then a Luhn check
/// over the first ten digits.
pub fn it(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::It, digits);
    payload.require(11)?;
    if !IT_OFFICES.contains(&payload.number(7..10)?) {
        return Ok(false);
    }
    IT.verify(&payload)
}

/// Lithuania: legal entities (9 digits) only.
///
/// A remainder of 10 triggers a second pass with shifted weights.
pub fn lt(digits: &str) -> Result<bool, VatError> {
    if digits.len() != 9 {
        return Ok(false);
    }
    let payload = Payload::new(Jurisdiction::Lt, digits);

    let mut total = weighted_sum(&payload, &LT_WEIGHTS, 0)?;
    if total % LT_MODULUS == 10 {
        total = weighted_sum(&payload, &LT_RETRY_WEIGHTS, 0)?;
    }

    let mut check = total % LT_MODULUS;
    if check == 10 {
        check = 0;
    }
    Ok(check == payload.digit(8)?)
}

pub fn lu(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::Lu, digits);
    payload.require(8)?;
    Ok(payload.number(0..6)? % LU_MODULUS == payload.number(6..8)?)
}

/// Latvia: legal entities only; numbers starting 0–3 are personal codes and
/// are rejected.
pub fn lv(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::Lv, digits);
    payload.require(11)?;
    let first = payload.byte(0)?;
    if matches!(first, b'0'..=b'3') {
        return Ok(false);
    }

    let mut total = weighted_sum(&payload, &LV_WEIGHTS, 0)?;
    if total % LV_MODULUS == 4 && first == b'9' {
        total = total.saturating_sub(LV_ADJUST);
    }

    let check = match total % LV_MODULUS {
        4 => 0,
        remainder if remainder > 4 => 14 - remainder,
        remainder => 3 - remainder,
    };
    Ok(check == payload.digit(10)?)
}

/// Malta: two-digit check, 37 minus the weighted total mod 37.
pub fn mt(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::Mt, digits);
    payload.require(8)?;
    let total = weighted_sum(&payload, &MT_WEIGHTS, 0)?;
    let check = MT_MODULUS - total % MT_MODULUS;
    Ok(u64::from(check) == payload.number(6..8)?)
}

/// Netherlands: the `Bnn` branch suffix is carried in the payload but not
/// checked.
pub fn nl(digits: &str) -> Result<bool, VatError> {
    NL.verify(&Payload::new(Jurisdiction::Nl, digits))
}

pub fn pl(digits: &str) -> Result<bool, VatError> {
    PL.verify(&Payload::new(Jurisdiction::Pl, digits))
}

pub fn pt(digits: &str) -> Result<bool, VatError> {
    PT.verify(&Payload::new(Jurisdiction::Pt, digits))
}

/// Romania: 2 to 10 digits; the weight table is aligned to the right of the
/// digits preceding the check digit.
pub fn ro(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::Ro, digits);
    payload.require(2)?;
    let len = payload.len();
    if len > RO_WEIGHTS.len() + 1 {
        return Ok(false);
    }

    let weights = &RO_WEIGHTS[RO_WEIGHTS.len() + 1 - len..];
    let total = weighted_sum(&payload, weights, 0)?;
    let mut check = total * 10 % RO_MODULUS;
    if check == 10 {
        check = 0;
    }
    Ok(check == payload.digit(len - 1)?)
}

pub fn se(digits: &str) -> Result<bool, VatError> {
    SE.verify(&Payload::new(Jurisdiction::Se, digits))
}

pub fn si(digits: &str) -> Result<bool, VatError> {
    SI.verify(&Payload::new(Jurisdiction::Si, digits))
}

/// Slovakia: the 10-digit number is divisible by 11. Nine-digit payloads
/// are accepted by the format rule but cannot be checked.
pub fn sk(digits: &str) -> Result<bool, VatError> {
    let payload = Payload::new(Jurisdiction::Sk, digits);
    payload.require(10)?;
    if payload.len() != 10 {
        return Ok(false);
    }
    Ok(payload.number(0..10)? % SK_MODULUS == 0)
}
