//! Check-digit computation and the validated [`Cpf`] type.

use crate::error::{CpfError, CpfResult};
use qrpromo_mask::{apply_mask, strip_non_digits, MaskKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a CPF.
pub const CPF_DIGITS: usize = 11;

/// Returns true if `digits` is an eleven-digit string with valid check digits.
///
/// Anything that is not exactly eleven ASCII digits is invalid. Masked
/// input must be stripped first (or use [`Cpf::parse`]).
#[must_use]
pub fn is_valid_cpf(digits: &str) -> bool {
    validate_digits(digits).is_ok()
}

/// Computes both check digits for a nine-digit base.
///
/// Each element of `base` must be a digit value in `0..=9`.
#[must_use]
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, check_digit(&extended)]
}

/// Weighted sum with weights `len+1` down to 2, times 10, mod 11.
/// A remainder of 10 counts as 0.
fn check_digit(prefix: &[u8]) -> u8 {
    let top_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top_weight - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

fn validate_digits(digits: &str) -> CpfResult<[u8; CPF_DIGITS]> {
    let count = digits.chars().count();
    if count != CPF_DIGITS {
        return Err(CpfError::InvalidLength(count));
    }

    let mut values = [0u8; CPF_DIGITS];
    for (slot, c) in values.iter_mut().zip(digits.chars()) {
        *slot = c.to_digit(10).ok_or(CpfError::InvalidCharacter(c))? as u8;
    }

    if values.iter().all(|&d| d == values[0]) {
        return Err(CpfError::RepeatedDigits);
    }

    for position in [9, 10] {
        if check_digit(&values[..position]) != values[position] {
            return Err(CpfError::CheckDigitMismatch { position });
        }
    }

    Ok(values)
}

/// A CPF whose length and check digits have been verified.
///
/// Serializes as the bare eleven-digit string the backend stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parses a CPF from raw or masked text.
    ///
    /// Everything but ASCII digits is discarded before validation, so
    /// `"111.444.777-35"` and `"11144477735"` parse to the same value.
    ///
    /// # Errors
    ///
    /// Returns the first rule the digits break: length, repeated digits,
    /// then the check digit at position 9 and 10.
    pub fn parse(text: &str) -> CpfResult<Self> {
        let digits = strip_non_digits(text);
        validate_digits(&digits)?;
        Ok(Self(digits))
    }

    /// Builds a CPF from a nine-digit base, appending its check digits.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not nine ASCII digits or is a repeated
    /// digit sequence.
    pub fn from_base(base: &str) -> CpfResult<Self> {
        let count = base.chars().count();
        if count != 9 {
            return Err(CpfError::InvalidLength(count));
        }
        let mut values = [0u8; 9];
        for (slot, c) in values.iter_mut().zip(base.chars()) {
            if !c.is_ascii_digit() {
                return Err(CpfError::InvalidCharacter(c));
            }
            *slot = c as u8 - b'0';
        }
        let [first, second] = check_digits(&values);
        Self::parse(&format!("{base}{first}{second}"))
    }

    /// Returns the eleven bare digits.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Returns the CPF formatted as `ddd.ddd.ddd-dd`.
    #[must_use]
    pub fn formatted(&self) -> String {
        apply_mask(MaskKind::Cpf, &self.0)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_remainder_ten_becomes_zero() {
        // 123456789: sum 210, 2100 % 11 == 10
        assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 0);
    }

    #[test]
    fn check_digit_weights_start_above_length() {
        // single digit weighted by 2
        assert_eq!(check_digit(&[3]), (3 * 2 * 10 % 11) as u8);
    }
}
