//! Formatting of stored values for the admin customer table.
//!
//! The backend stores CPF and phone as bare digit strings. Values that lost
//! leading zeros (e.g. after a numeric round trip) are left-padded back to
//! eleven digits before the mask is applied.

use crate::mask::{apply_mask, strip_non_digits, MaskKind};

/// Number of digits stored for both CPF and mobile phone values.
pub const DISPLAY_DIGITS: usize = 11;

/// Formats a stored CPF as `ddd.ddd.ddd-dd`.
#[must_use]
pub fn format_cpf(stored: &str) -> String {
    apply_mask(MaskKind::Cpf, &padded_digits(stored))
}

/// Formats a stored mobile phone as `(dd) ddddd-dddd`.
#[must_use]
pub fn format_phone(stored: &str) -> String {
    apply_mask(MaskKind::Phone, &padded_digits(stored))
}

fn padded_digits(stored: &str) -> String {
    format!("{:0>width$}", strip_non_digits(stored), width = DISPLAY_DIGITS)
}
