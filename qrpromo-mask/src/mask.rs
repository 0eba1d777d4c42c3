//! Keystroke masks.
//!
//! A boundary "after digit k" only fires once digit k+1 exists, so a
//! partially typed value never ends in a dangling separator. Each boundary
//! fires at most once: CPF and phone digits past the last group trail
//! unformatted, while the date mask drops everything past the eighth digit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of masked input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    /// Brazilian individual taxpayer ID, `ddd.ddd.ddd-dd`.
    Cpf,
    /// Mobile phone with area code, `(dd) ddddd-dddd`.
    Phone,
    /// Calendar date, `dd/mm/yyyy`.
    Date,
}

/// Separator placement for one mask kind.
struct Layout {
    /// Emitted at the very start once the first boundary fires.
    opener: &'static str,
    /// `(digits before the separator, separator)`, strictly increasing.
    boundaries: &'static [(usize, &'static str)],
    /// Hard cap on the number of digits kept.
    max_digits: Option<usize>,
}

const CPF_LAYOUT: Layout = Layout {
    opener: "",
    boundaries: &[(3, "."), (6, "."), (9, "-")],
    max_digits: None,
};

const PHONE_LAYOUT: Layout = Layout {
    opener: "(",
    boundaries: &[(2, ") "), (7, "-")],
    max_digits: None,
};

const DATE_LAYOUT: Layout = Layout {
    opener: "",
    boundaries: &[(2, "/"), (4, "/")],
    max_digits: Some(8),
};

impl MaskKind {
    /// All mask kinds.
    pub const ALL: [MaskKind; 3] = [MaskKind::Cpf, MaskKind::Phone, MaskKind::Date];

    /// Returns the lowercase name of this mask kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Phone => "phone",
            Self::Date => "date",
        }
    }

    /// Number of digits a fully typed value has.
    #[must_use]
    pub const fn full_digits(&self) -> usize {
        match self {
            Self::Cpf | Self::Phone => 11,
            Self::Date => 8,
        }
    }

    /// Returns the digit cap, if this mask discards overflow.
    #[must_use]
    pub fn max_digits(&self) -> Option<usize> {
        self.layout().max_digits
    }

    const fn layout(&self) -> &'static Layout {
        match self {
            Self::Cpf => &CPF_LAYOUT,
            Self::Phone => &PHONE_LAYOUT,
            Self::Date => &DATE_LAYOUT,
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Removes every character that is not an ASCII digit.
#[must_use]
pub fn strip_non_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Re-formats the current text of a field according to `kind`.
///
/// Any input is accepted, including text that is already masked: the
/// digits are re-derived first, so applying a mask twice is the same as
/// applying it once.
#[must_use]
pub fn apply_mask(kind: MaskKind, current_text: &str) -> String {
    let layout = kind.layout();
    let mut digits = strip_non_digits(current_text);
    if let Some(max) = layout.max_digits {
        // ASCII only, byte index == char index
        digits.truncate(max);
    }

    let mut masked = String::with_capacity(digits.len() + 6);
    let mut next = 0;
    for (index, digit) in digits.chars().enumerate() {
        if let Some(&(after, separator)) = layout.boundaries.get(next) {
            if index == after {
                if next == 0 {
                    masked.insert_str(0, layout.opener);
                }
                masked.push_str(separator);
                next += 1;
            }
        }
        masked.push(digit);
    }
    masked
}
