//! Error types for CPF validation.

use thiserror::Error;

/// Reasons a CPF is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpfError {
    /// The value does not have exactly eleven digits.
    #[error("CPF must have 11 digits, got {0}")]
    InvalidLength(usize),

    /// A bare digit string contained something other than 0-9.
    #[error("CPF contains non-digit character {0:?}")]
    InvalidCharacter(char),

    /// All eleven digits are the same.
    #[error("CPF with all digits equal is not valid")]
    RepeatedDigits,

    /// A check digit does not match the weighted sum.
    #[error("CPF check digit at position {position} does not match")]
    CheckDigitMismatch {
        /// Zero-based index of the failing check digit (9 or 10).
        position: usize,
    },
}

/// Result type for CPF operations.
pub type CpfResult<T> = Result<T, CpfError>;
