//! CPF (Cadastro de Pessoa Física) validation.
//!
//! A CPF is eleven digits: a nine-digit base followed by two check digits.
//! Each check digit is a weighted sum of the digits before it, reduced
//! mod 11. The ten repeated-digit sequences (`00000000000` through
//! `99999999999`) pass the checksum but are placeholders, so they are
//! always rejected.
//!
//! [`is_valid_cpf`] answers yes/no for a bare digit string. [`Cpf`] is the
//! validated value type and reports *why* an input was rejected.

mod error;
mod validate;

pub use error::{CpfError, CpfResult};
pub use validate::{check_digits, is_valid_cpf, Cpf, CPF_DIGITS};
