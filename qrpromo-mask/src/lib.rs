//! Input masks for the QR Promo registration and admin screens.
//!
//! A mask turns whatever text a field currently holds into its display
//! form. Every mask first reduces the text to its ASCII digits, then inserts
//! literal separators at fixed digit-count boundaries:
//! - CPF: `ddd.ddd.ddd-dd`
//! - Mobile phone with area code: `(dd) ddddd-dddd`
//! - Birth date: `dd/mm/yyyy`
//!
//! Masks are pure `&str -> String` functions. Binding them to keystroke
//! events is up to the caller.

mod display;
mod mask;

pub use display::{format_cpf, format_phone, DISPLAY_DIGITS};
pub use mask::{apply_mask, strip_non_digits, MaskKind};
