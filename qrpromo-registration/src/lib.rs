//! Customer registration for QR Promo.
//!
//! This crate handles:
//! - Client-side validation of the registration form (name, CPF, phone,
//!   birth date, minimum age)
//! - Building the `POST /clientes/` payload
//! - Classifying the backend reply (new registration, already registered,
//!   campaign full, rejected)
//! - Splitting the promotion title into headline and price
//!
//! Nothing here performs I/O. Callers send the payload and feed the
//! response status and body back into [`RegistrationOutcome::from_response`].

mod error;
mod form;
mod outcome;
mod promo;

pub use error::{RegistrationError, RegistrationResult};
pub use form::{
    meets_minimum_age, parse_birth_date, RegistrationForm, RegistrationRules, MIN_AGE_YEARS,
};
pub use outcome::{RegistrationOutcome, LIMIT_REACHED_DETAIL};
pub use promo::PromoTitle;

/// Path for submitting a registration.
pub const REGISTER_PATH: &str = "/clientes/";

/// Path of the public promotion info.
pub const PROMOTION_INFO_PATH: &str = "/promocao-info/";
