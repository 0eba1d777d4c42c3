//! Registration form validation.
//!
//! Rules run in a fixed order and stop at the first failure: name, birth
//! date, minimum age, CPF length, CPF check digits.

use crate::error::{RegistrationError, RegistrationResult};
use chrono::{Months, NaiveDate};
use qrpromo_cpf::Cpf;
use qrpromo_mask::{apply_mask, strip_non_digits, MaskKind};
use qrpromo_types::NewCustomer;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum age, in years, to join the campaign.
pub const MIN_AGE_YEARS: u32 = 15;

/// Tunable registration rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRules {
    #[serde(default = "default_min_age")]
    pub min_age_years: u32,
}

fn default_min_age() -> u32 {
    MIN_AGE_YEARS
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            min_age_years: MIN_AGE_YEARS,
        }
    }
}

/// Parses a `dd/mm/yyyy` birth date.
///
/// Separators are ignored; exactly eight digits must remain and they must
/// form a real calendar date.
///
/// # Errors
///
/// Returns [`RegistrationError::InvalidBirthDate`] otherwise.
pub fn parse_birth_date(text: &str) -> RegistrationResult<NaiveDate> {
    let digits = strip_non_digits(text);
    let invalid = || RegistrationError::InvalidBirthDate(text.to_string());
    if digits.len() != 8 {
        return Err(invalid());
    }
    let day: u32 = digits[0..2].parse().map_err(|_| invalid())?;
    let month: u32 = digits[2..4].parse().map_err(|_| invalid())?;
    let year: i32 = digits[4..8].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Returns true if someone born on `birth` is at least `min_years` old on `today`.
///
/// The cutoff is the same month and day `min_years` earlier; a Feb 29
/// cutoff in a non-leap year falls back to Feb 28.
#[must_use]
pub fn meets_minimum_age(birth: NaiveDate, today: NaiveDate, min_years: u32) -> bool {
    match today.checked_sub_months(Months::new(min_years.saturating_mul(12))) {
        Some(cutoff) => birth <= cutoff,
        None => false,
    }
}

/// The registration form as the user filled it in.
///
/// Field values may be raw or masked; validation strips separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub birth_date: String,
}

impl RegistrationForm {
    /// Returns the form with CPF, phone and birth date in display format.
    #[must_use]
    pub fn masked(&self) -> Self {
        Self {
            name: self.name.clone(),
            cpf: apply_mask(MaskKind::Cpf, &self.cpf),
            phone: apply_mask(MaskKind::Phone, &self.phone),
            birth_date: apply_mask(MaskKind::Date, &self.birth_date),
        }
    }

    /// Validates the form and builds the backend payload.
    ///
    /// # Errors
    ///
    /// Returns the first rule that fails.
    pub fn validate(
        &self,
        rules: &RegistrationRules,
        today: NaiveDate,
    ) -> RegistrationResult<NewCustomer> {
        let name = self.name.trim();
        if name.is_empty() {
            debug!("registration refused: blank name");
            return Err(RegistrationError::MissingName);
        }

        let birth_date = parse_birth_date(&self.birth_date).inspect_err(|_| {
            debug!(birth_date = %self.birth_date, "registration refused: bad birth date");
        })?;

        if !meets_minimum_age(birth_date, today, rules.min_age_years) {
            debug!(%birth_date, %today, "registration refused: underage");
            return Err(RegistrationError::Underage {
                min_years: rules.min_age_years,
            });
        }

        let cpf = Cpf::parse(&self.cpf).inspect_err(|e| {
            debug!(error = %e, "registration refused: CPF");
        })?;

        Ok(NewCustomer {
            name: name.to_string(),
            cpf,
            phone: strip_non_digits(&self.phone),
            birth_date,
        })
    }
}
