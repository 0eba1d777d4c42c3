//! Error types for registration.

use qrpromo_cpf::CpfError;
use thiserror::Error;

/// Reasons a registration is refused, locally or by the backend.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The name field is blank.
    #[error("name is required")]
    MissingName,

    /// The birth date is malformed or not a real calendar date.
    #[error("invalid birth date: {0}")]
    InvalidBirthDate(String),

    /// The customer is younger than the campaign allows.
    #[error("customer must be at least {min_years} years old")]
    Underage { min_years: u32 },

    /// The CPF failed length or check-digit validation.
    #[error("invalid CPF: {0}")]
    Cpf(#[from] CpfError),

    /// The backend refused the registration.
    #[error("registration rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// The backend reply could not be decoded.
    #[error("invalid registration response: {0}")]
    Decode(#[from] qrpromo_types::Error),
}

impl RegistrationError {
    /// Message shown to the end user on the registration page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingName => "Informe seu nome.".to_string(),
            Self::InvalidBirthDate(_) => "Data de nascimento inválida.".to_string(),
            Self::Underage { min_years } => {
                format!("Você precisa ter no mínimo {min_years} anos para se cadastrar.")
            }
            Self::Cpf(CpfError::InvalidLength(_)) => {
                "CPF deve conter 11 dígitos numéricos.".to_string()
            }
            Self::Cpf(_) => "CPF inválido.".to_string(),
            Self::Rejected { detail, .. } => detail.clone(),
            Self::Decode(_) => "Ocorreu um erro ao cadastrar.".to_string(),
        }
    }
}

/// Result type for registration operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;
