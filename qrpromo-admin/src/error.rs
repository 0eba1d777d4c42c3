//! Error types for admin operations.

use thiserror::Error;

/// Admin form and listing errors.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The promotion title is blank.
    #[error("promotion title is required")]
    MissingTitle,

    /// The customer limit is not a whole number of at least 1.
    #[error("invalid customer limit: {0:?}")]
    InvalidCustomerLimit(String),

    /// The deadline is not a `YYYY-MM-DDTHH:MM` value.
    #[error("invalid deadline: {0:?}")]
    InvalidDeadline(String),

    /// The deadline is earlier than now.
    #[error("deadline is in the past")]
    DeadlineInPast,

    /// Page size must be at least 1.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// A backend response could not be decoded.
    #[error("invalid admin response: {0}")]
    Decode(#[from] qrpromo_types::Error),
}

impl AdminError {
    /// Message shown in the admin panel.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingTitle => "Informe o título da promoção.",
            Self::InvalidCustomerLimit(_) => "O limite de clientes deve ser um número positivo.",
            Self::InvalidDeadline(_) => "Data limite da promoção inválida.",
            Self::DeadlineInPast => "A data limite da promoção não pode ser uma data passada.",
            Self::InvalidPageSize => "Tamanho de página inválido.",
            Self::Decode(_) => "Erro ao carregar dados do servidor.",
        }
    }
}

/// Result type for admin operations.
pub type AdminResult<T> = Result<T, AdminError>;
