//! Outcome of validating a scanned QR code.

use qrpromo_types::{decode_json, ApiErrorBody, Customer};
use serde::{Deserialize, Serialize};

const DEFAULT_REJECTION: &str = "QR Code não pôde ser validado.";

/// Result of `POST /api/validar/{hash}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The code was valid and is now marked as used.
    Valid { customer_name: String },
    /// The backend refused the code (unknown hash, already used, ...).
    Rejected { detail: String },
    /// The backend could not be reached or answered garbage.
    Unreachable,
}

/// Visual tone of the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
}

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub title: String,
    pub message: String,
    pub tone: Tone,
}

impl ValidationResult {
    /// Interprets the backend reply.
    ///
    /// A body that is not JSON counts as [`ValidationResult::Unreachable`],
    /// since no backend answer can be shown.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if (200..300).contains(&status) {
            return match decode_json::<Customer>(body) {
                Ok(customer) => Self::Valid {
                    customer_name: customer.name,
                },
                Err(_) => Self::Unreachable,
            };
        }

        match decode_json::<ApiErrorBody>(body) {
            Ok(error) => Self::Rejected {
                detail: error
                    .message()
                    .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
            },
            Err(_) => Self::Unreachable,
        }
    }

    /// Returns true if the code was accepted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Title, message and tone for the result panel.
    #[must_use]
    pub fn view(&self) -> ResultView {
        match self {
            Self::Valid { customer_name } => ResultView {
                title: "QR Code Válido!".to_string(),
                message: format!("Cliente {customer_name} validado com sucesso!"),
                tone: Tone::Success,
            },
            Self::Rejected { detail } => ResultView {
                title: "Erro na Validação".to_string(),
                message: detail.clone(),
                tone: Tone::Error,
            },
            Self::Unreachable => ResultView {
                title: "Erro".to_string(),
                message: "Não foi possível se comunicar com o servidor.".to_string(),
                tone: Tone::Error,
            },
        }
    }
}
