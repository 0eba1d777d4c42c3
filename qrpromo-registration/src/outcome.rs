//! Classification of the backend reply to `POST /clientes/`.

use crate::error::{RegistrationError, RegistrationResult};
use qrpromo_types::{decode_json, ApiErrorBody, Customer, QrUsage};
use tracing::{debug, info};

/// Detail the backend sends when the campaign's customer limit is reached.
pub const LIMIT_REACHED_DETAIL: &str = "Limite máximo de clientes atingido para esta promoção.";

const DEFAULT_REJECTION: &str = "Ocorreu um erro ao cadastrar.";

/// What happened to a registration the backend accepted for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A new customer was created (201).
    Registered(Customer),
    /// The CPF or phone was already registered (208).
    AlreadyRegistered(Customer),
    /// The campaign is full (400 with [`LIMIT_REACHED_DETAIL`]).
    LimitReached,
}

impl RegistrationOutcome {
    /// Classifies a backend reply from its status code and body.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Rejected`] for any other status, with
    /// the backend's detail message, and [`RegistrationError::Decode`] if
    /// a 201/208 body is not a customer record.
    pub fn from_response(status: u16, body: &str) -> RegistrationResult<Self> {
        debug!(status, "classifying registration response");
        match status {
            201 => {
                let customer: Customer = decode_json(body)?;
                info!(customer_id = %customer.id, "customer registered");
                Ok(Self::Registered(customer))
            }
            208 => {
                let customer: Customer = decode_json(body)?;
                info!(customer_id = %customer.id, used = customer.used, "customer already registered");
                Ok(Self::AlreadyRegistered(customer))
            }
            _ => {
                let error = ApiErrorBody::parse(body);
                if status == 400 && error.is(LIMIT_REACHED_DETAIL) {
                    info!("registration refused: customer limit reached");
                    return Ok(Self::LimitReached);
                }
                Err(RegistrationError::Rejected {
                    status,
                    detail: error
                        .message()
                        .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
                })
            }
        }
    }

    /// Returns the customer record, if the backend sent one.
    #[must_use]
    pub fn customer(&self) -> Option<&Customer> {
        match self {
            Self::Registered(c) | Self::AlreadyRegistered(c) => Some(c),
            Self::LimitReached => None,
        }
    }

    /// Path of the QR code image to show, if any.
    #[must_use]
    pub fn qrcode_path(&self) -> Option<String> {
        self.customer().map(Customer::qrcode_path)
    }

    /// Status text shown to the end user.
    #[must_use]
    pub fn status_message(&self) -> String {
        match self {
            Self::Registered(_) => "Cadastro realizado com sucesso!".to_string(),
            Self::AlreadyRegistered(customer) => {
                let status = match customer.usage() {
                    QrUsage::StillValid => "Este QR Code ainda é válido.".to_string(),
                    QrUsage::Used { at: Some(at) } => format!(
                        "Este QR Code já foi utilizado em {}.",
                        at.format("%d/%m/%Y, %H:%M:%S")
                    ),
                    QrUsage::Used { at: None } => "Este QR Code já foi utilizado.".to_string(),
                };
                format!("Você já está cadastrado! {status}")
            }
            Self::LimitReached => {
                "Desculpe, o limite máximo de clientes para esta promoção foi atingido."
                    .to_string()
            }
        }
    }
}
