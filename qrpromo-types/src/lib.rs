//! Wire models shared by the QR Promo client crates.
//!
//! These mirror the JSON the registration backend sends and accepts:
//! - Customer and campaign identifiers (UUID)
//! - Customer records and the registration payload
//! - Campaign configuration and the public promotion info
//! - The `{"detail": ...}` error body
//!
//! JSON field names follow the backend's Portuguese schema; Rust names are
//! English and mapped with serde renames.

mod api;
mod campaign;
mod customer;
mod ids;
mod time;

pub use api::ApiErrorBody;
pub use campaign::{CampaignConfig, CampaignConfigUpdate, PromotionInfo};
pub use customer::{Customer, NewCustomer, QrUsage};
pub use ids::{CampaignId, CustomerId};

use serde::de::DeserializeOwned;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding backend data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}

/// Decodes a JSON response body.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}
