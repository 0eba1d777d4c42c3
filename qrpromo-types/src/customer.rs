//! Customer records.

use crate::CustomerId;
use chrono::{NaiveDate, NaiveDateTime};
use qrpromo_cpf::Cpf;
use serde::{Deserialize, Serialize};

/// Registration payload for `POST /clientes/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Full name as typed.
    #[serde(rename = "nome")]
    pub name: String,
    /// Validated CPF, sent as bare digits.
    pub cpf: Cpf,
    /// Mobile phone, bare digits.
    #[serde(rename = "celular")]
    pub phone: String,
    /// Birth date, sent as `YYYY-MM-DD`.
    #[serde(rename = "data_nascimento")]
    pub birth_date: NaiveDate,
}

/// A registered customer as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Bare digits. Not re-validated: records predating validation exist.
    pub cpf: String,
    #[serde(rename = "celular")]
    pub phone: String,
    #[serde(rename = "data_nascimento")]
    pub birth_date: NaiveDate,
    /// Opaque hash encoded in the customer's QR code.
    pub qrcode_hash: String,
    /// Whether the QR code has been redeemed.
    #[serde(rename = "utilizado")]
    pub used: bool,
    #[serde(rename = "data_criacao", with = "crate::time::naive")]
    pub created_at: NaiveDateTime,
    #[serde(
        rename = "data_utilizacao",
        with = "crate::time::naive_option",
        default
    )]
    pub used_at: Option<NaiveDateTime>,
}

/// Redemption state of a customer's QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrUsage {
    /// Not yet redeemed.
    StillValid,
    /// Redeemed; `at` is absent if the backend did not record a time.
    Used { at: Option<NaiveDateTime> },
}

impl Customer {
    /// Path of the PNG QR code image for this customer.
    #[must_use]
    pub fn qrcode_path(&self) -> String {
        format!("/qrcode/{}", self.qrcode_hash)
    }

    /// Returns whether the QR code has been redeemed.
    #[must_use]
    pub fn usage(&self) -> QrUsage {
        if self.used {
            QrUsage::Used { at: self.used_at }
        } else {
            QrUsage::StillValid
        }
    }
}
