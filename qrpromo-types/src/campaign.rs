//! Campaign configuration.

use crate::CampaignId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single campaign configuration record (`GET /configuracao/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub id: CampaignId,
    /// Title shown on the registration page, e.g. `"Promoção Pizza por R$ 0,25"`.
    #[serde(rename = "titulo_promocao")]
    pub promo_title: String,
    /// Maximum number of customers the campaign accepts.
    #[serde(rename = "limite_clientes")]
    pub customer_limit: u32,
    /// Registration deadline, if any.
    #[serde(
        rename = "data_limite_promocao",
        with = "crate::time::utc_option",
        default
    )]
    pub deadline: Option<DateTime<Utc>>,
}

/// Body of `PUT /configuracao/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignConfigUpdate {
    #[serde(rename = "titulo_promocao")]
    pub promo_title: String,
    #[serde(rename = "limite_clientes")]
    pub customer_limit: u32,
    /// Sent as `null` to clear the deadline.
    #[serde(
        rename = "data_limite_promocao",
        with = "crate::time::utc_option",
        default
    )]
    pub deadline: Option<DateTime<Utc>>,
}

/// Public campaign info (`GET /promocao-info/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionInfo {
    #[serde(rename = "titulo_promocao")]
    pub promo_title: String,
}
