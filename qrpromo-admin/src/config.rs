//! Campaign configuration form.
//!
//! The deadline field is an HTML `datetime-local` value, i.e. wall-clock
//! time without offset. It is interpreted in the campaign's UTC offset and
//! sent to the backend as an absolute instant.

use crate::error::{AdminError, AdminResult};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use qrpromo_types::{CampaignConfig, CampaignConfigUpdate, CampaignId};
use tracing::debug;

/// Base path of the campaign configuration resource.
pub const CONFIG_PATH: &str = "/configuracao/";

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Path for reading or updating one configuration record.
#[must_use]
pub fn config_path(id: CampaignId) -> String {
    format!("{CONFIG_PATH}{id}")
}

/// Formats a stored deadline as a `datetime-local` input value.
#[must_use]
pub fn deadline_input_value(config: &CampaignConfig, offset: FixedOffset) -> Option<String> {
    config
        .deadline
        .map(|deadline| deadline.with_timezone(&offset).format(INPUT_FORMAT).to_string())
}

/// The configuration form as the admin filled it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignConfigForm {
    pub promo_title: String,
    pub customer_limit: String,
    /// `YYYY-MM-DDTHH:MM`, or empty for no deadline.
    pub deadline: String,
}

impl CampaignConfigForm {
    /// Pre-fills the form from the stored configuration.
    #[must_use]
    pub fn from_config(config: &CampaignConfig, offset: FixedOffset) -> Self {
        Self {
            promo_title: config.promo_title.clone(),
            customer_limit: config.customer_limit.to_string(),
            deadline: deadline_input_value(config, offset).unwrap_or_default(),
        }
    }

    /// Validates the form and builds the `PUT` body.
    ///
    /// Checks run in order: title, deadline not in the past, then the
    /// customer limit.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(
        &self,
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> AdminResult<CampaignConfigUpdate> {
        let promo_title = self.promo_title.trim();
        if promo_title.is_empty() {
            return Err(AdminError::MissingTitle);
        }

        let deadline = self.parse_deadline(offset)?;
        if let Some(deadline) = deadline {
            if deadline < now {
                debug!(%deadline, %now, "config refused: deadline in the past");
                return Err(AdminError::DeadlineInPast);
            }
        }

        let customer_limit = self
            .customer_limit
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&limit| limit >= 1)
            .ok_or_else(|| AdminError::InvalidCustomerLimit(self.customer_limit.clone()))?;

        Ok(CampaignConfigUpdate {
            promo_title: promo_title.to_string(),
            customer_limit,
            deadline,
        })
    }

    fn parse_deadline(&self, offset: FixedOffset) -> AdminResult<Option<DateTime<Utc>>> {
        let raw = self.deadline.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let invalid = || AdminError::InvalidDeadline(self.deadline.clone());
        let naive = NaiveDateTime::parse_from_str(raw, INPUT_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, INPUT_FORMAT_SECONDS))
            .map_err(|_| invalid())?;
        let local = offset.from_local_datetime(&naive).single().ok_or_else(invalid)?;
        Ok(Some(local.with_timezone(&Utc)))
    }
}
