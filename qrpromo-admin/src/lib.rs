//! Admin-side rules for QR Promo.
//!
//! - Campaign configuration form validation and the `PUT` body
//! - Customer list paging (`skip`/`limit`/`search` query, page bounds)
//! - Table rows and detail lines for a customer record

mod config;
mod error;
mod listing;

pub use config::{config_path, deadline_input_value, CampaignConfigForm, CONFIG_PATH};
pub use error::{AdminError, AdminResult};
pub use listing::{
    decode_customers, decode_total, CustomerRow, PageInfo, PageRequest, CUSTOMERS_PATH,
    DEFAULT_PAGE_SIZE, RESET_USAGE_PATH, TOTAL_PATH,
};
