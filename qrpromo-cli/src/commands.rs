//! Subcommand bodies. Each returns the text to print.

use crate::config::CliConfig;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use qrpromo_admin::{config_path, AdminError, CampaignConfigForm, PageRequest, CONFIG_PATH};
use qrpromo_registration::{
    PromoTitle, RegistrationError, RegistrationForm, RegistrationOutcome, REGISTER_PATH,
};
use qrpromo_scan::ValidationResult;
use qrpromo_types::CampaignId;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// A request the caller would send to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Value,
}

impl fmt::Display for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = serde_json::to_string_pretty(&self.body).map_err(|_| fmt::Error)?;
        write!(f, "{} {}\n{}", self.method, self.url, body)
    }
}

fn registration_error(e: RegistrationError) -> anyhow::Error {
    let message = e.user_message();
    anyhow::Error::new(e).context(message)
}

fn admin_error(e: AdminError) -> anyhow::Error {
    let message = e.user_message();
    anyhow::Error::new(e).context(message)
}

/// Validates a registration form and builds the `POST` request.
pub fn register(
    config: &CliConfig,
    form: &RegistrationForm,
    today: NaiveDate,
) -> Result<PreparedRequest> {
    let customer = form
        .validate(&config.rules(), today)
        .map_err(registration_error)?;
    debug!(name = %customer.name, "registration form accepted");
    Ok(PreparedRequest {
        method: "POST",
        url: config.url(REGISTER_PATH),
        body: serde_json::to_value(&customer)?,
    })
}

/// Validates a campaign configuration form and builds the `PUT` request.
///
/// Without an id the path keeps an `{id}` placeholder.
pub fn configure(
    config: &CliConfig,
    form: &CampaignConfigForm,
    id: Option<CampaignId>,
    now: DateTime<Utc>,
) -> Result<PreparedRequest> {
    let update = form.validate(now, config.offset()).map_err(admin_error)?;
    let path = match id {
        Some(id) => config_path(id),
        None => format!("{CONFIG_PATH}{{id}}"),
    };
    Ok(PreparedRequest {
        method: "PUT",
        url: config.url(&path),
        body: serde_json::to_value(&update)?,
    })
}

/// Describes one page of the admin customer list.
pub fn page(config: &CliConfig, page: u32, total: u64, search: Option<&str>) -> Result<String> {
    let mut request = PageRequest::new(config.page_size).map_err(admin_error)?;
    if let Some(term) = search {
        request = request.with_search(term);
    }
    let request = request.at_page(page);
    let info = request.info(total);

    let mut lines = vec![
        format!("GET {}", config.url(&request.query_path())),
        format!("{} de {} ({} clientes)", info.label(), info.total_pages, total),
    ];
    if let Some(previous) = request.previous() {
        lines.push(format!("anterior: {}", config.url(&previous.query_path())));
    }
    if let Some(next) = request.next(total) {
        lines.push(format!("próxima: {}", config.url(&next.query_path())));
    }
    Ok(lines.join("\n"))
}

/// Explains a backend reply to `POST /clientes/`.
pub fn registration_reply(config: &CliConfig, status: u16, body: &str) -> Result<String> {
    let outcome = RegistrationOutcome::from_response(status, body).map_err(registration_error)?;
    let mut text = outcome.status_message();
    if let Some(path) = outcome.qrcode_path() {
        text.push('\n');
        text.push_str(&config.url(&path));
    }
    Ok(text)
}

/// Explains a backend reply to `POST /api/validar/{hash}`.
pub fn scan_reply(status: u16, body: &str) -> String {
    let view = ValidationResult::from_response(status, body).view();
    format!("{}\n{}", view.title, view.message)
}

/// Splits a promotion title into headline and price.
pub fn promo(title: &str) -> String {
    let title = PromoTitle::parse(title);
    match &title.price {
        Some(price) => format!("{}\npor {}", title.headline, price),
        None => title.headline.clone(),
    }
}
