//! Customer list paging and table rows.

use crate::error::{AdminError, AdminResult};
use qrpromo_mask::{format_cpf, format_phone};
use qrpromo_types::{decode_json, Customer};

/// Customers shown per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Paged customer list.
pub const CUSTOMERS_PATH: &str = "/admin/clientes/";

/// Total registered customers.
pub const TOTAL_PATH: &str = "/admin/clientes/total/";

/// Resets the "used" flag of every customer.
pub const RESET_USAGE_PATH: &str = "/admin/resetar-utilizacao/";

/// Decodes a page of customers.
pub fn decode_customers(body: &str) -> AdminResult<Vec<Customer>> {
    Ok(decode_json(body)?)
}

/// Decodes the total customer count.
pub fn decode_total(body: &str) -> AdminResult<u64> {
    Ok(decode_json(body)?)
}

/// A request for one page of the customer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
    search: String,
}

impl PageRequest {
    /// First page, no search.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidPageSize`] if `page_size` is zero.
    pub fn new(page_size: u32) -> AdminResult<Self> {
        if page_size == 0 {
            return Err(AdminError::InvalidPageSize);
        }
        Ok(Self {
            page: 1,
            page_size,
            search: String::new(),
        })
    }

    /// Returns a request for `page` (1-based; 0 is treated as 1).
    #[must_use]
    pub fn at_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Applies a new search term and goes back to the first page.
    #[must_use]
    pub fn with_search(mut self, term: &str) -> Self {
        self.search = term.trim().to_string();
        self.page = 1;
        self
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Number of records before this page.
    #[must_use]
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Path and query for fetching this page.
    #[must_use]
    pub fn query_path(&self) -> String {
        let mut path = format!(
            "{CUSTOMERS_PATH}?skip={}&limit={}",
            self.skip(),
            self.page_size
        );
        if !self.search.is_empty() {
            path.push_str("&search=");
            path.push_str(&urlencoding::encode(&self.search));
        }
        path
    }

    /// Page info for this request given the total record count.
    #[must_use]
    pub fn info(&self, total: u64) -> PageInfo {
        PageInfo::new(self.page, self.page_size, total)
    }

    /// The following page, if there is one.
    #[must_use]
    pub fn next(&self, total: u64) -> Option<Self> {
        self.info(total).has_next().then(|| self.clone().at_page(self.page.saturating_add(1)))
    }

    /// The preceding page, if there is one.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        (self.page > 1).then(|| self.clone().at_page(self.page - 1))
    }
}

/// Position of one page within the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl PageInfo {
    /// Computes page bounds; a zero page size counts as 1.
    #[must_use]
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        let page_size = page_size.max(1);
        Self {
            page: page.max(1),
            page_size,
            total,
            total_pages: total.div_ceil(u64::from(page_size)),
        }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages
    }

    /// Page label shown between the navigation buttons.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Página {}", self.page)
    }
}

/// Display columns of a customer in the admin table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRow {
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub used: &'static str,
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Sim" } else { "Não" }
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            cpf: format_cpf(&customer.cpf),
            phone: format_phone(&customer.phone),
            used: yes_no(customer.used),
        }
    }
}

impl CustomerRow {
    /// Labelled lines for the customer detail dialog.
    #[must_use]
    pub fn details(customer: &Customer) -> Vec<(&'static str, String)> {
        let row = Self::from(customer);
        vec![
            ("Nome", row.name),
            ("CPF", row.cpf),
            ("Celular", row.phone),
            ("Nascimento", customer.birth_date.format("%d/%m/%Y").to_string()),
            (
                "Cadastrado Em",
                customer.created_at.format("%d/%m/%Y, %H:%M:%S").to_string(),
            ),
            ("Utilizado", row.used.to_string()),
            (
                "Utilizado Em",
                customer
                    .used_at
                    .map(|at| at.format("%d/%m/%Y, %H:%M:%S").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]
    }
}
