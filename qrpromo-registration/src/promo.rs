//! Promotion title display.

use std::fmt;

const PRICE_SEPARATOR: &str = " por ";

/// A promotion title split into headline and highlighted price.
///
/// `"Promoção Pizza por R$ 0,25"` becomes headline `"Promoção Pizza"` and
/// price `"R$ 0,25"`. Only the first `" por "` splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoTitle {
    pub headline: String,
    pub price: Option<String>,
}

impl PromoTitle {
    /// Splits a title on its first `" por "`.
    #[must_use]
    pub fn parse(title: &str) -> Self {
        match title.split_once(PRICE_SEPARATOR) {
            Some((headline, price)) => Self {
                headline: headline.to_string(),
                price: Some(price.trim().to_string()).filter(|p| !p.is_empty()),
            },
            None => Self {
                headline: title.to_string(),
                price: None,
            },
        }
    }
}

impl fmt::Display for PromoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.price {
            Some(price) => write!(f, "{}{PRICE_SEPARATOR}{price}", self.headline),
            None => f.write_str(&self.headline),
        }
    }
}
