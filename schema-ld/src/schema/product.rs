//! Product builder.

use super::{OneOrMany, Schema};
use crate::constants::SCHEMA_ORG_NAMESPACE;
use crate::json;

/// Product stock availability, per the Schema.org ItemAvailability
/// enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Availability {
    /// In stock and ready to ship.
    InStock,
    /// Currently out of stock.
    OutOfStock,
    /// Not yet released; orders accepted ahead of availability.
    PreOrder,
    /// Out of stock but on order.
    Backorder,
    /// Available in limited quantity.
    LimitedAvailability,
}

impl Availability {
    const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "InStock",
            Self::OutOfStock => "OutOfStock",
            Self::PreOrder => "PreOrder",
            Self::Backorder => "Backorder",
            Self::LimitedAvailability => "LimitedAvailability",
        }
    }

    /// Fully-qualified Schema.org reference URL for this member.
    #[must_use]
    pub fn reference(self) -> String {
        format!("{SCHEMA_ORG_NAMESPACE}{}", self.as_str())
    }
}

/// Input for the [`product`] builder.
#[derive(Clone, Debug)]
pub struct ProductOptions {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) image: Option<OneOrMany<String>>,
    pub(crate) url: Option<String>,
    pub(crate) brand: Option<String>,
    pub(crate) sku: Option<String>,
    pub(crate) price: Option<f64>,
    pub(crate) price_currency: Option<String>,
    pub(crate) availability: Option<Availability>,
}

impl ProductOptions {
    /// Create product options with the mandatory fields.
    #[must_use]
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image: None,
            url: None,
            brand: None,
            sku: None,
            price: None,
            price_currency: None,
            availability: None,
        }
    }

    /// Product image: a single URL or an ordered list of URLs.
    #[must_use]
    pub fn image(mut self, image: impl Into<OneOrMany<String>>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Canonical product URL.
    #[must_use]
    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Brand name, emitted as a nested `Brand` record.
    #[must_use]
    pub fn brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_string());
        self
    }

    /// Stock keeping unit.
    #[must_use]
    pub fn sku(mut self, sku: &str) -> Self {
        self.sku = Some(sku.to_string());
        self
    }

    /// Numeric price. Zero is a valid price; an offer is only emitted once
    /// a currency accompanies it.
    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// ISO 4217 currency code (e.g. `"USD"`).
    #[must_use]
    pub fn price_currency(mut self, currency: &str) -> Self {
        self.price_currency = Some(currency.to_string());
        self
    }

    /// Stock availability.
    #[must_use]
    pub fn availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }
}

/// Build a Product record.
///
/// The `offers` sub-record is emitted only when both a price and a
/// currency are present; the price renders as a string with exactly two
/// decimal places (`0` → `"0.00"`). Availability, when present, renders
/// as its fully-qualified Schema.org URL; when absent the key is omitted
/// from the offer entirely.
pub fn product(options: &ProductOptions) -> Schema {
    let schema = Schema::typed("Product")
        .set("name", &options.name)
        .set("description", &options.description)
        .set_some("image", options.image.as_ref())
        .set_some("url", options.url.as_deref())
        .set_some("sku", options.sku.as_deref())
        .set_some(
            "brand",
            options
                .brand
                .as_deref()
                .map(|name| json::obj().set("@type", "Brand").set("name", name)),
        );

    match (options.price, options.price_currency.as_deref()) {
        (Some(price), Some(currency)) => schema.set(
            "offers",
            json::obj()
                .set("@type", "Offer")
                .set("price", format!("{price:.2}"))
                .set("priceCurrency", currency)
                .set_some(
                    "availability",
                    options.availability.map(Availability::reference),
                ),
        ),
        _ => schema,
    }
}
