//! Schema.org record builders.
//!
//! One builder per entity kind, each a total function from a typed options
//! struct to a [`Schema`] record. Builders copy optional inputs into the
//! record only when they are present; partial cross-field combinations (a
//! price without a currency, an opening-hours spec missing its day list)
//! silently produce no output field. That omission behavior is a documented
//! contract, not an error path - downstream consumers rely on absent keys.
//!
//! ```
//! use schema_ld::schema::{BreadcrumbItem, breadcrumb_list};
//!
//! let crumbs = breadcrumb_list(&[
//!     BreadcrumbItem::new("Home", "https://example.com"),
//!     BreadcrumbItem::new("Products", "https://example.com/products"),
//! ]);
//! assert_eq!(crumbs.get("itemListElement").at(1).get("position").int(), Some(2));
//! ```

mod article;
mod breadcrumb;
mod event;
mod faq;
mod organization;
mod product;
mod review;
mod service;
#[cfg(test)]
mod tests;

pub use article::{ArticleOptions, article};
pub use breadcrumb::{BreadcrumbItem, breadcrumb_list};
pub use event::{AttendanceMode, EventLocation, EventOptions, EventStatus, event};
pub use faq::{FaqItem, faq_page};
pub use organization::{
    GeoMidpoint, OpeningHours, OrganizationInfo, OrganizationOptions, ServiceArea, organization,
};
pub use product::{Availability, ProductOptions, product};
pub use review::{ReviewEntry, ReviewOptions, review};
pub use service::{ServiceOptions, service};

use crate::constants::SCHEMA_ORG_CONTEXT;
use crate::json::{self, JsonValue, ToJson};

/// A single Schema.org record.
///
/// Every record carries `"@context": "https://schema.org"` and exactly one
/// `"@type"` tag naming the entity kind its builder produces. Beyond those
/// two fixed keys the record is an open mapping from Schema.org property
/// names to JSON values; [`Schema::with`] lets callers layer on properties
/// the builders do not cover.
///
/// Serialization goes through `Display` (or [`crate::script::payload`] for
/// whole pages):
///
/// ```
/// use schema_ld::schema::{FaqItem, faq_page};
///
/// let schema = faq_page(&[]);
/// assert_eq!(
///     schema.to_string(),
///     r#"{"@context":"https://schema.org","@type":"FAQPage","mainEntity":[]}"#
/// );
/// ```
#[derive(Clone)]
pub struct Schema {
    value: JsonValue,
}

impl Schema {
    /// Start a record of the given type with the context stamped on.
    pub(crate) fn typed(type_tag: &str) -> Self {
        Self {
            value: json::obj()
                .set("@context", SCHEMA_ORG_CONTEXT)
                .set("@type", type_tag),
        }
    }

    pub(crate) fn set(self, key: &str, value: impl ToJson) -> Self {
        Self {
            value: self.value.set(key, value),
        }
    }

    pub(crate) fn set_some(self, key: &str, value: Option<impl ToJson>) -> Self {
        Self {
            value: self.value.set_some(key, value),
        }
    }

    /// Add or replace a property on the record.
    ///
    /// Extension point for properties the builders do not model. Replacing
    /// `@context` or `@type` is possible but on the caller's head.
    #[must_use]
    pub fn with(self, key: &str, value: impl ToJson) -> Self {
        self.set(key, value)
    }

    /// Read a property (null if absent).
    #[must_use]
    pub fn get(&self, key: &str) -> JsonValue {
        self.value.get(key)
    }

    /// Check whether a property is present on the record.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.value.has(key)
    }

    /// The record's `@type` tag.
    #[must_use]
    pub fn type_tag(&self) -> Option<String> {
        self.value.get("@type").str()
    }

    /// Unwrap into the underlying JSON value.
    #[must_use]
    pub fn into_json(self) -> JsonValue {
        self.value
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl ToJson for Schema {
    #[inline]
    fn to_json(&self) -> JsonValue {
        self.value.clone()
    }
}

/// One value or an ordered list of values.
///
/// JSON-LD allows most properties to carry either a single value or an
/// array of them; the product image field is the one this crate models that
/// way. `From` conversions keep call sites terse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OneOrMany<T> {
    /// A single value, serialized bare.
    One(T),
    /// An ordered list, serialized as a JSON array.
    Many(Vec<T>),
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl<T: ToJson> ToJson for OneOrMany<T> {
    fn to_json(&self) -> JsonValue {
        match self {
            Self::One(value) => value.to_json(),
            Self::Many(values) => {
                let mut result = json::arr();
                for value in values {
                    result = result.push(value);
                }
                result
            },
        }
    }
}
