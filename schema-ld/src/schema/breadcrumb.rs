//! BreadcrumbList builder.

use super::Schema;
use crate::json;

/// One breadcrumb trail entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub(crate) name: String,
    pub(crate) url: String,
}

impl BreadcrumbItem {
    /// Create a trail entry.
    #[must_use]
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Build a BreadcrumbList record from an ordered trail.
///
/// `position` is 1-based: the item at input index `i` carries position
/// `i + 1`. No deduplication, no URL validation; an empty trail yields an
/// empty `itemListElement`.
pub fn breadcrumb_list(items: &[BreadcrumbItem]) -> Schema {
    let mut elements = json::arr();
    for (index, item) in items.iter().enumerate() {
        elements = elements.push(
            json::obj()
                .set("@type", "ListItem")
                .set("position", index + 1)
                .set("name", &item.name)
                .set("item", &item.url),
        );
    }

    Schema::typed("BreadcrumbList").set("itemListElement", elements)
}
