//! Serialization of schema records into script-tag JSON.
//!
//! The output of [`payload`] is the exact text content of a
//! `<script type="application/ld+json">` element. Rendering that element
//! into page markup - and any HTML-context escaping beyond standard JSON
//! string encoding - belongs to the caller.

use crate::json;
use crate::schema::Schema;

/// One schema record, or an ordered sequence of them.
///
/// [`payload`] takes anything convertible into this, so call sites pass a
/// [`Schema`] or a `Vec<Schema>` directly.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum SchemaSet {
    /// A single record, serialized as a JSON object.
    One(Schema),
    /// An ordered sequence, serialized as a JSON array.
    Many(Vec<Schema>),
}

impl From<Schema> for SchemaSet {
    fn from(schema: Schema) -> Self {
        Self::One(schema)
    }
}

impl From<Vec<Schema>> for SchemaSet {
    fn from(schemas: Vec<Schema>) -> Self {
        Self::Many(schemas)
    }
}

/// Combine several schema records for a multi-schema page.
///
/// Currently the identity on its input - order is caller-determined and
/// preserved verbatim. Kept as the single seam where future combination
/// logic (deduplication, `@graph` packing) would land, so callers already
/// route multi-schema pages through it.
#[must_use]
pub fn merge(schemas: Vec<Schema>) -> Vec<Schema> {
    schemas
}

/// Serialize one schema record, or an ordered sequence of them, to the
/// JSON text for a page's script tag.
///
/// A sequence serializes array-wrapped; a single record serializes as a
/// bare object. Compact output, no pretty-printing. Total over its input.
///
/// ```
/// use schema_ld::schema::{FaqItem, faq_page};
/// use schema_ld::script;
///
/// let single = script::payload(faq_page(&[]));
/// assert!(single.starts_with('{'));
///
/// let page = script::payload(vec![faq_page(&[]), faq_page(&[])]);
/// assert!(page.starts_with('['));
/// ```
pub fn payload(schemas: impl Into<SchemaSet>) -> String {
    match schemas.into() {
        SchemaSet::One(schema) => schema.to_string(),
        SchemaSet::Many(schemas) => {
            let mut array = json::arr();
            for schema in schemas {
                array = array.push(schema);
            }
            array.to_string()
        },
    }
}
