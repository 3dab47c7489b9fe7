// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
// Pedantic lints - allow stylistic ones that don't affect correctness
#![allow(clippy::doc_markdown)] // Schema.org property names in docs
#![allow(clippy::must_use_candidate)] // Not all returned values need must_use
#![allow(clippy::return_self_not_must_use)] // Fluent setters return Self
#![allow(clippy::cast_possible_wrap)] // Array positions are far below i64::MAX
#![allow(clippy::cast_possible_truncation)] // JSON numbers narrowed after range checks
#![allow(clippy::cast_precision_loss)] // i64/u64 read back as f64
#![allow(clippy::match_same_arms)] // Intentional for clarity

//! schema-ld - Schema.org JSON-LD builders for rich-snippet script tags
//!
//! # Overview
//!
//! schema-ld assembles [Schema.org](https://schema.org) structured-data
//! records from typed option structs and serializes them to the JSON text a
//! page embeds in a `<script type="application/ld+json">` element. The crate
//! is a pure in-memory transform: no I/O, no validation layer, no state.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Typed options (OrganizationOptions, ProductOptions, …)  │
//! └──────────────────────────────────────────────────────────┘
//!                           ↓ schema builders
//! ┌──────────────────────────────────────────────────────────┐
//! │  Schema records (@context + @type + mapped properties)   │
//! └──────────────────────────────────────────────────────────┘
//!                           ↓ script::merge (multi-schema pages)
//! ┌──────────────────────────────────────────────────────────┐
//! │  script::payload → JSON text for the page's script tag   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use schema_ld::prelude::*;
//!
//! let org = OrganizationInfo::new("Acme Plumbing", "https://acme.example")
//!     .telephone("+1-555-0100");
//! let schema = organization(&OrganizationOptions::new(org));
//!
//! let crumbs = breadcrumb_list(&[
//!     BreadcrumbItem::new("Home", "https://acme.example"),
//!     BreadcrumbItem::new("Services", "https://acme.example/services"),
//! ]);
//!
//! let json = script::payload(script::merge(vec![schema, crumbs]));
//! assert!(json.starts_with('['));
//! ```
//!
//! # Design
//!
//! Every builder is a total function over its options type. Optional inputs
//! that are absent (or partial cross-field combinations such as a price
//! without a currency) degrade to omitted output fields, never to errors.
//! The caller owns rendering the returned text into page markup.

pub mod constants;
pub mod json;
pub mod schema;
pub mod script;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use schema_ld::prelude::*;
/// ```
///
/// This imports the option structs, the schema builders, the [`script`]
/// serializer module, and the [`json::ToJson`] conversion trait used by
/// [`schema::Schema::with`].
pub mod prelude {
    pub use crate::constants;
    pub use crate::json;
    pub use crate::json::ToJson;
    pub use crate::schema::{
        ArticleOptions, AttendanceMode, Availability, BreadcrumbItem, EventLocation, EventOptions,
        EventStatus, FaqItem, GeoMidpoint, OneOrMany, OpeningHours, OrganizationInfo,
        OrganizationOptions, ProductOptions, ReviewEntry, ReviewOptions, Schema, ServiceArea,
        ServiceOptions, article, breadcrumb_list, event, faq_page, organization, product, review,
        service,
    };
    pub use crate::script;
    pub use crate::script::SchemaSet;
}

// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
