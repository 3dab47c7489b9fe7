//! JSON value building and serialization using miniserde.
//!
//! This module is the substrate the schema builders emit into: a tree-backed
//! [`JsonValue`] with a fluent builder API and compact serialization via
//! `Display`. The crate only ever constructs JSON; parsing stays out of the
//! public surface (the test suites parse with `miniserde` directly when they
//! need the round-trip).
//!
//! Object keys serialize in sorted order. That is a property of the
//! underlying value model, and it is harmless here: JSON-LD property order
//! carries no meaning.
//!
//! # Examples
//!
//! ```
//! use schema_ld::json;
//!
//! let value = json::obj()
//!     .set("name", "Alice")
//!     .set("age", 30)
//!     .set("tags", json::arr().push("rust").push("jsonld"));
//!
//! assert_eq!(
//!     value.to_string(),
//!     r#"{"age":30,"name":"Alice","tags":["rust","jsonld"]}"#
//! );
//! ```

mod builder;
mod to_json;
mod value;

// Re-export public types and functions
pub use builder::{arr, bool, float, int, null, obj, str};
pub use to_json::ToJson;
pub use value::JsonValue;

// Re-export Value for callers that drop down to the raw tree
pub use miniserde::json::Value as RawValue;
