//! ToJson trait and all implementations.

use super::builder::{arr, float, int, null, str};
use super::value::JsonValue;

/// A trait for types that can be converted to JSON values.
///
/// This is what lets [`JsonValue::set`] and [`JsonValue::push`] accept plain
/// Rust values directly:
///
/// ```
/// use schema_ld::json;
///
/// let value = json::obj()
///     .set("name", "Alice")
///     .set("age", 30)
///     .set("tags", vec!["admin", "user"]);
/// assert_eq!(value.get("age").int(), Some(30));
/// ```
///
/// # Implementations
///
/// This trait is implemented for:
/// - Strings: `String`, `&str`
/// - Integers: `i32`, `i64`, `u32`, `u64`, `usize`
/// - Floats: `f32`, `f64`
/// - Boolean: `bool`
/// - Optional: `Option<T>` where T: ToJson (None becomes an explicit null -
///   use [`JsonValue::set_some`] for key omission instead)
/// - Arrays: `Vec<T>`, `&[T]` where T: ToJson
/// - JSON: `JsonValue` (pass-through)
/// - References to any of the above
pub trait ToJson {
    /// Convert this value to a JSON value.
    fn to_json(&self) -> JsonValue;
}

// === String implementations ===

impl ToJson for String {
    #[inline]
    fn to_json(&self) -> JsonValue {
        str(self)
    }
}

impl ToJson for &str {
    #[inline]
    fn to_json(&self) -> JsonValue {
        str(*self)
    }
}

// === Integer implementations ===

impl ToJson for i32 {
    #[inline]
    fn to_json(&self) -> JsonValue {
        int(i64::from(*self))
    }
}

impl ToJson for i64 {
    #[inline]
    fn to_json(&self) -> JsonValue {
        int(*self)
    }
}

impl ToJson for u32 {
    #[inline]
    fn to_json(&self) -> JsonValue {
        int(i64::from(*self))
    }
}

impl ToJson for u64 {
    #[inline]
    fn to_json(&self) -> JsonValue {
        // Note: Values > i64::MAX will wrap
        int(*self as i64)
    }
}

impl ToJson for usize {
    #[inline]
    fn to_json(&self) -> JsonValue {
        int(*self as i64)
    }
}

// === Float implementations ===

impl ToJson for f32 {
    #[inline]
    fn to_json(&self) -> JsonValue {
        float(f64::from(*self))
    }
}

impl ToJson for f64 {
    #[inline]
    fn to_json(&self) -> JsonValue {
        float(*self)
    }
}

// === Boolean implementation ===

impl ToJson for bool {
    #[inline]
    fn to_json(&self) -> JsonValue {
        super::builder::bool(*self)
    }
}

// === Option implementation (None becomes null) ===

impl<T: ToJson> ToJson for Option<T> {
    #[inline]
    fn to_json(&self) -> JsonValue {
        match self {
            Some(v) => v.to_json(),
            None => null(),
        }
    }
}

// === Array implementations ===

impl<T: ToJson> ToJson for Vec<T> {
    #[inline]
    fn to_json(&self) -> JsonValue {
        let mut result = arr();
        for item in self {
            result = result.push(item);
        }
        result
    }
}

impl<T: ToJson> ToJson for &[T] {
    #[inline]
    fn to_json(&self) -> JsonValue {
        let mut result = arr();
        for item in *self {
            result = result.push(item);
        }
        result
    }
}

// === JsonValue pass-through ===

impl ToJson for JsonValue {
    #[inline]
    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

// === Reference implementations ===

impl<T: ToJson + ?Sized> ToJson for &T {
    #[inline]
    fn to_json(&self) -> JsonValue {
        (*self).to_json()
    }
}
