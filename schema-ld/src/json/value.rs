//! JsonValue struct and all its methods.

use super::to_json::ToJson;
use miniserde::json::{Array, Number, Object, Value};
use std::rc::Rc;

/// A JSON value with a fluent builder API.
///
/// Values are immutable from the caller's point of view: every building
/// method consumes `self` and returns the updated value, so builder chains
/// read top to bottom the way the serialized output does.
///
/// # Thread Safety
///
/// `JsonValue` uses `Rc<Value>` internally and is **not** `Send` or `Sync`.
/// Schema records are built, serialized, and dropped within a single call
/// site; `Rc` keeps clones cheap without atomic reference counting.
#[derive(Clone)]
pub struct JsonValue {
    inner: Rc<Value>,
}

impl JsonValue {
    /// Create a JsonValue from a raw tree value.
    pub(crate) fn new(v: Value) -> Self {
        Self { inner: Rc::new(v) }
    }

    pub(crate) fn null() -> Self {
        Self::new(Value::Null)
    }

    /// Borrow the raw tree value.
    pub(crate) fn value(&self) -> &Value {
        &self.inner
    }

    /// Take the raw tree value, cloning only when the tree is shared.
    pub(crate) fn take_value(self) -> Value {
        Rc::try_unwrap(self.inner).unwrap_or_else(|rc| (*rc).clone())
    }

    // === Reading (chainable) ===

    /// Get object field (returns null if missing or not an object).
    #[must_use]
    pub fn get(&self, key: &str) -> JsonValue {
        match self.value() {
            Value::Object(obj) => obj
                .get(key)
                .cloned()
                .map(JsonValue::new)
                .unwrap_or_else(JsonValue::null),
            _ => JsonValue::null(),
        }
    }

    /// Get array element (returns null if out of bounds or not an array).
    #[must_use]
    pub fn at(&self, index: usize) -> JsonValue {
        match self.value() {
            Value::Array(arr) => arr
                .get(index)
                .cloned()
                .map(JsonValue::new)
                .unwrap_or_else(JsonValue::null),
            _ => JsonValue::null(),
        }
    }

    /// Check whether an object field is present, even if its value is null.
    ///
    /// This is the accessor the omission contract is stated in terms of:
    /// builders drop absent optional inputs entirely, so `has()` returns
    /// `false` for them while a field explicitly set to null reports `true`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        matches!(self.value(), Value::Object(obj) if obj.get(key).is_some())
    }

    /// As string, None if not a string.
    #[must_use]
    pub fn str(&self) -> Option<String> {
        match self.value() {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// As integer, None if not a number.
    #[must_use]
    pub fn int(&self) -> Option<i64> {
        match self.value() {
            Value::Number(n) => match n {
                Number::I64(i) => Some(*i),
                Number::U64(u) => (*u).try_into().ok(),
                Number::F64(f) => {
                    const MAX_SAFE_INT: f64 = 9007199254740992.0; // 2^53
                    if f.is_finite() && f.abs() <= MAX_SAFE_INT {
                        Some(*f as i64)
                    } else {
                        None
                    }
                },
            },
            _ => None,
        }
    }

    /// As float, None if not a number.
    #[must_use]
    pub fn float(&self) -> Option<f64> {
        match self.value() {
            Value::Number(n) => match n {
                Number::F64(f) if f.is_finite() => Some(*f),
                Number::I64(i) => Some(*i as f64),
                Number::U64(u) => Some(*u as f64),
                Number::F64(_) => None,
            },
            _ => None,
        }
    }

    /// As boolean, None if not a boolean.
    #[must_use]
    pub fn bool(&self) -> Option<bool> {
        match self.value() {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Is this value null?
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.value(), Value::Null)
    }

    /// Get object keys (empty if not an object).
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        match self.value() {
            Value::Object(obj) => obj.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Get array/object length.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self.value() {
            Value::Array(arr) => Some(arr.len()),
            Value::Object(obj) => Some(obj.len()),
            _ => None,
        }
    }

    /// Is this an empty array/object?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len().is_some_and(|l| l == 0)
    }

    // === Building (fluent) ===

    /// Set object field (creates object if needed).
    ///
    /// Uses copy-on-write via `Rc::make_mut` - only clones the object if
    /// there are multiple references. For typical builder chains like
    /// `obj().set("a", v1).set("b", v2)`, this is O(1) per set, not O(n).
    #[must_use]
    pub fn set(mut self, key: &str, value: impl ToJson) -> JsonValue {
        let inner_val = value.to_json().take_value();
        let val_mut = Rc::make_mut(&mut self.inner);

        if let Value::Object(obj) = val_mut {
            obj.insert(key.to_string(), inner_val);
        } else {
            // Not an object, create new one
            let mut obj = Object::new();
            obj.insert(key.to_string(), inner_val);
            *val_mut = Value::Object(obj);
        }

        self
    }

    /// Set object field only when the value is present.
    ///
    /// `None` leaves the record untouched - the key is omitted, not set to
    /// null. Every optional schema property goes through this method, which
    /// is what keeps the "absent input, absent output" contract uniform
    /// across the builders. To emit an explicit null, call
    /// [`set`](Self::set) with a `None` value instead.
    #[must_use]
    pub fn set_some(self, key: &str, value: Option<impl ToJson>) -> JsonValue {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// Push to array (creates array if needed).
    ///
    /// Copy-on-write like [`set`](Self::set).
    #[must_use]
    pub fn push(mut self, value: impl ToJson) -> JsonValue {
        let inner_val = value.to_json().take_value();
        let val_mut = Rc::make_mut(&mut self.inner);

        if let Value::Array(arr) = val_mut {
            arr.push(inner_val);
        } else {
            // Not an array, create new one
            let mut arr = Array::new();
            arr.push(inner_val);
            *val_mut = Value::Array(arr);
        }

        self
    }
}

impl std::fmt::Display for JsonValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", miniserde::json::to_string(&*self.inner))
    }
}

impl std::fmt::Debug for JsonValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
