//! Layout definitions and the common `TtlLayout` trait.
//!
//! Two implementations are provided:
//! - [`array::ArrayLayout`] — the TTL table is an ordered list, scanned
//!   linearly on every lookup
//! - [`object::ObjectLayout`] — the TTL table is keyed directly by record
//!   type, one map access per lookup

pub mod array;
pub mod object;

use serde_json::{Map, Value};

/// A parsed JSON document, rooted at an object.
pub type Document = Map<String, Value>;

/// Trait implemented by each layout variant (array vs object).
///
/// A lookup is a pure read over an immutable document. "Not found" is `None`,
/// never an error, and is distinct from a TTL of zero.
pub trait TtlLayout {
    /// Short lowercase name for logs and run results.
    fn name(&self) -> &'static str;

    /// Retrieve the TTL in seconds for `record_type`, or `None` if the
    /// document does not map it.
    fn lookup(&self, doc: &Document, record_type: &str) -> Option<i64>;
}

/// Read an entry's `value` field as a TTL.
///
/// Integer values pass through; floats are truncated toward zero. Anything
/// else is unusable and reads as absent.
pub(crate) fn value_as_ttl(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

// ---------------------------------------------------------------------------
//  Unit Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Integer values are returned as-is, including zero and negatives.
    #[test]
    fn integer_values_pass_through() {
        assert_eq!(value_as_ttl(&json!(300)), Some(300));
        assert_eq!(value_as_ttl(&json!(0)), Some(0));
        assert_eq!(value_as_ttl(&json!(-1)), Some(-1));
    }

    /// Fractional values truncate toward zero.
    #[test]
    fn float_values_truncate_toward_zero() {
        assert_eq!(value_as_ttl(&json!(300.9)), Some(300));
        assert_eq!(value_as_ttl(&json!(-0.7)), Some(0));
    }

    /// Non-numeric values are unusable.
    #[test]
    fn non_numeric_values_are_absent() {
        assert_eq!(value_as_ttl(&json!("300")), None);
        assert_eq!(value_as_ttl(&json!(null)), None);
        assert_eq!(value_as_ttl(&json!([300])), None);
        assert_eq!(value_as_ttl(&json!({"value": 300})), None);
    }
}
