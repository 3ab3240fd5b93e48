//! Array layout: the TTL table is an ordered list of entries.
//!
//! The document's `ttl0_data` field holds an array. Each element is an object
//! with a `types` array naming the record types the entry covers and a
//! numeric `value` TTL. Retrieval walks entries in order, so a record type
//! listed by two entries resolves to the first.

use serde_json::Value;

use super::{value_as_ttl, Document, TtlLayout};

pub struct ArrayLayout;

impl ArrayLayout {
    pub fn new() -> Self {
        Self
    }
}

impl TtlLayout for ArrayLayout {
    fn name(&self) -> &'static str {
        "array"
    }

    fn lookup(&self, doc: &Document, record_type: &str) -> Option<i64> {
        let entries = doc.get("ttl0_data")?.as_array()?;
        for entry in entries {
            let Some(types) = entry.get("types").and_then(Value::as_array) else {
                continue;
            };
            if types.iter().any(|t| t.as_str() == Some(record_type)) {
                // A matching entry with no usable value does not stop the
                // scan; a later entry may still cover the type.
                if let Some(ttl) = entry.get("value").and_then(value_as_ttl) {
                    return Some(ttl);
                }
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
//  Unit Tests
// ---------------------------------------------------------------------------
