//! Object layout: the TTL table is keyed directly by record type.
//!
//! The document's `ttl0_data` field holds an object whose keys are
//! record-type strings and whose values are entry objects carrying a numeric
//! `value` TTL. Each record type can appear at most once, and retrieval is a
//! single key access.

use super::{value_as_ttl, Document, TtlLayout};

pub struct ObjectLayout;

impl ObjectLayout {
    pub fn new() -> Self {
        Self
    }
}

impl TtlLayout for ObjectLayout {
    fn name(&self) -> &'static str {
        "object"
    }

    fn lookup(&self, doc: &Document, record_type: &str) -> Option<i64> {
        doc.get("ttl0_data")?
            .as_object()?
            .get(record_type)?
            .get("value")
            .and_then(value_as_ttl)
    }
}

// ---------------------------------------------------------------------------
//  Unit Tests
// ---------------------------------------------------------------------------
