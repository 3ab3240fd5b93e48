//! Record corpora: builds matching array- and object-layout documents.
//!
//! The benchmark binary loads its documents from disk; tests and Criterion
//! benches build theirs in memory from a shared entry table, so both layouts
//! are guaranteed to encode the same data. Synthetic tables use a fixed seed
//! and reproduce exactly across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::{json, Value};

use crate::layout::Document;

/// One TTL entry: the record-type aliases it covers and the TTL in seconds.
///
/// Serializes to exactly the shape the array layout stores, e.g.
/// `{"types": ["A", "AAAA"], "value": 300}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TtlEntry {
    pub types: Vec<String>,
    pub value: i64,
}

impl TtlEntry {
    pub fn new<I, S>(types: I, value: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            value,
        }
    }
}

/// The default record table, mirroring the shape of the shipped data files:
/// common DNS record types with A and AAAA aliased into a shared entry.
pub fn standard_records() -> Vec<TtlEntry> {
    vec![
        TtlEntry::new(["A", "AAAA"], 300),
        TtlEntry::new(["CNAME"], 600),
        TtlEntry::new(["MX"], 3600),
        TtlEntry::new(["NS"], 86400),
        TtlEntry::new(["TXT"], 300),
        TtlEntry::new(["SOA"], 7200),
        TtlEntry::new(["SRV"], 1800),
        TtlEntry::new(["PTR"], 900),
        TtlEntry::new(["CAA"], 3600),
    ]
}

/// Generate a synthetic table of `entries` entries with `aliases_per_entry`
/// aliases each.
///
/// Aliases are unique across the table and named in the `TYPEnnnn` style used
/// for unregistered record types, so they never collide with the standard
/// table. TTLs are random multiples of 300 up to a day. The same arguments
/// and seed always produce the same table.
pub fn synthetic_records(entries: usize, aliases_per_entry: usize, seed: u64) -> Vec<TtlEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut next_code = 0u32;
    (0..entries)
        .map(|_| {
            let types = (0..aliases_per_entry.max(1))
                .map(|_| {
                    next_code += 1;
                    format!("TYPE{next_code:04}")
                })
                .collect();
            TtlEntry {
                types,
                value: i64::from(rng.gen_range(1u32..=288)) * 300,
            }
        })
        .collect()
}

/// Encode a table as the array layout:
/// `{"ttl0_data": [{"types": [...], "value": N}, ...]}`.
///
/// Entry order in the document follows table order, which is what gives the
/// linear scan its first-match semantics.
pub fn array_document(records: &[TtlEntry]) -> Document {
    let mut doc = Document::new();
    doc.insert("ttl0_data".to_string(), json!(records));
    doc
}

/// Encode a table as the object layout:
/// `{"ttl0_data": {"A": {"value": N}, ...}}`.
///
/// Every alias becomes its own key. When two entries claim the same alias the
/// first wins, matching the array layout's scan order.
pub fn object_document(records: &[TtlEntry]) -> Document {
    let mut keyed = serde_json::Map::new();
    for rec in records {
        for alias in &rec.types {
            keyed
                .entry(alias.clone())
                .or_insert_with(|| json!({"value": rec.value}));
        }
    }

    let mut doc = Document::new();
    doc.insert("ttl0_data".to_string(), Value::Object(keyed));
    doc
}

// ---------------------------------------------------------------------------
//  Unit Tests
// ---------------------------------------------------------------------------
