//! Flat key-value records exchanged with the durable store.

use serde_json::{Map, Value};

/// A stored record, or an equality filter over records.
pub type Record = Map<String, Value>;

/// Build a record from `(key, value)` pairs.
pub fn record<I, K>(pairs: I) -> Record
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Whether `record` satisfies every equality in `filter`.
///
/// An empty filter matches everything.
pub fn matches(record: &Record, filter: &Record) -> bool {
    filter
        .iter()
        .all(|(key, expected)| record.get(key) == Some(expected))
}
