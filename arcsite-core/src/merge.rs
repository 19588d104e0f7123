//! Structural deep merge of documents.
//!
//! Objects merge key by key; every other value (arrays, strings, numbers,
//! booleans, `null`) replaces what was there. A stored gallery section with
//! one image therefore replaces the two-image default outright instead of
//! being merged element-wise.

use arcsite_sdk::{PartialDocument, SiteDocument};
use serde_json::{Map, Value};

/// Merge `incoming` onto `base`, returning a new document.
///
/// Keys only in `base` are kept, keys only in `incoming` are added. `base`
/// is not modified.
pub fn merge(base: &SiteDocument, incoming: &PartialDocument) -> SiteDocument {
    SiteDocument::new(merge_map(base.as_map(), incoming))
}

/// Merge two JSON values with the same rules as [`merge`].
pub fn merge_value(base: &Value, incoming: &Value) -> Value {
    match (base, incoming) {
        (Value::Object(base), Value::Object(incoming)) => Value::Object(merge_map(base, incoming)),
        // A composite over a non-object merges onto an empty object, which
        // is the incoming object itself.
        (_, incoming) => incoming.clone(),
    }
}

fn merge_map(base: &Map<String, Value>, incoming: &Map<String, Value>) -> Map<String, Value> {
    let mut out = base.clone();
    for (key, value) in incoming {
        let merged = match out.get(key) {
            Some(existing) => merge_value(existing, value),
            None => value.clone(),
        };
        out.insert(key.clone(), merged);
    }
    out
}
