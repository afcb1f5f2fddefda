// Fetch-all decoding policy
//
// Collection queries decode item-by-item so one malformed entry cannot
// take down a whole listing: invalid items are skipped with a warning,
// author ordering is preserved, and duplicate `sys.id`s keep the first
// occurrence. Every fetch-all operation in `content/` goes through
// `collect_entries` -- the policy lives in exactly one place.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Decode a collection's raw items into typed DTOs.
///
/// Items that fail to decode are dropped with a `warn!`; unresolvable
/// links (which Contentful renders as `null` items) and duplicate ids
/// are dropped the same way. The surviving items keep their source
/// order.
pub(crate) fn collect_entries<T: DeserializeOwned>(
    items: Vec<Value>,
    content_type: &'static str,
) -> Vec<T> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        if item.is_null() {
            warn!(content_type, index, "skipping unresolvable entry");
            continue;
        }

        if let Some(id) = entry_id(&item) {
            if !seen.insert(id.to_owned()) {
                warn!(content_type, id, "skipping duplicate entry id");
                continue;
            }
        }

        match serde_json::from_value::<T>(item) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!(content_type, index, error = %e, "skipping invalid entry");
            }
        }
    }

    entries
}

/// Peek the `sys.id` of a raw item without decoding the whole entry.
fn entry_id(item: &Value) -> Option<&str> {
    item.get("sys")?.get("id")?.as_str()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::collect_entries;
    use crate::types::Sys;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        sys: Sys,
        label: String,
    }

    fn probe(id: &str, label: &str) -> serde_json::Value {
        json!({ "sys": { "id": id }, "label": label })
    }

    #[test]
    fn preserves_source_order() {
        let items = vec![probe("c", "third"), probe("a", "first"), probe("b", "second")];
        let out: Vec<Probe> = collect_entries(items, "probe");
        let ids: Vec<&str> = out.iter().map(|p| p.sys.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn skips_invalid_items_and_keeps_the_rest() {
        let items = vec![
            probe("a", "ok"),
            json!({ "sys": { "id": "broken" } }), // missing label
            probe("b", "also ok"),
        ];
        let out: Vec<Probe> = collect_entries(items, "probe");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].sys.id, "a");
        assert_eq!(out[1].sys.id, "b");
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let items = vec![probe("a", "first"), probe("a", "second"), probe("b", "other")];
        let out: Vec<Probe> = collect_entries(items, "probe");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].label, "first");
        assert_eq!(out[1].sys.id, "b");
    }

    #[test]
    fn null_items_are_dropped() {
        let items = vec![serde_json::Value::Null, probe("a", "ok")];
        let out: Vec<Probe> = collect_entries(items, "probe");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sys.id, "a");
    }

    #[test]
    fn empty_collection_is_fine() {
        let out: Vec<Probe> = collect_entries(Vec::new(), "probe");
        assert!(out.is_empty());
    }
}
