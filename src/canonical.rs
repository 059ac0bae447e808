//! Deterministic canonicalization of JSON-like values
//!
//! Two logically equal records must serialize identically regardless of how
//! their maps were built: object keys are sorted lexicographically at every
//! level, array order is preserved (it is semantic), primitives pass through
//! unchanged. The canonical form is the hashing input and the export
//! artifact.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// Recursively canonicalize a JSON value.
///
/// Idempotent: canonicalizing a canonical value is a no-op.
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            // Explicit sort so ordering never depends on serde_json's map
            // implementation (insertion-ordered under `preserve_order`).
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, canonicalize(value));
            }
            Value::Object(sorted)
        }
        primitive => primitive,
    }
}

/// Compact canonical JSON text. The hashing input.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let canonical = canonicalize(serde_json::to_value(value)?);
    Ok(serde_json::to_string(&canonical)?)
}

/// Pretty-printed canonical JSON with stable alphabetical key order at every
/// object level. The export artifact, suitable for diffing across runs.
pub fn to_canonical_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let canonical = canonicalize(serde_json::to_value(value)?);
    Ok(serde_json::to_string_pretty(&canonical)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sorts_object_keys_recursively() {
        let value = json!({"b": 1, "a": [{"d": 1, "c": 2}]});
        let canonical = canonicalize(value);
        assert_eq!(
            serde_json::to_string(&canonical).unwrap(),
            r#"{"a":[{"c":2,"d":1}],"b":1}"#
        );
    }

    #[test]
    fn preserves_array_order() {
        let value = json!([3, 1, 2, {"z": 0, "a": 0}]);
        let canonical = canonicalize(value);
        assert_eq!(
            serde_json::to_string(&canonical).unwrap(),
            r#"[3,1,2,{"a":0,"z":0}]"#
        );
    }

    #[test]
    fn idempotent() {
        let value = json!({"z": {"y": [2, 1]}, "a": "x"});
        let once = canonicalize(value);
        let twice = canonicalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn key_insertion_order_does_not_matter() {
        let mut forward = Map::new();
        forward.insert("alpha".into(), json!(1));
        forward.insert("beta".into(), json!(2));

        let mut reverse = Map::new();
        reverse.insert("beta".into(), json!(2));
        reverse.insert("alpha".into(), json!(1));

        let a = serde_json::to_string(&canonicalize(Value::Object(forward))).unwrap();
        let b = serde_json::to_string(&canonicalize(Value::Object(reverse))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn primitives_pass_through() {
        assert_eq!(canonicalize(json!(true)), json!(true));
        assert_eq!(canonicalize(json!(1.5)), json!(1.5));
        assert_eq!(canonicalize(json!("s")), json!("s"));
        assert_eq!(canonicalize(Value::Null), Value::Null);
    }

    #[test]
    fn pretty_form_keeps_alphabetical_keys() {
        let pretty = to_canonical_json_pretty(&json!({"b": 1, "a": 2})).unwrap();
        let a_pos = pretty.find("\"a\"").unwrap();
        let b_pos = pretty.find("\"b\"").unwrap();
        assert!(a_pos < b_pos);
    }
}
