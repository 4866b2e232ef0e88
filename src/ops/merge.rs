//! Deep merge of partial overrides onto a complete base.
//!
//! A patch is a *deep partial* of its base: any field at any depth may be
//! left out, and what is left out keeps the base's value. Arrays are treated
//! as arrays of partial elements and merged index by index.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::data::model::{Record, Value};
use crate::error::{RecordError, Result};

/// Merge `patch` onto `base`, returning a fresh record.
///
/// For every key in `patch`:
/// * record on both sides: merged recursively
/// * array on both sides: merged element-wise, extra patch elements appended
/// * anything else: the patch value wins
///
/// Keys only in `base` keep their value and position; keys only in `patch`
/// are appended in patch order.
pub fn deep_merge(base: &Record, patch: &Record) -> Record {
    let mut out = base.clone();
    for (key, patch_val) in patch.iter() {
        let merged = match out.get(key) {
            Some(base_val) => merge_values(base_val, patch_val),
            None => patch_val.clone(),
        };
        out.insert(key, merged);
    }
    out
}

fn merge_values(base: &Value, patch: &Value) -> Value {
    match (base, patch) {
        (Value::Record(b), Value::Record(p)) => Value::Record(deep_merge(b, p)),
        (Value::Array(b), Value::Array(p)) => {
            let mut items: Vec<Value> = b
                .iter()
                .zip(p)
                .map(|(bv, pv)| merge_values(bv, pv))
                .collect();
            // At most one of these tails is non-empty.
            items.extend(b.iter().skip(p.len()).cloned());
            items.extend(p.iter().skip(b.len()).cloned());
            Value::Array(items)
        }
        (_, other) => other.clone(),
    }
}

/// Like [`deep_merge`], for values that must both be records.
pub fn deep_merge_value(base: &Value, patch: &Value) -> Result<Record> {
    let base = base
        .as_record()
        .ok_or_else(|| RecordError::invalid("base", "a record", base.kind()))?;
    let patch = patch
        .as_record()
        .ok_or_else(|| RecordError::invalid("patch", "a record", patch.kind()))?;
    Ok(deep_merge(base, patch))
}

/// Build a `T` from a complete `base` and a deep-partial JSON `patch`.
///
/// The patch only names the fields it overrides, at any depth. Fails with
/// [`RecordError::Shape`] if an override has the wrong type for its field.
pub fn merge_partial<T>(base: &T, patch: JsonValue) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let base_val = Value::from(serde_json::to_value(base)?);
    let patch_val = Value::from(patch);
    let merged = deep_merge_value(&base_val, &patch_val)?;
    Ok(serde_json::from_value(merged.to_json())?)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::record;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Comment {
        value: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Meta {
        name: String,
        description: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SocialPost {
        id: String,
        comments: Vec<Comment>,
        meta: Meta,
    }

    fn default_post() -> SocialPost {
        SocialPost {
            id: "0".into(),
            comments: vec![Comment { value: "first".into() }],
            meta: Meta {
                name: "untitled".into(),
                description: "none".into(),
            },
        }
    }

    #[test]
    fn empty_patch_is_identity() {
        let base = record! { "a" => 1, "nested" => record! { "b" => true } };
        assert_eq!(deep_merge(&base, &Record::new()), base);
    }

    #[test]
    fn nested_fields_merge_independently() {
        let base = record! {
            "id" => "1",
            "meta" => record! { "name" => "x", "description" => "y" },
        };
        let patch = record! { "meta" => record! { "name" => "Foo" } };
        let merged = deep_merge(&base, &patch);

        assert_eq!(
            merged,
            record! {
                "id" => "1",
                "meta" => record! { "name" => "Foo", "description" => "y" },
            }
        );
    }

    #[test]
    fn scalars_and_mismatches_take_the_patch() {
        let base = record! { "a" => 1, "b" => record! { "c" => 1 }, "d" => "keep" };
        let patch = record! { "a" => Value::Null, "b" => 7 };
        let merged = deep_merge(&base, &patch);
        assert_eq!(merged.get("a"), Some(&Value::Null));
        assert_eq!(merged.get("b"), Some(&Value::Integer(7)));
        assert_eq!(merged.get("d"), Some(&Value::from("keep")));
    }

    #[test]
    fn arrays_merge_by_index() {
        let base = record! {
            "items" => vec![
                Value::from(record! { "v" => 1, "w" => 1 }),
                Value::from(record! { "v" => 2, "w" => 2 }),
            ],
        };
        let patch = record! {
            "items" => vec![
                Value::from(record! { "v" => 10 }),
                Value::from(record! {}),
                Value::from(record! { "v" => 30 }),
            ],
        };
        let merged = deep_merge(&base, &patch);
        let expected = record! {
            "items" => vec![
                Value::from(record! { "v" => 10, "w" => 1 }),
                Value::from(record! { "v" => 2, "w" => 2 }),
                Value::from(record! { "v" => 30 }),
            ],
        };
        assert_eq!(merged, expected);
    }

    #[test]
    fn new_keys_append_and_base_order_holds() {
        let base = record! { "b" => 1, "a" => 2 };
        let patch = record! { "c" => 3, "b" => 9 };
        let merged = deep_merge(&base, &patch);
        assert_eq!(merged.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(base.get("b"), Some(&Value::Integer(1)));
    }

    #[test]
    fn typed_partial_overrides_only_named_fields() {
        let post = merge_partial(&default_post(), json!({ "id": "12", "meta": { "name": "Foo" } })).unwrap();
        assert_eq!(post.id, "12");
        assert_eq!(post.meta.name, "Foo");
        assert_eq!(post.meta.description, "none");
        assert_eq!(post.comments, default_post().comments);
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        id: u64,
        hits: i64,
    }

    #[test]
    fn typed_empty_patch_keeps_large_unsigned_fields() {
        let base = Counter {
            id: u64::MAX,
            hits: -3,
        };
        assert_eq!(merge_partial(&base, json!({})).unwrap(), base);

        let patched = merge_partial(&base, json!({ "hits": 4 })).unwrap();
        assert_eq!(patched, Counter { id: u64::MAX, hits: 4 });
    }

    #[test]
    fn typed_partial_rejects_wrong_field_type() {
        let err = merge_partial(&default_post(), json!({ "meta": { "name": 5 } })).unwrap_err();
        assert!(matches!(err, RecordError::Shape(_)));
    }

    #[test]
    fn non_record_arguments_are_rejected() {
        let rec = Value::from(record! { "a" => 1 });
        let err = deep_merge_value(&rec, &Value::from(3)).unwrap_err();
        assert!(matches!(err, RecordError::InvalidInput { argument: "patch", .. }));
        let err = deep_merge_value(&Value::Null, &rec).unwrap_err();
        assert!(matches!(err, RecordError::InvalidInput { argument: "base", .. }));
    }
}
