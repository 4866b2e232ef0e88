use indexmap::IndexMap;

use crate::data::model::{Record, Value};
use crate::error::{RecordError, Result};

/// Records bucketed by a field value. Keys iterate in first-seen order and
/// each bucket keeps the input order of its members.
pub type Groups = IndexMap<Value, Vec<Record>>;

/// Partition `records` by the literal value of `field`.
///
/// * Values are compared as-is: `20`, `20.0` and `"20"` are three groups.
/// * A record without the field lands in the [`Value::Null`] group.
/// * An array or record value cannot be a key and fails the whole call.
pub fn group_by(records: &[Record], field: &str) -> Result<Groups> {
    // Validate first so a failure never leaves a half-built mapping behind.
    for (index, rec) in records.iter().enumerate() {
        if let Some(val) = rec.get(field) {
            if !val.is_scalar() {
                return Err(RecordError::UngroupableValue {
                    index,
                    field: field.to_string(),
                    kind: val.kind(),
                });
            }
        }
    }

    let mut groups = Groups::new();
    for rec in records {
        let key = rec.get(field).cloned().unwrap_or(Value::Null);
        groups.entry(key).or_default().push(rec.clone());
    }

    log::debug!(
        "group_by '{field}': {} records into {} groups",
        records.len(),
        groups.len()
    );
    Ok(groups)
}

/// Like [`group_by`], but for a value that must be an array of records.
pub fn group_by_value(value: &Value, field: &str) -> Result<Groups> {
    let items = value
        .as_array()
        .ok_or_else(|| RecordError::invalid("records", "an array of records", value.kind()))?;

    let records = items
        .iter()
        .map(|item| {
            item.as_record()
                .cloned()
                .ok_or_else(|| RecordError::invalid("records", "an array of records", item.kind()))
        })
        .collect::<Result<Vec<_>>>()?;

    group_by(&records, field)
}
