use crate::data::model::{Record, Value};
use crate::error::{RecordError, Result};

/// Shallow merge: every field of `over` replaces the same field of `base`.
///
/// Keys keep the position they first appear at (`base` first, then new
/// keys from `over`); nested records are replaced, not merged.
pub fn spread(base: &Record, over: &Record) -> Record {
    let mut out = base.clone();
    for (key, value) in over.iter() {
        out.insert(key, value.clone());
    }
    out
}

/// Like [`spread`], for values that must both be records.
pub fn spread_value(base: &Value, over: &Value) -> Result<Record> {
    let base = base
        .as_record()
        .ok_or_else(|| RecordError::invalid("base", "a record", base.kind()))?;
    let over = over
        .as_record()
        .ok_or_else(|| RecordError::invalid("over", "a record", over.kind()))?;
    Ok(spread(base, over))
}

/// Put an `id` field in front of `record`'s fields. An `id` already in the
/// record wins over the given default.
pub fn add_id(record: &Record, id: impl Into<Value>) -> Record {
    let mut base = Record::with_capacity(record.len() + 1);
    base.insert("id", id);
    spread(&base, record)
}
