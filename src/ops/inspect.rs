use crate::data::model::Record;
use crate::error::{RecordError, Result};

/// Keys of `record` in iteration order.
pub fn object_keys(record: &Record) -> Vec<&str> {
    record.keys().collect()
}

/// Find the key holding the largest numeric value.
///
/// Every value must be numeric. On a tie the earlier key wins. `NaN`
/// values are skipped, so an empty or all-`NaN` record returns `None`.
pub fn key_with_highest_value(record: &Record) -> Result<Option<(String, f64)>> {
    let mut best: Option<(&str, f64)> = None;

    for (key, val) in record.iter() {
        let num = val.as_f64().ok_or_else(|| RecordError::NotNumeric {
            key: key.to_string(),
        })?;
        if num.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, highest)| num > highest) {
            best = Some((key, num));
        }
    }

    Ok(best.map(|(key, num)| (key.to_string(), num)))
}
