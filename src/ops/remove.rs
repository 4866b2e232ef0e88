use std::collections::HashSet;

use crate::data::model::{Record, Value};
use crate::error::{RecordError, Result};

// ---------------------------------------------------------------------------
// KeyRemover – a reusable key set
// ---------------------------------------------------------------------------

/// A captured set of keys that can be stripped from any number of records.
///
/// Keys match exactly; duplicates in the input collapse into one entry.
#[derive(Debug, Clone, Default)]
pub struct KeyRemover {
    keys: HashSet<String>,
}

impl KeyRemover {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        KeyRemover {
            keys: keys.into_iter().map(|k| k.as_ref().to_string()).collect(),
        }
    }

    /// Return a new record holding every entry of `record` whose key is not
    /// in the set, in the original order. Keys absent from `record` are
    /// ignored.
    pub fn apply(&self, record: &Record) -> Record {
        record
            .iter()
            .filter(|(key, _)| !self.keys.contains(*key))
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }

    pub fn removes(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Remove `keys` from `record`, returning a fresh record.
pub fn remove_keys<I, K>(record: &Record, keys: I) -> Record
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let remover = KeyRemover::new(keys);
    let out = remover.apply(record);
    log::debug!("remove_keys: {} -> {} fields", record.len(), out.len());
    out
}

/// Like [`remove_keys`], but for a value that must turn out to be a record.
pub fn remove_keys_value<I, K>(value: &Value, keys: I) -> Result<Record>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let record = value
        .as_record()
        .ok_or_else(|| RecordError::invalid("record", "a record", value.kind()))?;
    Ok(remove_keys(record, keys))
}
