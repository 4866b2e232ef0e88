//! Key-based lookup.
//!
//! Two flavours:
//!
//! * **Typed** – each field of a struct gets a zero-sized key type that
//!   implements [`FieldKey`]. [`get_value`] returns `&K::Value`, so the
//!   result type is fixed by the key named at the call site instead of
//!   being a union over every field type.
//! * **Dynamic** – [`get_value_dyn`] and [`get_deep_value`] on [`Value`]s,
//!   where a missing key is simply `None`.

use crate::data::model::Value;
use crate::error::{RecordError, Result};

/// A key into records of type `R` whose value has type `Self::Value`.
pub trait FieldKey<R> {
    type Value;

    /// Field name as it appears in the record.
    const NAME: &'static str;

    fn get(self, record: &R) -> &Self::Value;
}

/// Read the field named by `key`; the return type follows the key.
pub fn get_value<R, K: FieldKey<R>>(record: &R, key: K) -> &K::Value {
    key.get(record)
}

/// Declare a struct together with one [`FieldKey`] marker per field.
///
/// ```
/// use rusty_records::keyed_record;
/// use rusty_records::ops::lookup::get_value;
///
/// keyed_record! {
///     #[derive(Debug)]
///     pub struct Sample in sample_key {
///         pub a: i64,
///         pub b: String,
///     }
/// }
///
/// let s = Sample { a: 1, b: "string".into() };
/// let a: &i64 = get_value(&s, sample_key::a);
/// let b: &String = get_value(&s, sample_key::b);
/// assert_eq!((*a, b.as_str()), (1, "string"));
/// ```
#[macro_export]
macro_rules! keyed_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident in $keys:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $ty, )*
        }

        #[allow(non_camel_case_types)]
        $vis mod $keys {
            $(
                #[derive(Debug, Clone, Copy, PartialEq, Eq)]
                pub struct $field;
            )*
        }

        $(
            impl $crate::ops::lookup::FieldKey<$name> for $keys::$field {
                type Value = $ty;
                const NAME: &'static str = stringify!($field);

                fn get(self, record: &$name) -> &$ty {
                    &record.$field
                }
            }
        )*
    };
}

/// Look up `key` in a value that must be a record. A missing key is `None`.
pub fn get_value_dyn<'a>(value: &'a Value, key: &str) -> Result<Option<&'a Value>> {
    let record = value
        .as_record()
        .ok_or_else(|| RecordError::invalid("record", "a record", value.kind()))?;
    Ok(record.get(key))
}

/// Follow `path` through nested records.
///
/// The root must be a record. A missing key, or a non-record met midway,
/// ends the walk with `None`.
pub fn get_deep_value<'a, K: AsRef<str>>(value: &'a Value, path: &[K]) -> Result<Option<&'a Value>> {
    if value.as_record().is_none() {
        return Err(RecordError::invalid("record", "a record", value.kind()));
    }

    let mut current = value;
    for key in path {
        match current.as_record().and_then(|rec| rec.get(key.as_ref())) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    keyed_record! {
        #[derive(Debug, Clone)]
        struct Sample in sample_key {
            a: i64,
            b: String,
            c: bool,
        }
    }

    keyed_record! {
        struct Foo in foo_key {
            a: bool,
            b: i64,
        }
    }

    keyed_record! {
        struct Deep in deep_key {
            foo: Foo,
            bar: String,
        }
    }

    #[test]
    fn typed_lookup_returns_field_type() {
        let s = Sample {
            a: 1,
            b: "string".into(),
            c: true,
        };
        let a: &i64 = get_value(&s, sample_key::a);
        let b: &String = get_value(&s, sample_key::b);
        let c: &bool = get_value(&s, sample_key::c);
        assert_eq!(*a, 1);
        assert_eq!(b, "string");
        assert!(*c);
    }

    #[test]
    fn typed_lookup_sees_falsy_values() {
        let s = Sample {
            a: 0,
            b: String::new(),
            c: false,
        };
        assert_eq!(*get_value(&s, sample_key::a), 0);
        assert!(get_value(&s, sample_key::b).is_empty());
        assert!(!*get_value(&s, sample_key::c));
    }

    #[test]
    fn typed_lookups_compose_for_nested_fields() {
        let deep = Deep {
            foo: Foo { a: true, b: 1 },
            bar: "cool".into(),
        };
        let inner = get_value(&deep, deep_key::foo);
        assert!(*get_value(inner, foo_key::a));
        assert_eq!(*get_value(inner, foo_key::b), 1);
        assert_eq!(get_value(&deep, deep_key::bar), "cool");
    }

    #[test]
    fn key_names_match_fields() {
        assert_eq!(<sample_key::a as FieldKey<Sample>>::NAME, "a");
        assert_eq!(<deep_key::foo as FieldKey<Deep>>::NAME, "foo");
    }

    #[test]
    fn dynamic_lookup_matches_field_access() {
        let rec = record! { "a" => 1, "b" => "string", "c" => false, "d" => Value::Null };
        let value = Value::from(rec.clone());
        for (key, expected) in rec.iter() {
            assert_eq!(get_value_dyn(&value, key).unwrap(), Some(expected));
        }
        assert_eq!(get_value_dyn(&value, "missing").unwrap(), None);
        assert!(get_value_dyn(&Value::from(3), "a").is_err());
    }

    #[test]
    fn deep_lookup_walks_records() {
        let deep = Value::from(record! {
            "foo" => record! { "a" => true, "b" => 1 },
            "bar" => record! { "c" => "cool", "d" => 2 },
        });
        assert_eq!(get_deep_value(&deep, &["foo", "a"]).unwrap(), Some(&Value::Bool(true)));
        assert_eq!(get_deep_value(&deep, &["bar", "c"]).unwrap(), Some(&Value::from("cool")));
        assert_eq!(get_deep_value(&deep, &["foo", "zzz"]).unwrap(), None);
        assert_eq!(get_deep_value(&deep, &["foo", "a", "x"]).unwrap(), None);
        assert_eq!(get_deep_value::<&str>(&deep, &[]).unwrap(), Some(&deep));
        assert!(get_deep_value(&Value::Null, &["a"]).is_err());
    }
}
