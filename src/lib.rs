//! Stateless utilities over dynamically typed records.
//!
//! * [`ops::remove_keys`] – drop a set of keys
//! * [`ops::group_by`] – bucket records by a field's literal value
//! * [`ops::deep_merge`] – apply a deep-partial override onto a base
//! * [`ops::get_value`] – field lookup whose result type follows the key
//!
//! Records come from a [`data::RecordSource`]; the operations never do I/O.

pub mod data;
pub mod error;
pub mod ops;

pub use data::{Record, Value};
pub use error::{RecordError, Result};
