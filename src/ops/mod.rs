//! Record operations. Each one is a pure function: inputs are borrowed,
//! outputs are freshly built, nothing is retained between calls.
//!
//! ```text
//!   remove   Record, keys        → Record
//!   group    [Record], field     → Groups (value → [Record])
//!   merge    Record, patch       → Record
//!   lookup   record, key         → value (typed by the key)
//!   inspect  Record              → keys / key with highest value
//!   display  Subject             → DisplayName
//!   spread   Record, Record      → Record (shallow, later wins)
//! ```

pub mod display;
pub mod group;
pub mod inspect;
pub mod lookup;
pub mod merge;
pub mod remove;
pub mod spread;

pub use display::{display_name, DisplayName, Subject};
pub use group::{group_by, group_by_value, Groups};
pub use inspect::{key_with_highest_value, object_keys};
pub use lookup::{get_deep_value, get_value, get_value_dyn, FieldKey};
pub use merge::{deep_merge, deep_merge_value, merge_partial};
pub use remove::{remove_keys, remove_keys_value, KeyRemover};
pub use spread::{add_id, spread, spread_value};
