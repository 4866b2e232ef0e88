/// Data layer: the record model and where records come from.
///
/// Architecture:
/// ```text
///  .json / .csv / in-memory
///        │
///        ▼
///   ┌──────────────┐
///   │ RecordSource │  fetch → Vec<Record>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Record   │  ordered String → Value
///   └──────────┘
///        │
///        ▼
///   ops::{remove, group, merge, lookup, ...}
/// ```

pub mod loader;
pub mod model;

pub use loader::{FileSource, Post, RecordSource, StaticSource};
pub use model::{Record, Value};
