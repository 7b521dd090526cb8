/// Data layer: record types, loading, and the shared filter/join helpers.
///
/// Architecture:
/// ```text
///  sample.json / bundle .json / dir of .json + .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file(s) → Datasets
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Datasets  │  Vec<Record> tables + KeyedTable<Record> tables
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  group-by, counting, keyed resolution
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
