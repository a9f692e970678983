/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  bank-marketing .csv (';' delimited, latin-1)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, column index, unique values
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply criteria → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary / │  metrics, value counts, histogram, correlation
///   │   view    │  → ViewModel consumed by the UI
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
pub mod view;
