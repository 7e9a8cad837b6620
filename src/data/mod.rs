/// Data layer: core types, loading, selection and series derivation.
///
/// Architecture:
/// ```text
///  us-states.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header-first rows → RawRow → StateRecord
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  case-insensitive region selection on raw rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  group    │  region → records, first-seen order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  delta    │  cumulative → per-day, cutoff applied
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  sort by date, name → Vec<NamedSeries>
///   └──────────┘
/// ```

pub mod delta;
pub mod filter;
pub mod group;
pub mod loader;
pub mod model;
pub mod series;
