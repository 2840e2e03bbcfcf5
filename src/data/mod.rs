/// Data layer: core types and loading.
///
/// ```text
///  data.csv
///     │
///     ▼
///  ┌────────┐
///  │ loader  │  parse rows, coerce numeric fields
///  └────────┘
///     │
///     ▼
///  ┌──────────────┐
///  │ HealthDataset │  Vec<Record>, field extents
///  └──────────────┘
/// ```
pub mod loader;
pub mod model;
