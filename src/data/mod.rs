/// Data layer: core types, loading, and per-module chart planning.
///
/// Architecture:
/// ```text
///  .csv / .xls / .xlsx
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TableData
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ TableData │  rows × named columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  schema   │  check column contract → ChartPlan (or warning)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod schema;
