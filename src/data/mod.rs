/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  firm_codes.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → FirmDataset (re-read on every search)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ FirmDataset  │  Vec<FirmRecord>, file order
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply Query → matching records, order kept
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
