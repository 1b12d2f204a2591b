/// Data layer: synthetic generation, caching, filtering and statistics.
///
/// Architecture:
/// ```text
///   ReferenceTables + GeneratorConfig
///        │
///        ▼
///   ┌───────────┐
///   │ generator  │  index-driven records + seasonal/noise price model
///   └───────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ DatasetCache  │  generate once, lend &Dataset afterwards
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌──────────┐
///   │  filter   │ ──▶ │ summary   │  mean / min / max / latest
///   └──────────┘     └──────────┘
/// ```

pub mod cache;
pub mod error;
pub mod export;
pub mod filter;
pub mod generator;
pub mod model;
pub mod summary;

pub use cache::{CompanySelection, DatasetCache};
pub use error::DataError;
pub use model::{ActivityType, Dataset, ObservationRecord};
pub use summary::{summarize, PriceSummary};
