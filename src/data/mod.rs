/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  indian_food.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → FoodDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ FoodDataset   │  Vec<FoodRecord>, frozen after load
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply query predicates → recommendations
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
