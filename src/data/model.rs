use std::fmt;

// ---------------------------------------------------------------------------
// Minutes – a numeric cell that may be missing
// ---------------------------------------------------------------------------

/// A preparation or cooking time in minutes.
///
/// The source data leaves some time cells blank. The legacy pipeline filled
/// those with the empty string, mixing types inside a numeric column; here
/// the column stays numeric and a missing cell is explicit. `Display` still
/// renders `Missing` as the empty string, so rendered output is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Minutes {
    Value(i64),
    Missing,
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Minutes::Value(m) => write!(f, "{m}"),
            Minutes::Missing => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// FoodRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single food record (one row of the source table).
///
/// Text fields hold the original cell value, with missing entries loaded as
/// the empty string so filtering never has to reason about absent values.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRecord {
    /// Dish name, e.g. "Curd Rice".
    pub name: String,
    /// Comma-separated ingredient list, e.g. "rice, curd, curry leaves".
    pub ingredients: String,
    /// "vegetarian" / "non vegetarian".
    pub diet: String,
    /// e.g. "sweet", "spicy".
    pub flavor_profile: String,
    /// e.g. "main course", "dessert", "snack".
    pub course: String,
    /// State of origin, e.g. "Punjab".
    pub state: String,
    /// Coarse region, e.g. "North", "South East".
    pub region: String,
    pub prep_time: Minutes,
    pub cook_time: Minutes,
}

// ---------------------------------------------------------------------------
// FoodDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, in source order.
///
/// Built once at startup and never mutated afterwards; request handlers
/// share it read-only behind an `Arc`, so no locking is needed.
#[derive(Debug, Clone, Default)]
pub struct FoodDataset {
    /// All food records (rows).
    pub records: Vec<FoodRecord>,
}

impl FoodDataset {
    pub fn new(records: Vec<FoodRecord>) -> Self {
        FoodDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
