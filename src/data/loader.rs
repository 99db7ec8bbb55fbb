use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{FoodDataset, FoodRecord, Minutes};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the food dataset from a CSV file.
///
/// Expected layout: a header row naming at least the nine projected columns
/// (`name`, `ingredients`, `diet`, `prep_time`, `cook_time`,
/// `flavor_profile`, `course`, `state`, `region`). Header names are trimmed
/// before matching; extra columns are ignored. Any failure here is fatal to
/// startup — there is no fallback dataset.
pub fn load_file(path: &Path) -> Result<FoodDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening dataset {}", path.display()))?;
    read_records(file).with_context(|| format!("loading dataset {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV text into a [`FoodDataset`].
///
/// Text cells load as-is, with missing entries becoming the empty string.
/// The two time columns stay numeric: a blank cell is [`Minutes::Missing`]
/// and a non-numeric cell is a load error rather than a silent coercion.
pub fn read_records<R: Read>(input: R) -> Result<FoodDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };

    let name_idx = column("name")?;
    let ingredients_idx = column("ingredients")?;
    let diet_idx = column("diet")?;
    let prep_time_idx = column("prep_time")?;
    let cook_time_idx = column("cook_time")?;
    let flavor_idx = column("flavor_profile")?;
    let course_idx = column("course")?;
    let state_idx = column("state")?;
    let region_idx = column("region")?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let text = |idx: usize| record.get(idx).unwrap_or("").to_string();

        records.push(FoodRecord {
            name: text(name_idx),
            ingredients: text(ingredients_idx),
            diet: text(diet_idx),
            flavor_profile: text(flavor_idx),
            course: text(course_idx),
            state: text(state_idx),
            region: text(region_idx),
            prep_time: parse_minutes(record.get(prep_time_idx), row_no, "prep_time")?,
            cook_time: parse_minutes(record.get(cook_time_idx), row_no, "cook_time")?,
        });
    }

    Ok(FoodDataset::new(records))
}

fn parse_minutes(cell: Option<&str>, row: usize, col: &str) -> Result<Minutes> {
    let cell = cell.unwrap_or("").trim();
    if cell.is_empty() {
        return Ok(Minutes::Missing);
    }
    cell.parse::<i64>()
        .map(Minutes::Value)
        .with_context(|| format!("Row {row}, {col}: '{cell}' is not a number"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
