use anyhow::{Context, Result};

const SAMPLE_PATH: &str = "indian_food.csv";

/// Column order matches the published indian_food dataset.
const HEADER: [&str; 9] = [
    "name",
    "ingredients",
    "diet",
    "prep_time",
    "cook_time",
    "flavor_profile",
    "course",
    "state",
    "region",
];

/// A small hand-picked slice of the dataset, covering both diets, all
/// courses, several regions, and a few blank cells (missing flavor, state,
/// and times) so the loader's missing-value handling gets exercised.
const ROWS: [[&str; 9]; 12] = [
    [
        "Curd Rice",
        "rice, curd, curry leaves, mustard seeds",
        "vegetarian",
        "10",
        "15",
        "sour",
        "main course",
        "Tamil Nadu",
        "South",
    ],
    [
        "Butter Chicken",
        "chicken, butter, tomato, cream, garam masala",
        "non vegetarian",
        "20",
        "40",
        "spicy",
        "main course",
        "Punjab",
        "North",
    ],
    [
        "Jalebi",
        "maida, sugar, ghee, saffron",
        "vegetarian",
        "10",
        "50",
        "sweet",
        "dessert",
        "Uttar Pradesh",
        "North",
    ],
    [
        "Biryani",
        "basmati rice, chicken, saffron, onion",
        "non vegetarian",
        "30",
        "60",
        "spicy",
        "main course",
        "Telangana",
        "South",
    ],
    [
        "Poha",
        "flattened rice, onion, mustard seeds, turmeric",
        "vegetarian",
        "5",
        "10",
        "spicy",
        "breakfast",
        "Madhya Pradesh",
        "Central",
    ],
    [
        "Rasgulla",
        "chhena, sugar",
        "vegetarian",
        "15",
        "30",
        "sweet",
        "dessert",
        "West Bengal",
        "East",
    ],
    [
        "Masala Dosa",
        "rice, urad dal, potato, onion",
        "vegetarian",
        "480",
        "30",
        "spicy",
        "breakfast",
        "Karnataka",
        "South",
    ],
    [
        "Rogan Josh",
        "mutton, yogurt, kashmiri chilli, fennel",
        "non vegetarian",
        "20",
        "90",
        "spicy",
        "main course",
        "Jammu & Kashmir",
        "North",
    ],
    [
        "Dhokla",
        "gram flour, yogurt, mustard seeds",
        "vegetarian",
        "15",
        "20",
        "",
        "snack",
        "Gujarat",
        "West",
    ],
    [
        "Vindaloo",
        "pork, vinegar, garlic, red chillies",
        "non vegetarian",
        "",
        "",
        "spicy",
        "main course",
        "Goa",
        "West",
    ],
    [
        "Sandesh",
        "chhena, sugar, cardamom",
        "vegetarian",
        "20",
        "20",
        "sweet",
        "dessert",
        "West Bengal",
        "East",
    ],
    [
        "Litti Chokha",
        "wheat flour, sattu, brinjal, tomato",
        "vegetarian",
        "30",
        "45",
        "spicy",
        "main course",
        "",
        "",
    ],
];

fn main() -> Result<()> {
    let mut writer =
        csv::Writer::from_path(SAMPLE_PATH).with_context(|| format!("creating {SAMPLE_PATH}"))?;

    writer.write_record(HEADER).context("writing header")?;
    for row in ROWS {
        writer.write_record(row).context("writing row")?;
    }
    writer.flush().context("flushing sample file")?;

    println!("Wrote {} sample records to {SAMPLE_PATH}", ROWS.len());
    Ok(())
}
