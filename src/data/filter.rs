use super::model::{FoodDataset, FoodRecord, Minutes};

/// Name carried by the sentinel row returned when nothing matched.
pub const NO_RECIPES_FOUND: &str = "No recipes found.";

// ---------------------------------------------------------------------------
// Query – raw, optional filter criteria for one request
// ---------------------------------------------------------------------------

/// The raw filter criteria from one form submission.
///
/// Every field is optional; an absent or empty field places no constraint.
/// Nothing here is validated — malformed input simply matches nothing.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Comma-separated list of required ingredients.
    pub ingredients: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub diet: Option<String>,
    pub flavor_profile: Option<String>,
    pub course: Option<String>,
}

/// The normalized form of a [`Query`], computed once per request.
///
/// `ingredients` is the lower-cased, trimmed token list (empty = no
/// constraint); the scalar fields are lower-cased and trimmed, with `None`
/// meaning unset. A field that trims to the empty string becomes `None`.
#[derive(Debug)]
struct Criteria {
    ingredients: Vec<String>,
    state: Option<String>,
    region: Option<String>,
    diet: Option<String>,
    flavor_profile: Option<String>,
    course: Option<String>,
}

impl Criteria {
    fn from_query(query: &Query) -> Self {
        Criteria {
            ingredients: query
                .ingredients
                .as_deref()
                .filter(|raw| !raw.is_empty())
                .map(|raw| raw.split(',').map(normalize_token).collect())
                .unwrap_or_default(),
            state: normalize_field(query.state.as_deref()),
            region: normalize_field(query.region.as_deref()),
            diet: normalize_field(query.diet.as_deref()),
            flavor_profile: normalize_field(query.flavor_profile.as_deref()),
            course: normalize_field(query.course.as_deref()),
        }
    }

    /// Conjunction of all six predicates. State and region are independent
    /// constraints: a row must satisfy both when both are supplied.
    fn matches(&self, record: &FoodRecord) -> bool {
        self.ingredients_match(record)
            && contains(&record.state, self.state.as_deref())
            && contains(&record.region, self.region.as_deref())
            && contains(&record.diet, self.diet.as_deref())
            && contains(&record.flavor_profile, self.flavor_profile.as_deref())
            && contains(&record.course, self.course.as_deref())
    }

    /// Every required ingredient token must equal (not merely be contained
    /// in) some token of the row's ingredient list; vacuously true when the
    /// query supplied no ingredients.
    fn ingredients_match(&self, record: &FoodRecord) -> bool {
        if self.ingredients.is_empty() {
            return true;
        }
        let row_tokens: Vec<String> =
            record.ingredients.split(',').map(normalize_token).collect();
        self.ingredients
            .iter()
            .all(|needed| row_tokens.iter().any(|token| token == needed))
    }
}

fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

fn normalize_field(field: Option<&str>) -> Option<String> {
    field
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// Case-insensitive substring containment. The row side is lower-cased but
/// never trimmed; only the query side was trimmed during normalization.
/// `None` means no constraint.
fn contains(row_field: &str, wanted: Option<&str>) -> bool {
    match wanted {
        Some(needle) => row_field.to_lowercase().contains(needle),
        None => true,
    }
}

// ---------------------------------------------------------------------------
// Recommendation – the projection rendered back to the user
// ---------------------------------------------------------------------------

/// A matching row projected to its display fields, holding the original
/// (non-normalized) values.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub prep_time: Minutes,
    pub cook_time: Minutes,
    pub diet: String,
    pub flavor_profile: String,
    pub course: String,
    pub state: String,
    pub region: String,
}

impl Recommendation {
    fn project(record: &FoodRecord) -> Self {
        Recommendation {
            name: record.name.clone(),
            prep_time: record.prep_time,
            cook_time: record.cook_time,
            diet: record.diet.clone(),
            flavor_profile: record.flavor_profile.clone(),
            course: record.course.clone(),
            state: record.state.clone(),
            region: record.region.clone(),
        }
    }

    /// The placeholder row returned in place of an empty result set. Only
    /// `name` carries a message; every other field is empty.
    pub fn no_matches() -> Self {
        Recommendation {
            name: NO_RECIPES_FOUND.to_string(),
            prep_time: Minutes::Missing,
            cook_time: Minutes::Missing,
            diet: String::new(),
            flavor_profile: String::new(),
            course: String::new(),
            state: String::new(),
            region: String::new(),
        }
    }

    /// Whether this is the "no recipes found" placeholder rather than a
    /// real match. Callers must check this instead of testing for an empty
    /// result vector, which `recommend` never returns.
    pub fn is_sentinel(&self) -> bool {
        self.name == NO_RECIPES_FOUND && self.state.is_empty()
    }
}

// ---------------------------------------------------------------------------
// recommend – the linear scan
// ---------------------------------------------------------------------------

/// Scan every record in dataset order and return those satisfying all
/// supplied criteria, projected for display.
///
/// Results keep dataset order; there is no ranking, deduplication or limit.
/// When nothing matches (including against an empty dataset) the result is
/// the single [`Recommendation::no_matches`] sentinel, never an empty
/// vector.
pub fn recommend(dataset: &FoodDataset, query: &Query) -> Vec<Recommendation> {
    let criteria = Criteria::from_query(query);

    let matches: Vec<Recommendation> = dataset
        .records
        .iter()
        .filter(|record| criteria.matches(record))
        .map(Recommendation::project)
        .collect();

    if matches.is_empty() {
        vec![Recommendation::no_matches()]
    } else {
        matches
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        name: &str,
        ingredients: &str,
        diet: &str,
        flavor_profile: &str,
        course: &str,
        state: &str,
        region: &str,
    ) -> FoodRecord {
        FoodRecord {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            diet: diet.to_string(),
            flavor_profile: flavor_profile.to_string(),
            course: course.to_string(),
            state: state.to_string(),
            region: region.to_string(),
            prep_time: Minutes::Value(10),
            cook_time: Minutes::Value(20),
        }
    }

    fn sample_dataset() -> FoodDataset {
        FoodDataset::new(vec![
            record(
                "Curd Rice",
                "rice, curd, curry leaves",
                "vegetarian",
                "sour",
                "main course",
                "Tamil Nadu",
                "South",
            ),
            record(
                "Butter Chicken",
                "chicken, butter, tomato, cream",
                "non vegetarian",
                "spicy",
                "main course",
                "Punjab",
                "North",
            ),
            record(
                "Jalebi",
                "maida, sugar, ghee",
                "vegetarian",
                "sweet",
                "dessert",
                "Uttar Pradesh",
                "North",
            ),
            record(
                "Biryani",
                "basmati rice, chicken, saffron",
                "non vegetarian",
                "spicy",
                "main course",
                "Telangana",
                "South",
            ),
        ])
    }

    fn names(results: &[Recommendation]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_whole_dataset_in_order() {
        let dataset = sample_dataset();
        let results = recommend(&dataset, &Query::default());
        assert_eq!(
            names(&results),
            vec!["Curd Rice", "Butter Chicken", "Jalebi", "Biryani"]
        );
    }

    #[test]
    fn empty_string_fields_place_no_constraint() {
        let dataset = sample_dataset();
        let query = Query {
            ingredients: Some(String::new()),
            state: Some(String::new()),
            diet: Some("   ".to_string()),
            ..Query::default()
        };
        assert_eq!(recommend(&dataset, &query).len(), dataset.len());
    }

    #[test]
    fn ingredient_tokens_are_lowered_and_trimmed() {
        let dataset = sample_dataset();
        let query = Query {
            ingredients: Some("Rice , CURD".to_string()),
            ..Query::default()
        };
        assert_eq!(names(&recommend(&dataset, &query)), vec!["Curd Rice"]);
    }

    #[test]
    fn ingredient_match_is_exact_token_not_substring() {
        let dataset = sample_dataset();
        // "rice" is a full token of Curd Rice but only a fragment of
        // Biryani's "basmati rice" token.
        let query = Query {
            ingredients: Some("rice".to_string()),
            ..Query::default()
        };
        assert_eq!(names(&recommend(&dataset, &query)), vec!["Curd Rice"]);
    }

    #[test]
    fn all_required_ingredients_must_be_present() {
        let dataset = sample_dataset();
        let query = Query {
            ingredients: Some("rice, curd, saffron".to_string()),
            ..Query::default()
        };
        assert!(recommend(&dataset, &query)[0].is_sentinel());
    }

    #[test]
    fn field_match_is_substring_after_lowercasing() {
        let dataset = sample_dataset();
        // Quirk preserved from the original: "veg" is a substring of both
        // "vegetarian" and "non vegetarian", so it matches everything.
        let query = Query {
            diet: Some("veg".to_string()),
            ..Query::default()
        };
        assert_eq!(recommend(&dataset, &query).len(), dataset.len());

        let query = Query {
            diet: Some("non veg".to_string()),
            ..Query::default()
        };
        assert_eq!(
            names(&recommend(&dataset, &query)),
            vec!["Butter Chicken", "Biryani"]
        );
    }

    #[test]
    fn state_match_is_case_insensitive() {
        let dataset = sample_dataset();
        let query = Query {
            state: Some("punjab".to_string()),
            ..Query::default()
        };
        assert_eq!(names(&recommend(&dataset, &query)), vec!["Butter Chicken"]);
    }

    #[test]
    fn state_and_region_are_independent_conjuncts() {
        let dataset = sample_dataset();
        // Punjab is in the North; requiring region South as well must
        // eliminate it.
        let query = Query {
            state: Some("punjab".to_string()),
            region: Some("south".to_string()),
            ..Query::default()
        };
        assert!(recommend(&dataset, &query)[0].is_sentinel());
    }

    #[test]
    fn conjunction_across_ingredients_and_diet() {
        let dataset = sample_dataset();
        let query = Query {
            ingredients: Some("rice, curd".to_string()),
            diet: Some("vegetarian".to_string()),
            ..Query::default()
        };
        assert_eq!(names(&recommend(&dataset, &query)), vec!["Curd Rice"]);
    }

    #[test]
    fn no_match_yields_single_sentinel() {
        let dataset = sample_dataset();
        let query = Query {
            state: Some("xyz123".to_string()),
            ..Query::default()
        };
        let results = recommend(&dataset, &query);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_sentinel());
        assert_eq!(results[0].name, NO_RECIPES_FOUND);
    }

    #[test]
    fn empty_dataset_yields_sentinel_for_any_query() {
        let dataset = FoodDataset::default();
        assert!(recommend(&dataset, &Query::default())[0].is_sentinel());

        let query = Query {
            course: Some("dessert".to_string()),
            ..Query::default()
        };
        assert!(recommend(&dataset, &query)[0].is_sentinel());
    }

    #[test]
    fn projection_keeps_original_casing() {
        let dataset = sample_dataset();
        let query = Query {
            state: Some("tamil".to_string()),
            ..Query::default()
        };
        let results = recommend(&dataset, &query);
        assert_eq!(results[0].state, "Tamil Nadu");
        assert_eq!(results[0].name, "Curd Rice");
        assert_eq!(results[0].prep_time, Minutes::Value(10));
    }

    #[test]
    fn recommend_is_idempotent_and_order_stable() {
        let dataset = sample_dataset();
        let query = Query {
            course: Some("main".to_string()),
            ..Query::default()
        };
        let first = recommend(&dataset, &query);
        let second = recommend(&dataset, &query);
        assert_eq!(first, second);
        assert_eq!(
            names(&first),
            vec!["Curd Rice", "Butter Chicken", "Biryani"]
        );
    }

    #[test]
    fn trailing_comma_requires_an_empty_row_token() {
        let mut dataset = sample_dataset();
        // A query like "rice," produces an empty required token, which only
        // a row whose own list has an empty token can satisfy.
        let query = Query {
            ingredients: Some("rice,".to_string()),
            ..Query::default()
        };
        assert!(recommend(&dataset, &query)[0].is_sentinel());

        dataset.records.push(record(
            "Odd Row",
            "rice,",
            "vegetarian",
            "",
            "snack",
            "Goa",
            "West",
        ));
        assert_eq!(names(&recommend(&dataset, &query)), vec!["Odd Row"]);
    }
}
