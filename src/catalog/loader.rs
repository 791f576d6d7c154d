use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::models::{split_tags, DietType, FoodItem, MealCategory};

/// Columns the dataset must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Food Name",
    "Category",
    "Veg/Non-Veg",
    "Tags",
    "Calories (kcal)",
    "Protein (g)",
    "Carbs (g)",
    "Fat (g)",
];

/// One CSV row as written in the dataset.
#[derive(Debug, Deserialize)]
struct FoodRecord {
    #[serde(rename = "Food Name")]
    name: String,

    #[serde(rename = "Category")]
    category: String,

    #[serde(rename = "Veg/Non-Veg")]
    diet: String,

    #[serde(rename = "Tags", default)]
    tags: String,

    #[serde(rename = "Calories (kcal)")]
    calories: f64,

    #[serde(rename = "Protein (g)")]
    protein: f64,

    #[serde(rename = "Carbs (g)")]
    carbs: f64,

    #[serde(rename = "Fat (g)")]
    fat: f64,
}

impl FoodRecord {
    fn into_food(self, row: usize) -> Result<FoodItem> {
        let invalid = |reason: String| PlannerError::InvalidRecord { row, reason };

        let category: MealCategory = self.category.parse().map_err(invalid)?;
        let diet: DietType = self.diet.parse().map_err(invalid)?;

        let food = FoodItem {
            name: self.name.trim().to_string(),
            category,
            diet,
            tags: split_tags(&self.tags),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        };

        if !food.is_valid() {
            return Err(invalid(format!(
                "nutrient values for '{}' must be non-negative numbers",
                food.name
            )));
        }

        Ok(food)
    }
}

/// Load the food catalog from a CSV file.
///
/// Fails on a missing file, a missing column, or any bad row; no partial
/// catalog is returned.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = read_catalog(file)?;

    info!(path = %path.display(), items = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

/// Parse a catalog from any CSV source.
pub fn read_catalog<R: Read>(source: R) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(source);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(PlannerError::MissingColumn(missing.to_string()));
    }

    let mut items = Vec::new();
    for (idx, record) in reader.deserialize::<FoodRecord>().enumerate() {
        let row = idx + 1;
        items.push(record?.into_food(row)?);
    }

    if items.is_empty() {
        return Err(PlannerError::EmptyCatalog);
    }

    debug!(rows = items.len(), "parsed catalog rows");
    Ok(Catalog::new(items))
}
