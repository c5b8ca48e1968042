use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

/// Per-serving nutrition facts for one catalog food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodInfo {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Static food table, loaded once at startup and read-only thereafter.
pub struct FoodCatalog {
    foods: BTreeMap<String, FoodInfo>,
}

impl FoodCatalog {
    /// The built-in chart used when no menu file is present.
    #[must_use]
    pub fn builtin() -> Self {
        let chart: &[(&str, f64, f64, f64, f64)] = &[
            // name, calories, protein, fat, carbs
            ("Oatmeal", 250.0, 5.0, 4.0, 45.0),
            ("Banana", 100.0, 1.0, 0.3, 27.0),
            ("Apple", 95.0, 0.5, 0.3, 25.0),
            ("Chicken Breast", 165.0, 31.0, 3.6, 0.0),
            ("Salad", 150.0, 3.0, 10.0, 10.0),
            ("Rice (1 cup)", 200.0, 4.0, 0.5, 45.0),
            ("Egg", 78.0, 6.0, 5.0, 0.6),
            ("Bread Slice", 70.0, 3.0, 1.0, 13.0),
            ("Milk (1 cup)", 120.0, 8.0, 5.0, 12.0),
            ("Yogurt", 100.0, 5.0, 2.0, 12.0),
        ];
        let foods = chart
            .iter()
            .map(|&(name, calories, protein_g, fat_g, carbs_g)| {
                (
                    name.to_string(),
                    FoodInfo {
                        calories,
                        protein_g,
                        fat_g,
                        carbs_g,
                    },
                )
            })
            .collect();
        FoodCatalog { foods }
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open menu file: {}", path.display()))?;
        Self::from_csv(file)
            .with_context(|| format!("Failed to parse menu file: {}", path.display()))
    }

    /// Parse a menu table from any reader.
    ///
    /// Expected header: `Food,Calories_kcal,Protein_g,Fat_g,Carbs_g`
    /// (case-insensitive). Blank rows are skipped; a duplicated food name keeps
    /// the last row.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().context("Failed to read CSV headers")?.clone();

        let col =
            |name: &str| -> Option<usize> { headers.iter().position(|h| h.eq_ignore_ascii_case(name)) };

        let idx_food = col("Food").context("Missing 'Food' column")?;
        let idx_cal = col("Calories_kcal").context("Missing 'Calories_kcal' column")?;
        let idx_protein = col("Protein_g").context("Missing 'Protein_g' column")?;
        let idx_fat = col("Fat_g").context("Missing 'Fat_g' column")?;
        let idx_carbs = col("Carbs_g").context("Missing 'Carbs_g' column")?;

        let mut foods = BTreeMap::new();

        for (line_num, result) in rdr.records().enumerate() {
            let record =
                result.with_context(|| format!("Failed to parse CSV row {}", line_num + 2))?;

            let name = record.get(idx_food).unwrap_or("").trim().to_string();
            if name.is_empty() {
                continue;
            }

            let parse_f64 = |idx: usize| -> f64 {
                record
                    .get(idx)
                    .and_then(|v| v.trim().parse::<f64>().ok())
                    .unwrap_or(0.0)
            };

            foods.insert(
                name,
                FoodInfo {
                    calories: parse_f64(idx_cal),
                    protein_g: parse_f64(idx_protein),
                    fat_g: parse_f64(idx_fat),
                    carbs_g: parse_f64(idx_carbs),
                },
            );
        }

        if foods.is_empty() {
            bail!("Menu table contains no foods");
        }

        Ok(FoodCatalog { foods })
    }

    /// Look up a food by name, exact match first, then case-insensitive.
    /// Returns the canonical name alongside its facts.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<(&str, &FoodInfo)> {
        if let Some((k, v)) = self.foods.get_key_value(name) {
            return Some((k.as_str(), v));
        }
        self.foods
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FoodInfo)> {
        self.foods.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
