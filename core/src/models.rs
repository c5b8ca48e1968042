use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Whose requirements a day is tracked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Toddler,
    Adult,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Toddler => write!(f, "Toddler"),
            Mode::Adult => write!(f, "Adult"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    /// TDEE multiplier applied to an adult's BMR.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Medium => 1.5,
            ActivityLevel::High => 1.75,
        }
    }

    /// Calories per kg of body weight for toddler mode, which skips the BMR step.
    #[must_use]
    pub fn toddler_kcal_per_kg(self) -> f64 {
        match self {
            ActivityLevel::Low => 28.0,
            ActivityLevel::Medium => 32.0,
            ActivityLevel::High => 36.0,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Low => write!(f, "Low"),
            ActivityLevel::Medium => write!(f, "Medium"),
            ActivityLevel::High => write!(f, "High"),
        }
    }
}

pub fn parse_mode(s: &str) -> Result<Mode> {
    match s.to_lowercase().as_str() {
        "toddler" => Ok(Mode::Toddler),
        "adult" => Ok(Mode::Adult),
        _ => bail!("Invalid mode '{s}'. Must be one of: toddler, adult"),
    }
}

pub fn parse_sex(s: &str) -> Result<Sex> {
    match s.to_lowercase().as_str() {
        "male" | "m" => Ok(Sex::Male),
        "female" | "f" => Ok(Sex::Female),
        _ => bail!("Invalid sex '{s}'. Must be one of: male, female"),
    }
}

pub fn parse_activity(s: &str) -> Result<ActivityLevel> {
    match s.to_lowercase().as_str() {
        "low" => Ok(ActivityLevel::Low),
        "medium" | "med" => Ok(ActivityLevel::Medium),
        "high" => Ok(ActivityLevel::High),
        _ => bail!("Invalid activity level '{s}'. Must be one of: low, medium, high"),
    }
}

/// Daily intake targets, derived once per "set requirements" action and
/// overwritten wholesale on recompute.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub water_ml: f64,
}

/// A single logged meal. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// RFC 3339 local timestamp of when the meal was logged.
    pub time: String,
    pub food: String,
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Everything tracked for one calendar day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<DailyTargets>,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(default)]
    pub water_ml: f64,
}

/// Macro totals folded from a day's meal list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DayTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl DayRecord {
    /// Recompute totals from the meal list. The list is the source of truth;
    /// totals are never cached.
    #[must_use]
    pub fn totals(&self) -> DayTotals {
        self.meals
            .iter()
            .fold(DayTotals::default(), |acc, m| DayTotals {
                calories: acc.calories + m.calories,
                protein_g: acc.protein_g + m.protein_g,
                fat_g: acc.fat_g + m.fat_g,
                carbs_g: acc.carbs_g + m.carbs_g,
            })
    }

    /// Empty the meal list and water total. Mode and targets are kept.
    pub fn clear(&mut self) {
        self.meals.clear();
        self.water_ml = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(calories: f64, protein_g: f64, fat_g: f64, carbs_g: f64) -> MealEntry {
        MealEntry {
            time: "2026-08-06T12:00:00+00:00".to_string(),
            food: "Test".to_string(),
            calories,
            protein_g,
            fat_g,
            carbs_g,
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("toddler").unwrap(), Mode::Toddler);
        assert_eq!(parse_mode("Adult").unwrap(), Mode::Adult);
        assert!(parse_mode("teen").is_err());
    }

    #[test]
    fn test_parse_sex() {
        assert_eq!(parse_sex("male").unwrap(), Sex::Male);
        assert_eq!(parse_sex("F").unwrap(), Sex::Female);
        assert!(parse_sex("x").is_err());
    }

    #[test]
    fn test_parse_activity() {
        assert_eq!(parse_activity("low").unwrap(), ActivityLevel::Low);
        assert_eq!(parse_activity("Med").unwrap(), ActivityLevel::Medium);
        assert_eq!(parse_activity("HIGH").unwrap(), ActivityLevel::High);
        assert!(parse_activity("extreme").is_err());
    }

    #[test]
    fn test_totals_empty_day() {
        let day = DayRecord::default();
        let totals = day.totals();
        assert!((totals.calories - 0.0).abs() < f64::EPSILON);
        assert!((totals.protein_g - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_totals_fold_over_meals() {
        let mut day = DayRecord::default();
        day.meals.push(entry(250.0, 5.0, 4.0, 45.0));
        day.meals.push(entry(100.0, 1.0, 0.3, 27.0));
        day.meals.push(entry(78.0, 6.0, 5.0, 0.6));

        let totals = day.totals();
        assert!((totals.calories - 428.0).abs() < 0.01);
        assert!((totals.protein_g - 12.0).abs() < 0.01);
        assert!((totals.fat_g - 9.3).abs() < 0.01);
        assert!((totals.carbs_g - 72.6).abs() < 0.01);

        // Fold property: totals equal the sum over entries, recomputed each call
        let sum: f64 = day.meals.iter().map(|m| m.calories).sum();
        assert!((totals.calories - sum).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear_keeps_mode_and_targets() {
        let mut day = DayRecord {
            mode: Mode::Adult,
            targets: Some(DailyTargets {
                calories: 2000.0,
                protein_g: 112.0,
                fat_g: 63.0,
                carbs_g: 246.25,
                water_ml: 2100.0,
            }),
            meals: vec![entry(250.0, 5.0, 4.0, 45.0)],
            water_ml: 500.0,
        };
        day.clear();
        assert!(day.meals.is_empty());
        assert!((day.water_ml - 0.0).abs() < f64::EPSILON);
        assert_eq!(day.mode, Mode::Adult);
        assert!(day.targets.is_some());
    }

    #[test]
    fn test_day_record_json_round_trip() {
        let day = DayRecord {
            mode: Mode::Toddler,
            targets: Some(DailyTargets {
                calories: 320.0,
                protein_g: 12.0,
                fat_g: 8.0,
                carbs_g: 50.0,
                water_ml: 300.0,
            }),
            meals: vec![entry(100.0, 1.0, 0.3, 27.0)],
            water_ml: 150.0,
        };
        let json = serde_json::to_string(&day).unwrap();
        let back: DayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
    }

    #[test]
    fn test_day_record_deserializes_sparse_json() {
        // Older files may carry only some fields
        let back: DayRecord = serde_json::from_str(r#"{"mode":"Adult"}"#).unwrap();
        assert_eq!(back.mode, Mode::Adult);
        assert!(back.targets.is_none());
        assert!(back.meals.is_empty());
        assert!((back.water_ml - 0.0).abs() < f64::EPSILON);

        let back: DayRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(back.mode, Mode::Toddler);
    }
}
