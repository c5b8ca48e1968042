use anyhow::{Result, bail};

use crate::models::{ActivityLevel, DailyTargets, Mode, Sex};

/// Body metrics supplied when setting daily requirements.
///
/// Height, age, and sex are required in adult mode and ignored in toddler mode.
#[derive(Debug, Clone)]
pub struct BodyProfile {
    pub mode: Mode,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub age_years: Option<f64>,
    pub sex: Option<Sex>,
    pub activity: ActivityLevel,
}

// Grams of macro per kg of body weight, and ml of water per kg.
const ADULT_PROTEIN_PER_KG: f64 = 1.6;
const ADULT_FAT_PER_KG: f64 = 0.9;
const TODDLER_PROTEIN_PER_KG: f64 = 1.2;
const TODDLER_FAT_PER_KG: f64 = 0.8;
const WATER_ML_PER_KG: f64 = 30.0;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Mifflin-St Jeor resting energy expenditure in kcal/day.
#[must_use]
pub fn mifflin_st_jeor_bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn require_positive(value: Option<f64>, name: &str) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => bail!("{name} must be a positive number (got {v})"),
        None => bail!("{name} is required in adult mode"),
    }
}

/// Derive daily targets from a body profile.
///
/// Adult calories are Mifflin-St Jeor BMR scaled by the activity multiplier;
/// toddler calories are weight times a per-activity constant. Protein, fat, and
/// water scale linearly with weight; carbs are the energy remainder after
/// protein and fat, floored at zero. All outputs are rounded to 2 decimals.
pub fn calculate_requirements(profile: &BodyProfile) -> Result<DailyTargets> {
    let weight = profile.weight_kg;
    if !weight.is_finite() || weight <= 0.0 {
        bail!("Weight must be a positive number of kg (got {weight})");
    }

    let (calories, protein_g, fat_g) = match profile.mode {
        Mode::Adult => {
            let height = require_positive(profile.height_cm, "Height")?;
            let age = require_positive(profile.age_years, "Age")?;
            let Some(sex) = profile.sex else {
                bail!("Sex is required in adult mode");
            };
            let bmr = mifflin_st_jeor_bmr(weight, height, age, sex);
            (
                bmr * profile.activity.multiplier(),
                weight * ADULT_PROTEIN_PER_KG,
                weight * ADULT_FAT_PER_KG,
            )
        }
        Mode::Toddler => (
            weight * profile.activity.toddler_kcal_per_kg(),
            weight * TODDLER_PROTEIN_PER_KG,
            weight * TODDLER_FAT_PER_KG,
        ),
    };

    let macro_kcal = protein_g * KCAL_PER_G_PROTEIN + fat_g * KCAL_PER_G_FAT;
    let carbs_g = ((calories - macro_kcal) / KCAL_PER_G_CARBS).max(0.0);
    let water_ml = weight * WATER_ML_PER_KG;

    Ok(DailyTargets {
        calories: round2(calories),
        protein_g: round2(protein_g),
        fat_g: round2(fat_g),
        carbs_g: round2(carbs_g),
        water_ml: round2(water_ml),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toddler(weight_kg: f64, activity: ActivityLevel) -> BodyProfile {
        BodyProfile {
            mode: Mode::Toddler,
            weight_kg,
            height_cm: None,
            age_years: None,
            sex: None,
            activity,
        }
    }

    fn adult(
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
        sex: Sex,
        activity: ActivityLevel,
    ) -> BodyProfile {
        BodyProfile {
            mode: Mode::Adult,
            weight_kg,
            height_cm: Some(height_cm),
            age_years: Some(age_years),
            sex: Some(sex),
            activity,
        }
    }

    #[test]
    fn test_bmr_male_vs_female() {
        let male = mifflin_st_jeor_bmr(70.0, 175.0, 30.0, Sex::Male);
        let female = mifflin_st_jeor_bmr(70.0, 175.0, 30.0, Sex::Female);
        // 700 + 1093.75 - 150 = 1643.75, then +5 / -161
        assert!((male - 1648.75).abs() < 0.01);
        assert!((female - 1482.75).abs() < 0.01);
        assert!((male - female - 166.0).abs() < 0.01);
    }

    #[test]
    fn test_toddler_ten_kg_medium() {
        let targets = calculate_requirements(&toddler(10.0, ActivityLevel::Medium)).unwrap();
        assert!((targets.calories - 320.0).abs() < 0.01);
        assert!((targets.protein_g - 12.0).abs() < 0.01);
        assert!((targets.fat_g - 8.0).abs() < 0.01);
        // (320 - (12*4 + 8*9)) / 4 = 50
        assert!((targets.carbs_g - 50.0).abs() < 0.01);
        assert!((targets.water_ml - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_toddler_activity_constants() {
        let low = calculate_requirements(&toddler(10.0, ActivityLevel::Low)).unwrap();
        let high = calculate_requirements(&toddler(10.0, ActivityLevel::High)).unwrap();
        assert!((low.calories - 280.0).abs() < 0.01);
        assert!((high.calories - 360.0).abs() < 0.01);
    }

    #[test]
    fn test_adult_tdee_scales_with_activity() {
        let low = calculate_requirements(&adult(
            70.0,
            175.0,
            30.0,
            Sex::Male,
            ActivityLevel::Low,
        ))
        .unwrap();
        let high = calculate_requirements(&adult(
            70.0,
            175.0,
            30.0,
            Sex::Male,
            ActivityLevel::High,
        ))
        .unwrap();
        // BMR 1648.75 scaled by 1.2 and 1.75
        assert!((low.calories - 1978.5).abs() < 0.01);
        assert!((high.calories - 2885.31).abs() < 0.01);
        assert!((low.protein_g - 112.0).abs() < 0.01);
        assert!((low.fat_g - 63.0).abs() < 0.01);
        assert!((low.water_ml - 2100.0).abs() < 0.01);
    }

    #[test]
    fn test_carbs_remainder_property() {
        let targets = calculate_requirements(&adult(
            70.0,
            175.0,
            30.0,
            Sex::Female,
            ActivityLevel::Medium,
        ))
        .unwrap();
        let expected =
            ((targets.calories - (targets.protein_g * 4.0 + targets.fat_g * 9.0)) / 4.0).max(0.0);
        assert!((targets.carbs_g - expected).abs() < 0.01);
        assert!(targets.carbs_g >= 0.0);
    }

    #[test]
    fn test_carbs_floored_at_zero() {
        // Heavy, short, old, sedentary: macro calories exceed the TDEE
        let targets = calculate_requirements(&adult(
            120.0,
            140.0,
            95.0,
            Sex::Female,
            ActivityLevel::Low,
        ))
        .unwrap();
        assert!((targets.carbs_g - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let targets = calculate_requirements(&adult(
            72.3,
            178.4,
            41.0,
            Sex::Male,
            ActivityLevel::Medium,
        ))
        .unwrap();
        for v in [
            targets.calories,
            targets.protein_g,
            targets.fat_g,
            targets.carbs_g,
            targets.water_ml,
        ] {
            assert!(((v * 100.0).round() / 100.0 - v).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_rejects_bad_weight() {
        assert!(calculate_requirements(&toddler(0.0, ActivityLevel::Low)).is_err());
        assert!(calculate_requirements(&toddler(-5.0, ActivityLevel::Low)).is_err());
        assert!(calculate_requirements(&toddler(f64::NAN, ActivityLevel::Low)).is_err());
    }

    #[test]
    fn test_adult_requires_height_age_sex() {
        let mut profile = adult(70.0, 175.0, 30.0, Sex::Male, ActivityLevel::Low);
        profile.height_cm = None;
        assert!(calculate_requirements(&profile).is_err());

        let mut profile = adult(70.0, 175.0, 30.0, Sex::Male, ActivityLevel::Low);
        profile.age_years = None;
        assert!(calculate_requirements(&profile).is_err());

        let mut profile = adult(70.0, 175.0, 30.0, Sex::Male, ActivityLevel::Low);
        profile.sex = None;
        assert!(calculate_requirements(&profile).is_err());
    }

    #[test]
    fn test_adult_rejects_nonpositive_height() {
        let profile = adult(70.0, 0.0, 30.0, Sex::Male, ActivityLevel::Low);
        assert!(calculate_requirements(&profile).is_err());
    }

    #[test]
    fn test_toddler_ignores_adult_fields() {
        let profile = BodyProfile {
            mode: Mode::Toddler,
            weight_kg: 12.0,
            height_cm: None,
            age_years: None,
            sex: None,
            activity: ActivityLevel::Low,
        };
        assert!(calculate_requirements(&profile).is_ok());
    }
}
