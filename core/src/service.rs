use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::models::{DailyTargets, DayRecord, DayTotals, MealEntry, Mode};
use crate::progress::{GoalProgress, crossed_goal};
use crate::requirements::{BodyProfile, calculate_requirements};
use crate::store::DayStore;

/// Goal crossings raised by a mutation, surfaced to the caller for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalEvent {
    CaloriesReached,
    WaterReached,
}

/// Day record plus everything derived from it for display.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<DailyTargets>,
    pub meals: Vec<MealEntry>,
    pub totals: DayTotals,
    pub water_ml: f64,
    pub calories: GoalProgress,
    pub water: GoalProgress,
}

/// The tracking session: store, catalog, and a fixed "today".
///
/// "Today" is the process start date; a CLI invocation is short-lived, so it is
/// not re-evaluated. Every mutation recomputes totals by folding the meal list
/// and rewrites the store in full.
pub struct Tracker {
    store: DayStore,
    catalog: FoodCatalog,
    today: NaiveDate,
}

impl Tracker {
    #[must_use]
    pub fn new(store: DayStore, catalog: FoodCatalog) -> Self {
        Self::with_today(store, catalog, Local::now().date_naive())
    }

    /// A tracker pinned to a specific date.
    #[must_use]
    pub fn with_today(mut store: DayStore, catalog: FoodCatalog, today: NaiveDate) -> Self {
        // A day's record exists before any mutation targets it
        store.day_mut(today);
        Tracker {
            store,
            catalog,
            today,
        }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    #[must_use]
    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Compute targets from a body profile and overwrite today's. The previous
    /// targets are replaced, not merged.
    pub fn set_requirements(&mut self, profile: &BodyProfile) -> Result<DailyTargets> {
        let targets = calculate_requirements(profile)?;
        let day = self.store.day_mut(self.today);
        day.mode = profile.mode;
        day.targets = Some(targets);
        self.store.save()?;
        Ok(targets)
    }

    /// Append a catalog food to today's meal log. Unknown foods are rejected
    /// with no mutation.
    pub fn log_meal(&mut self, food_name: &str) -> Result<(MealEntry, Vec<GoalEvent>)> {
        let Some((name, info)) = self.catalog.get(food_name) else {
            bail!("Unknown food '{food_name}'. See `nosh food list` for the menu");
        };
        let entry = MealEntry {
            time: Local::now().to_rfc3339(),
            food: name.to_string(),
            calories: info.calories,
            protein_g: info.protein_g,
            fat_g: info.fat_g,
            carbs_g: info.carbs_g,
        };

        let day = self.store.day_mut(self.today);
        let goal = day.targets.map_or(0.0, |t| t.calories);
        let before = day.totals().calories;
        day.meals.push(entry.clone());
        let after = day.totals().calories;

        let mut events = Vec::new();
        if crossed_goal(before, after, goal) {
            events.push(GoalEvent::CaloriesReached);
        }

        self.store.save()?;
        Ok((entry, events))
    }

    /// Add water to today's total. Returns the new total.
    pub fn add_water(&mut self, amount_ml: f64) -> Result<(f64, Vec<GoalEvent>)> {
        if !amount_ml.is_finite() || amount_ml <= 0.0 {
            bail!("Water amount must be a positive number of ml");
        }

        let day = self.store.day_mut(self.today);
        let goal = day.targets.map_or(0.0, |t| t.water_ml);
        let before = day.water_ml;
        day.water_ml += amount_ml;
        let after = day.water_ml;

        let mut events = Vec::new();
        if crossed_goal(before, after, goal) {
            events.push(GoalEvent::WaterReached);
        }

        self.store.save()?;
        Ok((after, events))
    }

    /// Reset today's meals and water. Mode and targets are kept.
    pub fn clear_today(&mut self) -> Result<()> {
        self.store.day_mut(self.today).clear();
        self.store.save()
    }

    #[must_use]
    pub fn today_summary(&self) -> DaySummary {
        self.summary(self.today)
    }

    /// Build the display view for a date. Absent dates render as a zeroed day.
    #[must_use]
    pub fn summary(&self, date: NaiveDate) -> DaySummary {
        let record = self.store.day(date).cloned().unwrap_or_default();
        Self::summarize(date, &record)
    }

    fn summarize(date: NaiveDate, record: &DayRecord) -> DaySummary {
        let totals = record.totals();
        let (cal_goal, water_goal) = record
            .targets
            .map_or((0.0, 0.0), |t| (t.calories, t.water_ml));
        DaySummary {
            date: date.to_string(),
            mode: record.mode,
            targets: record.targets,
            meals: record.meals.clone(),
            totals,
            water_ml: record.water_ml,
            calories: GoalProgress::measure(totals.calories, cal_goal),
            water: GoalProgress::measure(record.water_ml, water_goal),
        }
    }

    /// Recorded dates, ascending.
    #[must_use]
    pub fn dates(&self) -> Vec<String> {
        self.store.dates().map(str::to_string).collect()
    }
}
