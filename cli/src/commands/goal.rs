use anyhow::Result;
use std::process;

use nosh_core::models::{DailyTargets, parse_activity, parse_mode, parse_sex};
use nosh_core::requirements::BodyProfile;
use nosh_core::service::Tracker;

use super::helpers::json_error;

#[allow(clippy::too_many_arguments)]
pub(crate) fn cmd_goal_set(
    tracker: &mut Tracker,
    weight: f64,
    mode: &str,
    height: Option<f64>,
    age: Option<f64>,
    sex: Option<&str>,
    activity: &str,
    json: bool,
) -> Result<()> {
    let profile = BodyProfile {
        mode: parse_mode(mode)?,
        weight_kg: weight,
        height_cm: height,
        age_years: age,
        sex: sex.map(parse_sex).transpose()?,
        activity: parse_activity(activity)?,
    };
    let targets = tracker.set_requirements(&profile)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
    } else {
        print_targets_line(&targets);
    }

    Ok(())
}

pub(crate) fn cmd_goal_show(tracker: &Tracker, json: bool) -> Result<()> {
    let summary = tracker.today_summary();

    if let Some(targets) = summary.targets {
        if json {
            println!("{}", serde_json::to_string_pretty(&targets)?);
        } else {
            let mode = summary.mode;
            println!("Mode: {mode}");
            print_targets_line(&targets);
        }
        Ok(())
    } else {
        if json {
            println!("{}", json_error("No targets set for today"));
        } else {
            eprintln!("No targets set. Use `nosh goal set --weight <kg>` to set them.");
        }
        process::exit(2);
    }
}

fn print_targets_line(t: &DailyTargets) {
    let cal = t.calories;
    let protein = t.protein_g;
    let fat = t.fat_g;
    let carbs = t.carbs_g;
    let water = t.water_ml;
    println!(
        "Daily requirement → Calories: {cal:.1} kcal | Protein: {protein:.1} g | Fat: {fat:.1} g | Carbs: {carbs:.1} g | Water: {water:.0} ml"
    );
}
