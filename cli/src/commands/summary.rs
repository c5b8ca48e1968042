use anyhow::Result;
use std::process;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use nosh_core::service::Tracker;

use super::helpers::{clock_time, no_neg_zero, parse_date, render_bar};

pub(crate) fn cmd_summary(tracker: &Tracker, date: Option<String>, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let summary = tracker.summary(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let date = &summary.date;
    let mode = summary.mode;
    println!("=== {date} ({mode}) ===\n");

    if summary.meals.is_empty() {
        println!("  No meals logged");
    } else {
        for e in &summary.meals {
            let time = clock_time(&e.time);
            let name = &e.food;
            let cal = e.calories;
            let protein = e.protein_g;
            let fat = e.fat_g;
            let carbs = e.carbs_g;
            println!("  {time}  {name} — {cal:.0} kcal | P:{protein:.1}g F:{fat:.1}g C:{carbs:.1}g");
        }
    }
    println!();

    let totals = summary.totals;
    let total_cal = totals.calories;
    let total_p = totals.protein_g;
    let total_f = totals.fat_g;
    let total_c = totals.carbs_g;
    let water = summary.water_ml;
    println!("  TOTAL: {total_cal:.0} kcal | P:{total_p:.1}g F:{total_f:.1}g C:{total_c:.1}g");
    println!("  WATER: {water:.0} ml");

    if let Some(target) = summary.targets {
        let tcal = target.calories;
        let tp = target.protein_g;
        let tf = target.fat_g;
        let tc = target.carbs_g;
        let tw = target.water_ml;
        println!("  TARGET: {tcal:.0} kcal | P:{tp:.0}g F:{tf:.0}g C:{tc:.0}g | Water: {tw:.0} ml");
        let rcal = tcal - total_cal;
        let rwater = tw - water;
        println!("  REMAINING: {rcal:.0} kcal | Water: {rwater:.0} ml");
    }

    println!();
    let cal_bar = render_bar(&summary.calories, 20);
    let water_bar = render_bar(&summary.water, 20);
    println!("  Calories {cal_bar}");
    println!("  Water    {water_bar}");

    Ok(())
}

pub(crate) fn cmd_history(tracker: &Tracker, days: u32, json: bool) -> Result<()> {
    #[derive(Tabled)]
    struct HistoryRow {
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Calories")]
        calories: String,
        #[tabled(rename = "Cal %")]
        cal_pct: String,
        #[tabled(rename = "Water")]
        water: String,
        #[tabled(rename = "Water %")]
        water_pct: String,
    }

    let today = tracker.today();
    let mut summaries = Vec::new();

    for i in 0..days {
        let date = today - chrono::Duration::days(i64::from(i));
        summaries.push(tracker.summary(date));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries
        .iter()
        .all(|s| s.meals.is_empty() && s.water_ml == 0.0)
    {
        eprintln!("No entries in the last {days} days");
        process::exit(2);
    }

    let rows: Vec<HistoryRow> = summaries
        .iter()
        .map(|s| {
            let cal = no_neg_zero(s.totals.calories);
            let water = no_neg_zero(s.water_ml);
            let cal_pct = s.calories.ratio_pct;
            let water_pct = s.water.ratio_pct;
            HistoryRow {
                date: s.date.clone(),
                calories: format!("{cal:.0}"),
                cal_pct: format!("{cal_pct:.0}%"),
                water: format!("{water:.0}ml"),
                water_pct: format!("{water_pct:.0}%"),
            }
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}
