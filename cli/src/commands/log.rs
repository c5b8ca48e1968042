use anyhow::Result;

use nosh_core::service::Tracker;

use super::helpers::{event_label, event_message, render_bar};

const BAR_WIDTH: usize = 20;

pub(crate) fn cmd_log(tracker: &mut Tracker, food: &str, json: bool) -> Result<()> {
    let (entry, events) = tracker.log_meal(food)?;
    let summary = tracker.today_summary();

    if json {
        let events: Vec<&str> = events.iter().copied().map(event_label).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "entry": entry,
                "total_calories": summary.totals.calories,
                "events": events,
            }))?
        );
        return Ok(());
    }

    let name = &entry.food;
    let cal = entry.calories;
    let protein = entry.protein_g;
    let fat = entry.fat_g;
    let carbs = entry.carbs_g;
    println!("Logged: {name} — {cal:.0} kcal | P:{protein:.1}g F:{fat:.1}g C:{carbs:.1}g");

    let total = summary.totals.calories;
    let bar = render_bar(&summary.calories, BAR_WIDTH);
    println!("Calories: {total:.0} kcal {bar}");

    for event in events {
        println!("{}", event_message(event));
    }

    Ok(())
}

pub(crate) fn cmd_water(tracker: &mut Tracker, amount: f64, json: bool) -> Result<()> {
    let (total, events) = tracker.add_water(amount)?;
    let summary = tracker.today_summary();

    if json {
        let events: Vec<&str> = events.iter().copied().map(event_label).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "added_ml": amount,
                "water_ml": total,
                "events": events,
            }))?
        );
        return Ok(());
    }

    let bar = render_bar(&summary.water, BAR_WIDTH);
    println!("Water: {total:.0} ml {bar}");

    for event in events {
        println!("{}", event_message(event));
    }

    Ok(())
}

pub(crate) fn cmd_clear(tracker: &mut Tracker, json: bool) -> Result<()> {
    tracker.clear_today()?;

    if json {
        println!("{}", serde_json::json!({ "cleared": true }));
    } else {
        println!("Today's data cleared");
    }

    Ok(())
}
