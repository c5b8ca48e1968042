use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use nosh_core::progress::GoalProgress;
use nosh_core::service::GoalEvent;

pub(crate) fn parse_date(date_str: Option<String>) -> Result<NaiveDate> {
    match date_str {
        None => Ok(Local::now().date_naive()),
        Some(s) => match s.as_str() {
            "today" => Ok(Local::now().date_naive()),
            "yesterday" => Ok(Local::now().date_naive() - chrono::Duration::days(1)),
            _ => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{s}'. Use YYYY-MM-DD, today, or yesterday")),
        },
    }
}

/// Textual progress bar: fill from the clamped percentage, label from the true
/// one, so overshoot shows a full bar with a >100% label.
pub(crate) fn render_bar(progress: &GoalProgress, width: usize) -> String {
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
    let filled = ((progress.display_pct / 100.0 * width as f64).round() as usize).min(width);
    let mut bar = String::with_capacity(width + 8);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    let pct = progress.ratio_pct;
    format!("[{bar}] {pct:.1}%")
}

pub(crate) fn event_message(event: GoalEvent) -> &'static str {
    match event {
        GoalEvent::CaloriesReached => "You reached your daily calorie goal!",
        GoalEvent::WaterReached => "You reached your daily water goal!",
    }
}

pub(crate) fn event_label(event: GoalEvent) -> &'static str {
    match event {
        GoalEvent::CaloriesReached => "calories_reached",
        GoalEvent::WaterReached => "water_reached",
    }
}

/// HH:MM:SS slice of an RFC 3339 timestamp, for meal listings.
pub(crate) fn clock_time(rfc3339: &str) -> &str {
    rfc3339.get(11..19).unwrap_or(rfc3339)
}

pub(crate) fn json_error(message: &str) -> String {
    #[derive(Serialize)]
    struct CliError<'a> {
        error: &'a str,
    }
    serde_json::to_string(&CliError { error: message })
        .unwrap_or_else(|_| format!("{{\"error\":\"{message}\"}}"))
}

pub(crate) fn no_neg_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
