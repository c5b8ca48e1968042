use serde::Serialize;

/// Progress toward a single daily goal.
///
/// `ratio_pct` is the true percentage and may exceed 100; `display_pct` is
/// clamped to `[0, 100]` for rendering. An unset (zero) goal reads as 0%
/// progress rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub consumed: f64,
    pub goal: f64,
    pub ratio_pct: f64,
    pub display_pct: f64,
    pub reached: bool,
}

impl GoalProgress {
    #[must_use]
    pub fn measure(consumed: f64, goal: f64) -> Self {
        let ratio_pct = if goal > 0.0 {
            consumed / goal * 100.0
        } else {
            0.0
        };
        GoalProgress {
            consumed,
            goal,
            ratio_pct,
            display_pct: ratio_pct.clamp(0.0, 100.0),
            reached: goal > 0.0 && consumed >= goal,
        }
    }
}

/// True when an addition moved a total from strictly below the goal to
/// at-or-past it. Already being past the goal never counts as a crossing, so
/// the reached signal fires once per crossing rather than on every log.
#[must_use]
pub fn crossed_goal(before: f64, after: f64, goal: f64) -> bool {
    goal > 0.0 && before < goal && after >= goal
}
