//! Session statistics: accuracy and answer-time metrics.

use std::time::Duration;

/// Accuracy as the percentage of correct guesses over all attempts, rounded
/// half-up to two decimal places. Zero when nothing was attempted.
pub fn accuracy_percent(correct: u32, total_attempts: u32) -> f64 {
    if total_attempts == 0 {
        return 0.0;
    }
    let raw = f64::from(correct) / f64::from(total_attempts) * 100.0;
    (raw * 100.0).round() / 100.0
}

/// The historical "average answer time": the full session budget divided by
/// the number of correctly solved equations.
///
/// This is not a real per-equation average — it ignores how much of the
/// budget was actually used. It is what the drill has always reported, so it
/// is kept under this name; [`mean_solve_time`] is the honest metric.
/// `None` when nothing was solved.
pub fn time_per_correct(time_limit: Duration, correct: u32) -> Option<Duration> {
    if correct == 0 {
        None
    } else {
        Some(time_limit / correct)
    }
}

/// Mean wall-clock time spent on equations that were actually solved.
/// `None` when nothing was solved.
pub fn mean_solve_time(total_solve_time: Duration, correct: u32) -> Option<Duration> {
    if correct == 0 {
        None
    } else {
        Some(total_solve_time / correct)
    }
}

/// Render a percentage the way the summary prints it: up to two fraction
/// digits, trailing zeros trimmed (`"33.33"`, `"12.5"`, `"50"`).
pub fn format_percent(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
