//! Session summary types.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Difficulty;
use crate::session::QuizSession;
use crate::statistics;

/// Everything the final summary needs, computed once when the time budget
/// expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique id for this session.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub difficulty: Difficulty,
    pub correct: u32,
    pub incorrect: u32,
    pub total_attempts: u32,
    /// Percentage of correct guesses over all attempts, rounded half-up to
    /// two decimals.
    pub accuracy_percent: f64,
    /// The configured session budget.
    pub time_limit_ms: u64,
    /// Historical metric: the budget divided by the solved count. `None`
    /// when nothing was solved. See `statistics::time_per_correct`.
    pub time_per_correct_ms: Option<u64>,
    /// Mean wall-clock time per solved equation. `None` when nothing was
    /// solved.
    pub mean_solve_time_ms: Option<u64>,
    /// Actual wall-clock duration of the loop; may exceed the budget when
    /// the last equation ran long.
    pub duration_ms: u64,
}

impl SessionReport {
    pub fn new(session: &QuizSession, time_limit: Duration, elapsed: Duration) -> Self {
        SessionReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            difficulty: session.difficulty(),
            correct: session.correct(),
            incorrect: session.incorrect(),
            total_attempts: session.total_attempts(),
            accuracy_percent: session.accuracy_percent(),
            time_limit_ms: time_limit.as_millis() as u64,
            time_per_correct_ms: statistics::time_per_correct(time_limit, session.correct())
                .map(|d| d.as_millis() as u64),
            mean_solve_time_ms: statistics::mean_solve_time(
                session.total_solve_time(),
                session.correct(),
            )
            .map(|d| d.as_millis() as u64),
            duration_ms: elapsed.as_millis() as u64,
        }
    }
}
