//! Per-session scoring state and the guess-resolution state machine.

use std::time::Duration;

use crate::model::Difficulty;
use crate::statistics;

/// Attempt cap per equation before it is abandoned.
pub const MAX_EQUATION_ATTEMPTS: u32 = 5;

/// Outcome of scoring one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The guess matched; carries the attempts used on this equation.
    Solved { attempts: u32 },
    /// Wrong guess with attempts remaining; read another for the same
    /// equation.
    Retry { attempts: u32 },
    /// The attempt cap was reached; the equation is over.
    Abandoned,
    /// The guess was not an integer; the equation is dropped immediately,
    /// with no retry prompt.
    AbandonedInvalid,
}

impl Resolution {
    /// Whether the current equation is finished after this guess.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Resolution::Retry { .. })
    }
}

/// Mutable scoring state for one drill session.
///
/// Two invariants hold after every [`score_guess`](Self::score_guess) call:
/// `total_attempts == correct + incorrect` (each guess increments exactly one
/// of correct/incorrect and `total_attempts` exactly once), and
/// `equation_attempts` stays within `0..=MAX_EQUATION_ATTEMPTS`, returning to
/// exactly 0 on every terminal resolution.
#[derive(Debug, Clone)]
pub struct QuizSession {
    difficulty: Difficulty,
    correct: u32,
    incorrect: u32,
    total_attempts: u32,
    equation_attempts: u32,
    total_solve_time: Duration,
}

impl QuizSession {
    pub fn new(difficulty: Difficulty) -> Self {
        QuizSession {
            difficulty,
            correct: 0,
            incorrect: 0,
            total_attempts: 0,
            equation_attempts: 0,
            total_solve_time: Duration::ZERO,
        }
    }

    /// Score one guess against the current equation's answer.
    ///
    /// `None` means the input line failed integer parsing.
    pub fn score_guess(&mut self, guess: Option<i64>, answer: i64) -> Resolution {
        self.equation_attempts += 1;
        self.total_attempts += 1;

        match guess {
            None => {
                self.incorrect += 1;
                self.equation_attempts = 0;
                Resolution::AbandonedInvalid
            }
            Some(value) if value == answer => {
                self.correct += 1;
                let attempts = self.equation_attempts;
                self.equation_attempts = 0;
                Resolution::Solved { attempts }
            }
            Some(_) => {
                self.incorrect += 1;
                if self.equation_attempts >= MAX_EQUATION_ATTEMPTS {
                    self.equation_attempts = 0;
                    Resolution::Abandoned
                } else {
                    Resolution::Retry {
                        attempts: self.equation_attempts,
                    }
                }
            }
        }
    }

    /// Add the wall-clock time a solved equation took.
    pub fn record_solve_time(&mut self, elapsed: Duration) {
        self.total_solve_time += elapsed;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    pub fn equation_attempts(&self) -> u32 {
        self.equation_attempts
    }

    pub fn total_solve_time(&self) -> Duration {
        self.total_solve_time
    }

    pub fn accuracy_percent(&self) -> f64 {
        statistics::accuracy_percent(self.correct, self.total_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> QuizSession {
        QuizSession::new(Difficulty::Basic)
    }

    fn assert_invariants(s: &QuizSession) {
        assert_eq!(s.total_attempts(), s.correct() + s.incorrect());
        assert!(s.equation_attempts() <= MAX_EQUATION_ATTEMPTS);
    }

    #[test]
    fn first_guess_correct() {
        let mut s = session();
        let resolution = s.score_guess(Some(8), 8);
        assert_eq!(resolution, Resolution::Solved { attempts: 1 });
        assert!(resolution.is_terminal());
        assert_eq!(s.correct(), 1);
        assert_eq!(s.incorrect(), 0);
        assert_eq!(s.total_attempts(), 1);
        assert_eq!(s.equation_attempts(), 0);
        assert_invariants(&s);
    }

    #[test]
    fn correct_after_retries_reports_attempts_used() {
        let mut s = session();
        assert_eq!(s.score_guess(Some(1), 4), Resolution::Retry { attempts: 1 });
        assert_eq!(s.score_guess(Some(2), 4), Resolution::Retry { attempts: 2 });
        assert_eq!(s.score_guess(Some(4), 4), Resolution::Solved { attempts: 3 });
        assert_eq!(s.correct(), 1);
        assert_eq!(s.incorrect(), 2);
        assert_eq!(s.total_attempts(), 3);
        assert_eq!(s.equation_attempts(), 0);
        assert_invariants(&s);
    }

    #[test]
    fn fifth_wrong_guess_abandons() {
        let mut s = session();
        for (guess, attempts) in [(1, 1), (2, 2), (3, 3), (5, 4)] {
            assert_eq!(
                s.score_guess(Some(guess), 4),
                Resolution::Retry { attempts }
            );
            assert_invariants(&s);
        }
        assert_eq!(s.score_guess(Some(6), 4), Resolution::Abandoned);
        assert_eq!(s.incorrect(), 5);
        assert_eq!(s.correct(), 0);
        assert_eq!(s.total_attempts(), 5);
        assert_eq!(s.equation_attempts(), 0);
        assert_invariants(&s);
    }

    #[test]
    fn malformed_guess_abandons_immediately() {
        let mut s = session();
        let resolution = s.score_guess(None, 4);
        assert_eq!(resolution, Resolution::AbandonedInvalid);
        assert!(resolution.is_terminal());
        assert_eq!(s.incorrect(), 1);
        assert_eq!(s.total_attempts(), 1);
        assert_eq!(s.equation_attempts(), 0);
        assert_invariants(&s);
    }

    #[test]
    fn malformed_guess_mid_retry_abandons() {
        let mut s = session();
        assert_eq!(s.score_guess(Some(1), 4), Resolution::Retry { attempts: 1 });
        assert_eq!(s.score_guess(None, 4), Resolution::AbandonedInvalid);
        assert_eq!(s.incorrect(), 2);
        assert_eq!(s.equation_attempts(), 0);
        assert_invariants(&s);
    }

    #[test]
    fn counters_accumulate_across_equations() {
        let mut s = session();
        // Equation 1: solved on the second attempt.
        s.score_guess(Some(1), 4);
        s.score_guess(Some(4), 4);
        // Equation 2: abandoned after five wrong guesses.
        for guess in [10, 11, 12, 13, 14] {
            s.score_guess(Some(guess), 4);
        }
        // Equation 3: malformed.
        s.score_guess(None, 4);

        assert_eq!(s.correct(), 1);
        assert_eq!(s.incorrect(), 7);
        assert_eq!(s.total_attempts(), 8);
        assert_eq!(s.equation_attempts(), 0);
        assert_invariants(&s);
        assert_eq!(s.accuracy_percent(), 12.5);
    }

    #[test]
    fn solve_time_accumulates() {
        let mut s = session();
        s.record_solve_time(Duration::from_secs(3));
        s.record_solve_time(Duration::from_secs(7));
        assert_eq!(s.total_solve_time(), Duration::from_secs(10));
    }
}
