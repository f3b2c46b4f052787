//! The drill session engine: difficulty selection and the timed loop.
//!
//! The engine owns the control flow; presentation goes through
//! [`DrillObserver`] callbacks so the console (or a test recorder) decides
//! what is actually shown.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::SessionError;
use crate::model::{Difficulty, Equation};
use crate::report::SessionReport;
use crate::session::{QuizSession, Resolution};
use crate::traits::{Clock, EquationSource, LineSource};

/// Engine tunables.
#[derive(Debug, Clone)]
pub struct DrillConfig {
    /// Session time budget.
    pub time_limit: Duration,
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            time_limit: Duration::from_millis(60_000),
        }
    }
}

/// Facts about a solved equation, for presentation.
#[derive(Debug, Clone, Copy)]
pub struct SolvedEquation {
    pub answer: i64,
    /// Whole seconds spent on this equation.
    pub solve_secs: u64,
    /// Attempts used, the correct one included.
    pub attempts: u32,
    /// Whole seconds of budget left; negative when the equation ran past it.
    pub time_left_secs: i64,
    /// Cumulative solved count, this equation included.
    pub correct_total: u32,
}

/// Facts about an equation abandoned at the attempt cap.
#[derive(Debug, Clone, Copy)]
pub struct AbandonedEquation {
    pub answer: i64,
    pub time_left_secs: i64,
    pub correct_total: u32,
}

/// Presentation callbacks emitted while a session runs.
///
/// Every method defaults to a no-op so observers implement only what they
/// show.
pub trait DrillObserver {
    /// The difficulty menu, shown once before the prompt loop.
    fn difficulty_menu(&mut self) {}
    /// One prompt iteration.
    fn difficulty_prompt(&mut self) {}
    /// The previous difficulty input was rejected.
    fn difficulty_rejected(&mut self) {}
    /// A fresh equation should be shown.
    fn equation_presented(&mut self, _equation: &Equation) {}
    /// A wrong guess with attempts remaining.
    fn guess_incorrect(&mut self, _attempts: u32) {}
    /// A guess that did not parse as an integer.
    fn invalid_guess(&mut self) {}
    fn equation_solved(&mut self, _solved: &SolvedEquation) {}
    fn equation_abandoned(&mut self, _abandoned: &AbandonedEquation) {}
}

/// Observer that shows nothing.
pub struct NoopObserver;

impl DrillObserver for NoopObserver {}

/// The drill engine.
pub struct DrillEngine {
    source: Box<dyn EquationSource>,
    clock: Arc<dyn Clock>,
    config: DrillConfig,
}

impl DrillEngine {
    pub fn new(source: Box<dyn EquationSource>, clock: Arc<dyn Clock>, config: DrillConfig) -> Self {
        DrillEngine {
            source,
            clock,
            config,
        }
    }

    /// Prompt until a valid difficulty code is read.
    ///
    /// Malformed and out-of-range input re-prompts without bound; an input
    /// stream failure is fatal.
    pub fn select_difficulty(
        &self,
        input: &mut dyn LineSource,
        observer: &mut dyn DrillObserver,
    ) -> Result<Difficulty, SessionError> {
        observer.difficulty_menu();
        loop {
            observer.difficulty_prompt();
            let line = required_line(input)?;
            match parse_difficulty(&line) {
                Some(difficulty) => return Ok(difficulty),
                None => observer.difficulty_rejected(),
            }
        }
    }

    /// Run the timed loop to completion and report on the session.
    ///
    /// The budget is checked only between equations; an equation in flight
    /// is always allowed to finish, even past the limit.
    pub fn run(
        &mut self,
        difficulty: Difficulty,
        input: &mut dyn LineSource,
        observer: &mut dyn DrillObserver,
    ) -> Result<SessionReport, SessionError> {
        let mut session = QuizSession::new(difficulty);
        let started = self.clock.now();
        tracing::debug!(
            difficulty = %difficulty,
            time_limit_ms = self.config.time_limit.as_millis() as u64,
            "session started"
        );

        while self.clock.now() - started < self.config.time_limit {
            let equation = self.source.next_equation(difficulty);
            tracing::trace!(equation = %equation, answer = equation.answer, "equation generated");
            observer.equation_presented(&equation);
            let equation_started = self.clock.now();

            loop {
                let line = required_line(input)?;
                let guess = line.trim().parse::<i64>().ok();
                match session.score_guess(guess, equation.answer) {
                    Resolution::Solved { attempts } => {
                        let solve_time = self.clock.now() - equation_started;
                        session.record_solve_time(solve_time);
                        observer.equation_solved(&SolvedEquation {
                            answer: equation.answer,
                            solve_secs: solve_time.as_secs(),
                            attempts,
                            time_left_secs: self.time_left_secs(started),
                            correct_total: session.correct(),
                        });
                        break;
                    }
                    Resolution::Retry { attempts } => observer.guess_incorrect(attempts),
                    Resolution::Abandoned => {
                        observer.equation_abandoned(&AbandonedEquation {
                            answer: equation.answer,
                            time_left_secs: self.time_left_secs(started),
                            correct_total: session.correct(),
                        });
                        break;
                    }
                    Resolution::AbandonedInvalid => {
                        observer.invalid_guess();
                        break;
                    }
                }
            }
        }

        let elapsed = self.clock.now() - started;
        tracing::debug!(
            correct = session.correct(),
            incorrect = session.incorrect(),
            elapsed_ms = elapsed.as_millis() as u64,
            "session finished"
        );
        Ok(SessionReport::new(&session, self.config.time_limit, elapsed))
    }

    fn time_left_secs(&self, started: Instant) -> i64 {
        let elapsed_ms = (self.clock.now() - started).as_millis() as i64;
        (self.config.time_limit.as_millis() as i64 - elapsed_ms) / 1000
    }
}

fn required_line(input: &mut dyn LineSource) -> Result<String, SessionError> {
    input.next_line()?.ok_or(SessionError::InputClosed)
}

fn parse_difficulty(line: &str) -> Option<Difficulty> {
    line.trim()
        .parse::<i64>()
        .ok()
        .and_then(|code| Difficulty::try_from(code).ok())
}
