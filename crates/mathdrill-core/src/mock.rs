//! Test doubles for the engine seams.
//!
//! Shipped as a regular module so integration tests can drive sessions
//! without a terminal or a real clock.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::model::{Difficulty, Equation};
use crate::traits::{Clock, EquationSource, LineSource};

/// Clock whose current instant is advanced manually.
pub struct ManualClock {
    base: Instant,
    offset_ms: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock {
            base: Instant::now(),
            offset_ms: AtomicU64::new(0),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, delta: Duration) {
        self.offset_ms
            .fetch_add(delta.as_millis() as u64, Ordering::Relaxed);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + Duration::from_millis(self.offset_ms.load(Ordering::Relaxed))
    }
}

/// Finite scripted input, optionally advancing a [`ManualClock`] on every
/// read to simulate the time a user spends typing.
pub struct ScriptedSource {
    lines: VecDeque<String>,
    clock: Option<(Arc<ManualClock>, Duration)>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedSource {
            lines: lines.into_iter().map(Into::into).collect(),
            clock: None,
        }
    }

    /// Advance `per_read` on the given clock before each line is returned.
    pub fn with_clock(mut self, clock: Arc<ManualClock>, per_read: Duration) -> Self {
        self.clock = Some((clock, per_read));
        self
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some((clock, per_read)) = &self.clock {
            clock.advance(*per_read);
        }
        Ok(self.lines.pop_front())
    }
}

/// Input that always fails, for exercising the fatal I/O path.
pub struct FailingSource;

impl LineSource for FailingSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "input gone"))
    }
}

/// Equation supply that replays a preset queue, cycling when exhausted.
pub struct FixedEquationSource {
    queue: VecDeque<Equation>,
}

impl FixedEquationSource {
    pub fn new<I: IntoIterator<Item = Equation>>(equations: I) -> Self {
        let queue: VecDeque<Equation> = equations.into_iter().collect();
        assert!(!queue.is_empty(), "FixedEquationSource needs at least one equation");
        FixedEquationSource { queue }
    }
}

impl EquationSource for FixedEquationSource {
    fn next_equation(&mut self, _difficulty: Difficulty) -> Equation {
        let equation = self.queue.pop_front().expect("queue is never empty");
        self.queue.push_back(equation.clone());
        equation
    }
}
