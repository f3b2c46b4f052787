//! Core data model types for mathdrill.
//!
//! These are the fundamental types the whole system uses to represent
//! difficulty tiers and generated equations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DifficultyOutOfRange;

/// Difficulty tier selected at session start.
///
/// The tier fixes the exclusive operand bound and the operand count used by
/// the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in menu order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Basic,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// The integer code the user types to select this tier.
    pub fn code(self) -> u8 {
        match self {
            Difficulty::Basic => 0,
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Human-readable tier name.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Exclusive upper bound for operand draws. Operands come from
    /// `[0, max_operand)`.
    pub fn max_operand(self) -> i64 {
        match self {
            Difficulty::Basic => 9,
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 200,
        }
    }

    /// How many operands an equation at this tier carries.
    pub fn operand_count(self) -> usize {
        match self {
            Difficulty::Basic => 2,
            _ => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = DifficultyOutOfRange;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Difficulty::Basic),
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(DifficultyOutOfRange(other)),
        }
    }
}

/// Operator applied at an equation's final combination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => f.write_str("+"),
            Operator::Sub => f.write_str("-"),
        }
    }
}

/// A generated arithmetic problem together with its precomputed answer.
///
/// The answer is evaluated at construction, before the equation can be
/// displayed, so scoring is always well-defined. Evaluation is left to
/// right: every combination before the last is addition, the last uses
/// `operator`. Negative answers are valid; subtraction is never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    /// Operand values, left to right. Two for Basic, three otherwise.
    pub operands: Vec<i64>,
    /// Operator of the final combination step.
    pub operator: Operator,
    /// Left-to-right evaluation of the expression.
    pub answer: i64,
}

impl Equation {
    /// Build an equation from its operands and final operator.
    pub fn new(operands: Vec<i64>, operator: Operator) -> Self {
        debug_assert!(operands.len() >= 2, "an equation needs at least two operands");
        let last = operands.len() - 1;
        let mut answer = operands[0];
        for (index, &value) in operands.iter().enumerate().skip(1) {
            if index == last {
                answer = operator.apply(answer, value);
            } else {
                answer += value;
            }
        }
        Equation {
            operands,
            operator,
            answer,
        }
    }
}

impl fmt::Display for Equation {
    /// Literal tokens joined by single spaces: `"7 - 3"`, `"7 + 3 - 9"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.operands.len() - 1;
        for (index, value) in self.operands.iter().enumerate() {
            if index > 0 {
                let op = if index == last {
                    self.operator
                } else {
                    Operator::Add
                };
                write!(f, " {op} ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
