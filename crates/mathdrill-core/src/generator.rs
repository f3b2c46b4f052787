//! Random equation generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Difficulty, Equation, Operator};
use crate::traits::EquationSource;

/// Draws equations uniformly within a difficulty's operand bound.
///
/// Operands come from the half-open range `[0, max_operand)` — the bound
/// itself is never produced, zero is. Basic yields `a OP b`; the other tiers
/// yield `a + b OP c`, randomizing only the final operator.
pub struct RandomEquationGenerator {
    rng: StdRng,
}

impl RandomEquationGenerator {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        RandomEquationGenerator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        RandomEquationGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEquationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EquationSource for RandomEquationGenerator {
    fn next_equation(&mut self, difficulty: Difficulty) -> Equation {
        let bound = difficulty.max_operand();
        let operands = (0..difficulty.operand_count())
            .map(|_| self.rng.random_range(0..bound))
            .collect();
        let operator = if self.rng.random_range(0..2) == 0 {
            Operator::Add
        } else {
            Operator::Sub
        };
        Equation::new(operands, operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Re-evaluate a rendered equation's tokens left to right.
    fn eval_tokens(expr: &str) -> i64 {
        let mut tokens = expr.split_whitespace();
        let mut acc: i64 = tokens.next().unwrap().parse().unwrap();
        while let Some(op) = tokens.next() {
            let rhs: i64 = tokens.next().unwrap().parse().unwrap();
            match op {
                "+" => acc += rhs,
                "-" => acc -= rhs,
                other => panic!("unexpected token: {other}"),
            }
        }
        acc
    }

    #[test]
    fn displayed_tokens_round_trip_to_the_stored_answer() {
        for difficulty in Difficulty::ALL {
            let mut generator = RandomEquationGenerator::seeded(0xD1FF ^ u64::from(difficulty.code()));
            for _ in 0..10_000 {
                let equation = generator.next_equation(difficulty);
                assert_eq!(
                    eval_tokens(&equation.to_string()),
                    equation.answer,
                    "difficulty {difficulty}: {equation}"
                );
            }
        }
    }

    #[test]
    fn operands_stay_inside_the_half_open_bound() {
        for difficulty in Difficulty::ALL {
            let mut generator = RandomEquationGenerator::seeded(7);
            for _ in 0..10_000 {
                let equation = generator.next_equation(difficulty);
                for &operand in &equation.operands {
                    assert!(
                        (0..difficulty.max_operand()).contains(&operand),
                        "operand {operand} out of range for {difficulty}"
                    );
                }
            }
        }
    }

    #[test]
    fn operand_counts_match_the_tier() {
        let mut generator = RandomEquationGenerator::seeded(7);
        assert_eq!(generator.next_equation(Difficulty::Basic).operands.len(), 2);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(generator.next_equation(difficulty).operands.len(), 3);
        }
    }

    #[test]
    fn three_operand_equations_fix_the_first_combination_to_addition() {
        let mut generator = RandomEquationGenerator::seeded(11);
        for _ in 0..1_000 {
            let rendered = generator.next_equation(Difficulty::Hard).to_string();
            let tokens: Vec<&str> = rendered.split_whitespace().collect();
            assert_eq!(tokens.len(), 5);
            assert_eq!(tokens[1], "+");
        }
    }

    #[test]
    fn equal_seeds_produce_equal_sequences() {
        let mut a = RandomEquationGenerator::seeded(42);
        let mut b = RandomEquationGenerator::seeded(42);
        for _ in 0..100 {
            assert_eq!(
                a.next_equation(Difficulty::Medium),
                b.next_equation(Difficulty::Medium)
            );
        }
    }

    #[test]
    fn both_operators_eventually_appear() {
        let mut generator = RandomEquationGenerator::seeded(3);
        let mut saw_add = false;
        let mut saw_sub = false;
        for _ in 0..1_000 {
            match generator.next_equation(Difficulty::Basic).operator {
                Operator::Add => saw_add = true,
                Operator::Sub => saw_sub = true,
            }
        }
        assert!(saw_add && saw_sub);
    }
}
