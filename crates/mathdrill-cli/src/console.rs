//! Console rendering: the exact prompt and summary strings.

use std::io::{self, Write};

use mathdrill_core::engine::{AbandonedEquation, DrillObserver, SolvedEquation};
use mathdrill_core::model::Equation;
use mathdrill_core::report::SessionReport;
use mathdrill_core::statistics::format_percent;

/// Renders session events to stdout.
///
/// A wrong guess below the attempt cap prints nothing; the drill just waits
/// for the next line.
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> Self {
        ConsoleObserver
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DrillObserver for ConsoleObserver {
    fn difficulty_menu(&mut self) {
        println!("0 Basic");
        println!("1 Easy");
        println!("2 Medium");
        println!("3 Hard");
    }

    fn difficulty_prompt(&mut self) {
        println!();
        print!("Select difficulty: ");
        let _ = io::stdout().flush();
    }

    fn difficulty_rejected(&mut self) {
        println!("Please enter 0, 1, 2 or 3 for difficulty.");
    }

    fn equation_presented(&mut self, equation: &Equation) {
        println!("{equation}");
    }

    fn invalid_guess(&mut self) {
        println!("Invalid input.\n");
    }

    fn equation_solved(&mut self, solved: &SolvedEquation) {
        println!("Correct! The answer is: {}.", solved.answer);
        println!(
            "It took you {} seconds and {} attempts.",
            solved.solve_secs, solved.attempts
        );
        println!("Time left: {} seconds.", solved.time_left_secs);
        println!("Correct: {}.\n", solved.correct_total);
    }

    fn equation_abandoned(&mut self, abandoned: &AbandonedEquation) {
        println!("The answer was: {}.", abandoned.answer);
        println!("Time left: {} seconds.", abandoned.time_left_secs);
        println!("Correct: {}.\n", abandoned.correct_total);
    }
}

/// The final summary block.
pub fn print_results(report: &SessionReport) {
    println!(
        "Difficulty: {}({})",
        report.difficulty.name(),
        report.difficulty.code()
    );
    println!("Correct: {}.", report.correct);
    println!("Incorrect: {}.", report.incorrect);
    println!("Accuracy: {}%.", format_percent(report.accuracy_percent));
    match report.time_per_correct_ms {
        Some(ms) => println!("Average answer time: {ms} ms."),
        None => println!("Average answer time: N/A."),
    }
    println!();
}
