//! Display functions for command results

use super::formatters::{colored_guess, format_char_set, format_columns, format_fixed};
use crate::checker::{ConstraintSet, GameRecord};
use crate::commands::{FilterResult, ScoreResult};
use crate::core::Guess;
use colored::Colorize;

/// Words per row when listing candidates
const CANDIDATE_COLUMNS: usize = 8;

/// Print every scored guess with its color code
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solution: {}",
        result.solution.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (guess, code)) in result.scores.iter().enumerate() {
        println!(
            "\n{}. {}  {}  {}",
            i + 1,
            guess.to_uppercase(),
            code,
            code.to_glyphs()
        );
    }

    println!();
    if result.solved() {
        println!("{}", "✅ Solution guessed!".green().bold());
    }
}

/// Print the narrowing steps and remaining candidates of a filter run
pub fn print_filter_result(result: &FilterResult, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "FILTER RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 Starting with {} words", result.total_words);
    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTry {}: {} {}",
            i + 1,
            step.guess.to_uppercase(),
            step.code.to_glyphs()
        );
        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );
    }

    println!();
    if let Some(solution) = &result.solution {
        println!(
            "{}",
            format!("✅ Solved: {}", solution.to_uppercase()).green().bold()
        );
        return;
    }

    match result.candidates.len() {
        0 => println!(
            "{}",
            "❌ No candidates remain! Check the color codes.".red().bold()
        ),
        n => {
            println!(
                "🎯 {} possible solution{}:",
                n.to_string().bright_yellow().bold(),
                if n == 1 { "" } else { "s" }
            );
            let shown = &result.candidates[..n.min(limit)];
            for row in shown.chunks(CANDIDATE_COLUMNS) {
                let row: Vec<String> = row.iter().map(|w| w.to_uppercase()).collect();
                println!("   {}", row.join("  "));
            }
            if n > limit {
                println!(
                    "   {}",
                    format!("... and {} more", n - limit).bright_black()
                );
            }
        }
    }
}

/// Print a game record transcript followed by its log line
pub fn print_record(record: &GameRecord) {
    println!("\n{record}\n");
    for (guess, code) in record.tries().iter().zip(record.results()) {
        println!("  {}", colored_guess(guess, code));
    }
    println!(
        "\n  Score: {}{}",
        record.score().to_string().bright_cyan().bold(),
        if record.is_solved() { "" } else { " (unsolved)" }
    );
    println!("\n{}", record.to_line().bright_black());
}

/// Print the constraints derived so far
pub fn print_constraints(constraints: &ConstraintSet) {
    println!(
        "  Fixed:    {}",
        format_fixed(constraints.fixed()).bright_green()
    );
    println!(
        "  Required: {}",
        format_char_set(constraints.required()).bright_yellow()
    );
    println!(
        "  Excluded: {}",
        format_char_set(constraints.excluded()).bright_black()
    );
    for position in 0..constraints.length() {
        let set = constraints.position_excluded(position);
        if !set.is_empty() {
            println!("  Not at {}: {}", position + 1, format_char_set(set));
        }
    }
}

/// Print candidate words in columns
pub fn print_candidates(candidates: &[&Guess], limit: usize) {
    let shown = &candidates[..candidates.len().min(limit)];
    for row in format_columns(shown, CANDIDATE_COLUMNS) {
        println!("  {row}");
    }
    if candidates.len() > limit {
        println!(
            "  {}",
            format!("... and {} more", candidates.len() - limit).bright_black()
        );
    }
}
