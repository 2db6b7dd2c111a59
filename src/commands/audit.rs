//! Checker self-audit
//!
//! Plays random games against many solutions, feeding evaluator output into
//! the accumulator, and verifies the true solution is never filtered out.

use crate::checker::{Accumulator, CandidateFilter, evaluate};
use crate::core::Guess;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Which solutions to audit and how many tries each game gets
#[derive(Debug, Clone, Copy)]
pub struct AuditConfig {
    pub limit: Option<usize>,
    pub sample: Option<usize>,
    pub tries_per_game: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            limit: None,
            sample: None,
            tries_per_game: 5,
        }
    }
}

/// A game in which the checker lost the real solution
#[derive(Debug, Clone)]
pub struct AuditViolation {
    pub solution: String,
    pub tries: Vec<String>,
    pub reason: String,
}

/// Outcome of one audited game
#[derive(Debug, Clone)]
struct GameAudit {
    remaining: Vec<usize>,
    solved: bool,
    violation: Option<AuditViolation>,
}

/// Statistics from auditing many games
#[derive(Debug)]
pub struct AuditStatistics {
    pub total_games: usize,
    pub solved_games: usize,
    pub violations: Vec<AuditViolation>,
    /// Average candidates left after try N (index 0 = after the first try)
    pub average_remaining: Vec<f64>,
    pub total_words: usize,
    pub total_time: Duration,
}

impl AuditStatistics {
    #[must_use]
    pub fn is_sound(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Audit the checker against the filter's own word list
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_audit(filter: &CandidateFilter, config: &AuditConfig) -> AuditStatistics {
    let words = filter.words();
    let solutions: Vec<&Guess> = match config.sample {
        Some(n) => words.choose_multiple(&mut rand::rng(), n).collect(),
        None => words
            .iter()
            .take(config.limit.unwrap_or(words.len()))
            .collect(),
    };

    println!("🔎 Auditing {} games...", solutions.len());

    let pb = ProgressBar::new(solutions.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let audits: Vec<GameAudit> = solutions
        .par_iter()
        .map(|&solution| {
            let mut rng = rand::rng();
            let guesses: Vec<&Guess> = (0..config.tries_per_game)
                .filter_map(|_| words.choose(&mut rng))
                .collect();
            let audit = audit_game(filter, solution, &guesses);
            pb.inc(1);
            audit
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(&audits, words.len(), start.elapsed())
}

/// Play `guesses` against `solution`, checking the solution survives each step
fn audit_game(filter: &CandidateFilter, solution: &Guess, guesses: &[&Guess]) -> GameAudit {
    let mut accumulator = Accumulator::new(*filter.config());
    let mut candidates = filter.filter(accumulator.constraints());
    let mut remaining = Vec::with_capacity(guesses.len());
    let mut played = Vec::with_capacity(guesses.len());

    let violation = |played: &[String], reason: String| AuditViolation {
        solution: solution.text().to_string(),
        tries: played.to_vec(),
        reason,
    };

    for &guess in guesses {
        let code = match evaluate(guess, solution) {
            Ok(code) => code,
            Err(e) => {
                return GameAudit {
                    remaining,
                    solved: false,
                    violation: Some(violation(&played, e.to_string())),
                };
            }
        };
        played.push(format!("{}/{code}", guess.text()));

        let solved = code.is_solved();
        if let Err(e) = accumulator.add(guess.clone(), code) {
            return GameAudit {
                remaining,
                solved: false,
                violation: Some(violation(&played, format!("try rejected: {e}"))),
            };
        }

        candidates = CandidateFilter::refine(candidates, accumulator.constraints());
        remaining.push(candidates.len());

        if !candidates.contains(&solution) {
            return GameAudit {
                remaining,
                solved: false,
                violation: Some(violation(&played, "solution filtered out".to_string())),
            };
        }
        if solved {
            return GameAudit {
                remaining,
                solved: true,
                violation: None,
            };
        }
    }

    GameAudit {
        remaining,
        solved: false,
        violation: None,
    }
}

fn summarize(audits: &[GameAudit], total_words: usize, total_time: Duration) -> AuditStatistics {
    let steps = audits.iter().map(|a| a.remaining.len()).max().unwrap_or(0);
    let average_remaining = (0..steps)
        .map(|step| {
            let counts: Vec<usize> = audits
                .iter()
                .filter_map(|a| a.remaining.get(step).copied())
                .collect();
            counts.iter().sum::<usize>() as f64 / counts.len() as f64
        })
        .collect();

    AuditStatistics {
        total_games: audits.len(),
        solved_games: audits.iter().filter(|a| a.solved).count(),
        violations: audits.iter().filter_map(|a| a.violation.clone()).collect(),
        average_remaining,
        total_words,
        total_time,
    }
}

/// Print audit statistics
pub fn print_audit_statistics(stats: &AuditStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUDIT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Audited:        {}", stats.total_games);
    println!("   Solved by luck: {}", stats.solved_games);
    println!("   Word list size: {}", stats.total_words);
    println!("   Time taken:     {:.2}s", stats.total_time.as_secs_f64());

    if !stats.average_remaining.is_empty() {
        println!("\n📉 {}", "Average candidates remaining:".bright_cyan().bold());
        for (i, avg) in stats.average_remaining.iter().enumerate() {
            println!("   After try {}: {avg:10.1}", i + 1);
        }
    }

    println!();
    if stats.is_sound() {
        println!(
            "{}",
            "✅ The solution survived every filtering step"
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ {} games lost their solution", stats.violations.len())
                .red()
                .bold()
        );
        for violation in stats.violations.iter().take(10) {
            println!(
                "   {} after {}: {}",
                violation.solution.to_uppercase().bright_yellow(),
                violation.tries.join(" "),
                violation.reason
            );
        }
    }
}
