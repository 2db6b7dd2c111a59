//! Simple interactive CLI mode
//!
//! Text-based checker loop without TUI

use crate::checker::{CandidateFilter, Session};
use crate::output::formatters::colored_guess;
use crate::output::{print_candidates, print_constraints};
use colored::Colorize;
use std::io::{self, Write};

/// Candidates listed when the user asks for them
const LIST_LIMIT: usize = 64;

/// What the user typed at the guess prompt
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    New,
    Undo,
    List,
    Guess(&'a str),
}

fn parse_command(input: &str) -> Command<'_> {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::New,
        "undo" | "u" => Command::Undo,
        "" => Command::List,
        _ => Command::Guess(input),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(filter: CandidateFilter) -> Result<(), String> {
    let config = *filter.config();
    let title = format!("{} Checker - Interactive Mode", config.kind().name());
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{title:^62}║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess, then the colors the game showed for it:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use _/-/⬛ for gray (not in the solution)\n");
    println!("Press Enter on an empty guess to list possible solutions.");
    println!("Commands: 'undo' to drop the last try, 'new' for a new game, 'exit' to quit\n");

    let mut session = Session::new(filter);
    session.start();

    loop {
        let turn = session.tries().map_err(|e| e.to_string())?.len() + 1;
        let input = get_user_input(&format!("Guess {turn}"))?;

        let guess = match parse_command(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                session.end();
                return Ok(());
            }
            Command::New => {
                session.start();
                println!("\n🔄 New game started!\n");
                continue;
            }
            Command::Undo => {
                match session.undo().map_err(|e| e.to_string())? {
                    Some((guess, _)) => println!(
                        "✓ Removed {}. Back to guess {}\n",
                        guess.text().to_uppercase(),
                        turn - 1
                    ),
                    None => println!("Nothing to undo!\n"),
                }
                continue;
            }
            Command::List => {
                let candidates = session.possible_solutions().map_err(|e| e.to_string())?;
                println!(
                    "\n🎯 {} possible solutions",
                    candidates.len().to_string().bright_yellow().bold()
                );
                print_candidates(candidates, LIST_LIMIT);
                println!();
                print_constraints(session.constraints().map_err(|e| e.to_string())?);
                println!();
                continue;
            }
            Command::Guess(guess) => guess,
        };

        let code = get_user_input("Colors")?;
        if let Err(e) = session.add_try(guess, &code) {
            println!("{}\n", format!("❌ {e}").red());
            continue;
        }

        if let Some((guess, code)) = session.tries().map_err(|e| e.to_string())?.last() {
            println!("   {}", colored_guess(guess, code));
        }

        let remaining = session.possible_solutions().map_err(|e| e.to_string())?.len();
        if let Some(solution) = session.solution().map_err(|e| e.to_string())? {
            print_solved(solution.text(), &session)?;
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.start();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    session.end();
                    return Ok(());
                }
            }
        } else if remaining == 0 {
            println!(
                "{}",
                "\n❌ No candidates remain! A color code may be wrong.".red()
            );
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        } else {
            println!("   {remaining} possible solutions\n");
        }
    }
}

fn print_solved(solution: &str, session: &Session) -> Result<(), String> {
    let tries = session.tries().map_err(|e| e.to_string())?;

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        format!("    🎉  S O L V E D :  {}  🎉    ", solution.to_uppercase())
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solved in {} {}",
        tries.len().to_string().bright_cyan().bold(),
        if tries.len() == 1 { "try" } else { "tries" }
    );
    println!("\n  Tries:");
    for (i, (guess, code)) in tries.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.text().to_uppercase().bright_white().bold(),
            code.to_glyphs()
        );
    }
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("exit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognised() {
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("new"), Command::New);
        assert_eq!(parse_command("undo"), Command::Undo);
        assert_eq!(parse_command(""), Command::List);
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(parse_command("crane"), Command::Guess("crane"));
        assert_eq!(parse_command("11+5-7=9"), Command::Guess("11+5-7=9"));
    }
}
