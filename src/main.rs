//! Wordle Checker - CLI
//!
//! Scores guesses and narrows the list of possible solutions for Wordle and
//! Nerdle, with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_checker::{
    checker::CandidateFilter,
    commands::{
        AuditConfig, filter_words, print_audit_statistics, replay_game, run_audit, run_simple,
        score_guesses,
    },
    core::{GameConfig, GameKind, Guess},
    output::{print_filter_result, print_record, print_score_result},
    wordlists::loader::{builtin, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_checker",
    about = "Wordle and Nerdle guess checker: scores guesses and narrows the possible solutions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game: wordle (default, 5 letters) or nerdle (8 character equations)
    #[arg(short, long, global = true, default_value = "wordle")]
    game: String,

    /// Wordlist: 'builtin' (default) or path to a file with one entry per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive checker without TUI)
    Simple,

    /// Score guesses against a known solution
    Score {
        /// The solution
        solution: String,

        /// Guesses to score
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Narrow the word list by tries given as GUESS/CODE (e.g. CRANE/_Y__G)
    Filter {
        /// Tries in the order they were played
        #[arg(required = true)]
        tries: Vec<String>,

        /// Most candidates to list
        #[arg(short, long, default_value = "100")]
        limit: usize,
    },

    /// Replay a finished game and print its transcript and log line
    Replay {
        /// The solution of the game
        solution: String,

        /// Tries in the order they were played
        #[arg(required = true)]
        tries: Vec<String>,

        /// Date of the game
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Check that no game ever filters out its own solution
    Audit {
        /// Audit only the first N solutions of the list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Audit N randomly chosen solutions instead
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,

        /// Random tries played per game
        #[arg(short, long, default_value = "5")]
        tries: usize,
    },
}

/// Load candidates based on the -w flag
///
/// - "builtin": the embedded list for the chosen game
/// - "<path>": one entry per line, invalid entries skipped
fn load_words(wordlist: &str, config: &GameConfig) -> Result<Vec<Guess>> {
    let words = match wordlist {
        "builtin" => words_from_slice(builtin(config.kind()), config),
        path => load_from_file(path, config)?,
    };

    if words.is_empty() {
        anyhow::bail!(
            "No valid {} entries in word list '{wordlist}'",
            config.kind().name()
        );
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let kind: GameKind = cli.game.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let config = kind.config();
    let words = load_words(&cli.wordlist, &config)?;
    let filter = CandidateFilter::new(config, &words);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(filter),
        Commands::Simple => run_simple(filter).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { solution, guesses } => {
            let result =
                score_guesses(config, &solution, &guesses).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Filter { tries, limit } => {
            let result = filter_words(filter, &tries).map_err(|e| anyhow::anyhow!(e))?;
            print_filter_result(&result, limit);
            Ok(())
        }
        Commands::Replay {
            solution,
            tries,
            date,
        } => {
            let record =
                replay_game(config, date, &solution, &tries).map_err(|e| anyhow::anyhow!(e))?;
            print_record(&record);
            Ok(())
        }
        Commands::Audit {
            limit,
            sample,
            tries,
        } => {
            run_audit_command(&filter, limit, sample, tries);
            Ok(())
        }
    }
}

fn run_audit_command(
    filter: &CandidateFilter,
    limit: Option<usize>,
    sample: Option<usize>,
    tries: usize,
) {
    println!("\n{}", "═".repeat(70));
    println!(" {} Checker Audit ", filter.config().kind().name());
    println!("{}", "═".repeat(70));
    println!("\nAuditing against {} candidates", filter.words().len());
    println!("Random tries per game: {tries}");
    println!();

    let config = AuditConfig {
        limit,
        sample,
        tries_per_game: tries,
    };
    let stats = run_audit(filter, &config);
    print_audit_statistics(&stats);
}

fn run_play_command(filter: CandidateFilter) -> Result<()> {
    use wordle_checker::interactive::{App, run_tui};

    let app = App::new(filter);
    run_tui(app)
}
