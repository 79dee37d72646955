//! Word Tiles - CLI
//!
//! Word-guessing tile game with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use wordle_tiles::{
    commands::{check_guess, run_simple},
    game::{Dictionary, RandomPicker},
    output::{print_check_result, write_statistics},
    wordlists::loader::{embedded_dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_tiles",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Score a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => embedded_dictionary(),
        path => load_from_file(path),
    }
}

fn picker(seed: Option<u64>) -> RandomPicker {
    seed.map_or_else(RandomPicker::from_os, RandomPicker::seeded)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Check { guess, target } => run_check_command(&guess, &target),
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_play_command(&dictionary, cli.seed)
        }
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_simple_command(&dictionary, cli.seed)
        }
    }
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let checked = check_guess(guess, target)?;
    print_check_result(&checked.guess, &checked.target, &checked.result);
    Ok(())
}

fn run_simple_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    let stdin = io::stdin();
    let stats = run_simple(dictionary, &mut picker(seed), stdin.lock(), io::stdout())?;
    log::info!("Line mode finished after {} games", stats.games_played);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    use wordle_tiles::interactive::{App, run_tui};

    let app = App::new(dictionary, picker(seed));
    let stats = run_tui(app)?;
    if stats.games_played > 0 {
        write_statistics(&mut io::stdout(), &stats)?;
    }
    Ok(())
}
