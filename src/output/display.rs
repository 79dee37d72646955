//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, result_to_emoji};
use crate::core::{GuessResult, Word};
use crate::game::{MAX_ATTEMPTS, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of checking one guess against one target
pub fn print_check_result(guess: &Word, target: &Word, result: &GuessResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_row(guess, result));
    println!("  {}  {result}", result_to_emoji(result));
}

/// Write the statistics block
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:          {}", stats.games_played)?;
    writeln!(out, "   Win %:           {}", stats.win_percentage())?;
    writeln!(out, "   Current streak:  {}", stats.current_streak)?;
    writeln!(out, "   Best streak:     {}", stats.best_streak)?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    writeln!(out, "\n📈 {}", "Guess distribution:".bright_cyan().bold())?;
    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count, most, 20);
        writeln!(out, "   {guesses}: {} {count}", bar.green())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_block_lists_every_row() {
        let stats = Statistics {
            games_played: 3,
            games_won: 2,
            current_streak: 1,
            best_streak: 2,
            guess_distribution: [0, 0, 1, 0, 1, 0, 0],
        };
        let mut out = Vec::new();
        write_statistics(&mut out, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Played:          3"));
        assert!(text.contains("Win %:           66"));
        for guesses in 1..=MAX_ATTEMPTS {
            assert!(text.contains(&format!("   {guesses}: ")));
        }
    }
}
