//! Simple line-based play mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{
    Dictionary, GameSession, GameState, MAX_ATTEMPTS, Rejection, Statistics, SubmitOutcome,
    TargetPicker,
};
use crate::output::formatters::{colored_keyboard, colored_row, share_grid};
use crate::output::write_statistics;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What the player typed on one line
enum LineInput {
    Guess(String),
    NewGame,
    Quit,
    Invalid,
}

/// Run the line-based game until the player quits or input ends
///
/// Returns the statistics for the games finished during the run.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, W, P>(
    dictionary: &Dictionary,
    picker: &mut P,
    mut reader: R,
    mut out: W,
) -> Result<Statistics>
where
    R: BufRead,
    W: Write,
    P: TargetPicker,
{
    let mut stats = Statistics::default();

    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║          Word Tiles - Line Mode          ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word. After each guess every letter is coloured:"
    )?;
    writeln!(out, "  {} right letter, right spot", " G ".black().on_green())?;
    writeln!(out, "  {} in the word, wrong spot", " Y ".black().on_yellow())?;
    writeln!(out, "  {} not in the word", " X ".white().on_bright_black())?;
    writeln!(out, "Commands: ':new' for a new game, ':quit' to exit\n")?;

    'games: loop {
        let mut session = GameSession::new(dictionary, picker);

        while !session.is_over() {
            write!(out, "Guess {}/{}: ", session.current_row() + 1, MAX_ATTEMPTS)?;
            out.flush()?;

            let Some(line) = read_line(&mut reader)? else {
                break 'games;
            };

            match parse_line(&line) {
                LineInput::Quit => break 'games,
                LineInput::NewGame => {
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue 'games;
                }
                LineInput::Invalid => {
                    writeln!(out, "❌ Please enter exactly {WORD_LENGTH} letters.")?;
                }
                LineInput::Guess(word) => play_guess(&mut session, &word, &mut out)?,
            }
        }

        stats.record(&session);
        write_game_over(&session, &stats, &mut out)?;

        write!(out, "Play again? (yes/no): ")?;
        out.flush()?;
        match read_line(&mut reader)?.as_deref().map(str::to_lowercase).as_deref() {
            Some("yes" | "y") => writeln!(out, "\n🔄 New game started!\n")?,
            _ => break,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn play_guess<W: Write>(session: &mut GameSession<'_>, word: &str, out: &mut W) -> Result<()> {
    for ch in word.chars() {
        session.append_letter(ch);
    }

    match session.submit() {
        SubmitOutcome::Accepted(accepted) => {
            writeln!(out, "  {}", colored_row(&accepted.guess, &accepted.result))?;
            for row in colored_keyboard(&accepted.keyboard) {
                writeln!(out, "    {row}")?;
            }
        }
        SubmitOutcome::Rejected(reason) => {
            writeln!(out, "❌ {reason}")?;
            if reason == Rejection::NotInDictionary {
                while session.remove_letter().accepted {}
            }
        }
    }
    Ok(())
}

fn write_game_over<W: Write>(
    session: &GameSession<'_>,
    stats: &Statistics,
    out: &mut W,
) -> Result<()> {
    let target = session
        .revealed_target()
        .map(ToString::to_string)
        .unwrap_or_default();

    match session.state() {
        GameState::Won => {
            let guesses = session.history().len();
            let praise = match guesses {
                1 => "🏆 Genius!",
                2 => "⭐ Magnificent!",
                3 => "💫 Impressive!",
                4 => "✨ Splendid!",
                5 => "👍 Great!",
                _ => "😅 Phew!",
            };
            writeln!(out, "\n{} You won!", praise.bright_green().bold())?;
        }
        GameState::Lost => {
            writeln!(
                out,
                "\n{} The word was: {}",
                "Game over.".red().bold(),
                target.bright_yellow().bold()
            )?;
        }
        GameState::Playing => return Ok(()),
    }

    writeln!(out, "\n{}\n", share_grid(session))?;
    write_statistics(out, stats)?;
    writeln!(out)?;
    Ok(())
}

fn parse_line(line: &str) -> LineInput {
    match line.to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => LineInput::Quit,
        ":new" | ":n" => LineInput::NewGame,
        word if word.chars().count() == WORD_LENGTH
            && word.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            LineInput::Guess(word.to_string())
        }
        _ => LineInput::Invalid,
    }
}

/// Read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FixedPicker;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::new(["allow", "lolly", "crane", "slate", "mouth", "fight", "robot"]).unwrap()
    }

    fn play(input: &str) -> (Statistics, String) {
        let dictionary = dictionary();
        let mut output = Vec::new();
        let stats = run_simple(
            &dictionary,
            &mut FixedPicker(0),
            Cursor::new(input.to_string()),
            &mut output,
        )
        .unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_line_recognises_commands() {
        assert!(matches!(parse_line(":quit"), LineInput::Quit));
        assert!(matches!(parse_line(":Q"), LineInput::Quit));
        assert!(matches!(parse_line(":new"), LineInput::NewGame));
        assert!(matches!(parse_line("Crane"), LineInput::Guess(w) if w == "crane"));
        assert!(matches!(parse_line("cran"), LineInput::Invalid));
        assert!(matches!(parse_line("cr4ne"), LineInput::Invalid));
        assert!(matches!(parse_line(""), LineInput::Invalid));
    }

    #[test]
    fn immediate_quit() {
        let (stats, output) = play(":quit\n");
        assert_eq!(stats.games_played, 0);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_quits() {
        let (stats, _) = play("crane\n");
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn win_then_decline_replay() {
        let (stats, output) = play("crane\nallow\nno\n");
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!(output.contains("You won!"));
        assert!(output.contains("\n2/6\n"));
    }

    #[test]
    fn loss_reveals_word() {
        let (stats, output) = play("crane\nslate\nmouth\nfight\nrobot\nlolly\nno\n");
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
        assert!(output.contains("The word was:"));
        assert!(output.contains("ALLOW"));
        assert!(output.contains("X/6"));
    }

    #[test]
    fn unknown_word_does_not_use_an_attempt() {
        let (stats, output) = play("zzzzz\nallow\nno\n");
        assert!(output.contains("Not in word list"));
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn invalid_line_is_reported() {
        let (_, output) = play("abc\n:quit\n");
        assert!(output.contains("Please enter exactly 5 letters."));
    }

    #[test]
    fn play_again_runs_second_game() {
        let (stats, _) = play("allow\nyes\nallow\nno\n");
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn new_game_command_abandons_current_game() {
        let (stats, output) = play("crane\n:new\nallow\nno\n");
        assert!(output.contains("New game started"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }
}
