// Integration tests for whole games
// These drive sessions through the public API only

use std::io::Cursor;
use wordle_tiles::commands::run_simple;
use wordle_tiles::core::{Letter, LetterVerdict, Word, evaluate};
use wordle_tiles::game::{
    Dictionary, EditOutcome, FixedPicker, GameSession, GameState, MAX_ATTEMPTS, RandomPicker,
    Rejection, SubmitOutcome,
};
use wordle_tiles::wordlists::loader::embedded_dictionary;

/// One recorded step of a scripted game
#[derive(Debug, PartialEq)]
enum Step {
    Edit(EditOutcome),
    Submit(SubmitOutcome),
}

fn replay(session: &mut GameSession<'_>, script: &str) -> Vec<Step> {
    script
        .chars()
        .map(|c| match c {
            '<' => Step::Edit(session.remove_letter()),
            '\n' => Step::Submit(session.submit()),
            c => Step::Edit(session.append_letter(c)),
        })
        .collect()
}

#[test]
fn same_script_same_outcomes() {
    let dictionary = embedded_dictionary().unwrap();
    let script = "cranx<e\nzzzzz\n<<<<<sl\nate\nallow\nlolly\nworld\nmouth\nfight\nextra\n";

    let mut first = GameSession::new(&dictionary, &mut RandomPicker::seeded(7));
    let mut second = GameSession::new(&dictionary, &mut RandomPicker::seeded(7));

    let a = replay(&mut first, script);
    let b = replay(&mut second, script);
    assert_eq!(a, b);
    assert_eq!(first.history(), second.history());
    assert_eq!(first.state(), second.state());
}

#[test]
fn full_game_against_embedded_dictionary() {
    let dictionary = embedded_dictionary().unwrap();
    let target = Word::new("allow").unwrap();
    let mut session = GameSession::with_target(&dictionary, target.clone()).unwrap();

    replay(&mut session, "lolly\n");
    let (guess, result) = &session.history()[0];
    assert_eq!(*result, evaluate(guess, &target));
    assert_eq!(
        result.verdicts(),
        &[
            LetterVerdict::Present,
            LetterVerdict::Present,
            LetterVerdict::Correct,
            LetterVerdict::Absent,
            LetterVerdict::Absent
        ]
    );

    let steps = replay(&mut session, "allow\n");
    let Some(Step::Submit(SubmitOutcome::Accepted(accepted))) = steps.last() else {
        panic!("Expected accepted submission, got {steps:?}");
    };
    assert_eq!(accepted.state, GameState::Won);
    assert_eq!(accepted.row_index, 1);
    assert_eq!(accepted.keyboard.get(Letter::A), Some(LetterVerdict::Correct));
    assert_eq!(accepted.keyboard.get(Letter::Y), Some(LetterVerdict::Absent));
}

#[test]
fn never_both_won_and_lost() {
    let dictionary = Dictionary::new(["crane", "slate", "allow"]).unwrap();

    for target in ["crane", "slate", "allow"] {
        let mut session = GameSession::with_target(&dictionary, Word::new(target).unwrap()).unwrap();
        for _ in 0..MAX_ATTEMPTS {
            replay(&mut session, "crane\n");
        }
        let won = session.history().iter().any(|(g, _)| g.text() == target.to_uppercase());
        match session.state() {
            GameState::Won => assert!(won),
            GameState::Lost => {
                assert!(!won);
                assert_eq!(session.history().len(), MAX_ATTEMPTS);
            }
            GameState::Playing => panic!("Session for {target} never finished"),
        }
    }
}

#[test]
fn rejected_submissions_change_nothing() {
    let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
    let mut session = GameSession::new(&dictionary, &mut FixedPicker(1));

    let steps = replay(&mut session, "xylop\n");
    assert_eq!(
        steps.last(),
        Some(&Step::Submit(SubmitOutcome::Rejected(Rejection::NotInDictionary)))
    );
    assert_eq!(session.buffer(), "XYLOP");
    assert_eq!(session.current_row(), 0);
    assert_eq!(session.keyboard().known().count(), 0);
}

#[test]
fn line_mode_plays_seeded_game() {
    let dictionary = Dictionary::new(["crane"]).unwrap();
    let mut output = Vec::new();
    let stats = run_simple(
        &dictionary,
        &mut RandomPicker::seeded(1),
        Cursor::new("CRANE\nn\n"),
        &mut output,
    )
    .unwrap();

    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.guess_distribution[1], 1);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("You won!"));
    assert!(text.contains("🟩🟩🟩🟩🟩"));
}
