//! In-process play statistics
//!
//! Nothing here is persisted; statistics live as long as the front end.

use super::session::{GameSession, GameState, MAX_ATTEMPTS};

/// Win/loss tally across the games played in one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// `guess_distribution[n]` counts wins in `n` guesses (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Record a finished session
    ///
    /// Sessions still in progress are ignored. Returns `true` if recorded.
    pub fn record(&mut self, session: &GameSession<'_>) -> bool {
        match session.state() {
            GameState::Playing => false,
            GameState::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                self.guess_distribution[session.history().len()] += 1;
                true
            }
            GameState::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
                true
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_percentage(&self) -> usize {
        if self.games_played == 0 {
            0
        } else {
            self.games_won * 100 / self.games_played
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Dictionary;

    fn finish<'a>(dictionary: &'a Dictionary, target: &str, guesses: &[&str]) -> GameSession<'a> {
        let mut session =
            GameSession::with_target(dictionary, Word::new(target).unwrap()).unwrap();
        for guess in guesses {
            for ch in guess.chars() {
                session.append_letter(ch);
            }
            session.submit();
        }
        session
    }

    #[test]
    fn in_progress_session_not_recorded() {
        let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
        let session = finish(&dictionary, "slate", &["crane"]);
        let mut stats = Statistics::default();
        assert!(!stats.record(&session));
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn wins_and_losses_update_streaks() {
        let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
        let mut stats = Statistics::default();

        stats.record(&finish(&dictionary, "slate", &["crane", "slate"]));
        stats.record(&finish(&dictionary, "crane", &["crane"]));
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.guess_distribution[1], 1);
        assert_eq!(stats.guess_distribution[2], 1);

        stats.record(&finish(&dictionary, "slate", &["crane"; MAX_ATTEMPTS]));
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.win_percentage(), 66);
    }

    #[test]
    fn empty_win_percentage() {
        assert_eq!(Statistics::default().win_percentage(), 0);
    }
}
