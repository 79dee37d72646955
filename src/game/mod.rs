//! Game session layer
//!
//! Dictionary, target selection, the per-game state machine and run statistics.

mod dictionary;
mod picker;
mod session;
mod stats;

pub use dictionary::{Dictionary, DictionaryError};
pub use picker::{FixedPicker, RandomPicker, TargetPicker};
pub use session::{
    AcceptedGuess, EditOutcome, GameSession, GameState, MAX_ATTEMPTS, Rejection, SessionError,
    SubmitOutcome,
};
pub use stats::Statistics;
