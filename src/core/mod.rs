//! Core game logic for Word Scramble
//!
//! Pure validation and session state with no terminal or file I/O.

mod letters;
mod session;
mod submission;
mod validator;

pub use letters::{LetterPool, normalize};
pub use session::GameSession;
pub use submission::SubmissionResult;
pub use validator::{Validator, is_original, is_possible};
