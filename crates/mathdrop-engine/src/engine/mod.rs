//! Session rules built on top of the board data structures.
//!
//! - [`GameSession`] - One play session: board, colors, counters, challenge gate
//! - [`SessionController`] - Lifecycle boundary (init, reset, quit) for front ends
//! - [`GameStats`] - Score and drop counter
//! - [`Challenge`] - Arithmetic question issued every [`CHALLENGE_INTERVAL`] drops
//! - [`GameSeed`] - Seed for deterministic shapes, colors and challenges
//!
//! # Game Flow
//!
//! 1. The player selects a cell; a random catalog shape is anchored there
//! 2. If it fits, it is written to the board in one random color
//! 3. Every fifth successful drop issues a challenge that must be answered
//!    before the next drop; a wrong answer restarts the session
//! 4. Once a shape touches the top row the game is over until reset
//!
//! # Example
//!
//! ```
//! use mathdrop_engine::{AnswerOutcome, DropOutcome, SessionController};
//!
//! let mut controller = SessionController::new();
//!
//! match controller.on_cell_selected(9, 0) {
//!     DropOutcome::Placed(placement) => {
//!         println!("placed {} at {:?}", placement.shape, placement.position);
//!     }
//!     DropOutcome::Rejected { reason, .. } => println!("rejected: {reason}"),
//!     DropOutcome::GameOverAlready | DropOutcome::AwaitingAnswer => {}
//! }
//!
//! // Nothing was entered yet, so nothing happens.
//! assert!(matches!(
//!     controller.on_challenge_answered(None),
//!     AnswerOutcome::NoChallenge | AnswerOutcome::Unanswered
//! ));
//! ```

pub use self::{
    challenge::*, game_seed::*, game_session::*, game_stats::*, session_controller::*,
};

mod challenge;
mod game_seed;
mod game_session;
mod game_stats;
mod session_controller;
