use rand::Rng as _;

use crate::core::grid::Position;

use super::{
    game_seed::GameSeed,
    game_session::{AnswerOutcome, DropOutcome, GameSession},
};

/// Owns the lifecycle of at most one [`GameSession`].
///
/// This is the boundary a front end talks to: every user action maps onto
/// exactly one method, and the session is never mutated any other way.
///
/// - [`init`](Self::init) creates a fresh session
/// - [`reset`](Self::reset) restarts the current session in place
/// - [`quit`](Self::quit) destroys it; the next cell selection starts a new one
///
/// The first session uses the seed given to [`with_seed`](Self::with_seed),
/// later ones draw a new random seed.
#[derive(Debug, Default)]
pub struct SessionController {
    session: Option<GameSession>,
    next_seed: Option<GameSeed>,
}

impl SessionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self {
            session: None,
            next_seed: Some(seed),
        }
    }

    /// Returns the live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Replaces any live session with a fresh one.
    pub fn init(&mut self) -> &mut GameSession {
        self.session.insert(start_session(&mut self.next_seed))
    }

    /// Resets the live session in place, or starts one if none exists.
    pub fn reset(&mut self) {
        if let Some(session) = &mut self.session {
            session.reset();
        } else {
            self.init();
        }
    }

    /// Destroys the live session.
    pub fn quit(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(
                seed = %session.seed(),
                score = session.score(),
                drop_count = session.drop_count(),
                "session quit"
            );
        }
    }

    /// Handles a click on cell (`row`, `col`).
    ///
    /// Coordinates outside the board are rejected by the placement rules like
    /// any other out-of-bounds anchor.
    pub fn on_cell_selected(&mut self, row: usize, col: usize) -> DropOutcome {
        self.session
            .get_or_insert_with(|| start_session(&mut self.next_seed))
            .attempt_drop(Position::new(row, col))
    }

    /// Forwards a challenge answer; `None` means nothing was entered.
    pub fn on_challenge_answered(&mut self, answer: Option<i32>) -> AnswerOutcome {
        self.session
            .as_mut()
            .map_or(AnswerOutcome::NoChallenge, |session| {
                session.answer_challenge(answer)
            })
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.session.as_ref().map_or(0, GameSession::score)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_game_over)
    }
}

fn start_session(next_seed: &mut Option<GameSeed>) -> GameSession {
    let seed = next_seed.take().unwrap_or_else(|| rand::rng().random());
    tracing::info!(%seed, "session started");
    GameSession::with_seed(seed)
}
