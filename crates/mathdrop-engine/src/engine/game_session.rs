use rand::Rng as _;
use rand_pcg::Pcg32;

use crate::{
    PlacementError,
    core::{
        color_field::{ColorField, Rgb, generate_color},
        grid::{Grid, Position},
        shape::ShapeKind,
    },
};

use super::{
    GameStats,
    challenge::{Challenge, Verdict, generate_challenge, is_challenge_due},
    game_seed::GameSeed,
};

/// Phase of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// Cell selections are accepted.
    Playing,
    /// A challenge was issued and must be answered before the next drop.
    AwaitingAnswer(Challenge),
    /// The top row is occupied; only reset or quit are possible.
    GameOver,
}

/// A successful drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub shape: ShapeKind,
    pub position: Position,
    pub color: Rgb,
    /// Challenge issued by this drop, if the drop count reached a multiple of
    /// the challenge interval and the game is not over.
    pub challenge: Option<Challenge>,
    pub game_over: bool,
}

/// Result of one cell selection.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum DropOutcome {
    Placed(Placement),
    /// The drawn shape did not fit; nothing changed.
    Rejected {
        shape: ShapeKind,
        position: Position,
        reason: PlacementError,
    },
    /// The session is over; nothing changed.
    GameOverAlready,
    /// A challenge is pending; nothing changed.
    AwaitingAnswer,
}

/// Result of submitting a challenge answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum AnswerOutcome {
    /// No challenge was pending.
    NoChallenge,
    /// No answer was supplied; the challenge stays pending.
    Unanswered,
    /// Correct answer; play continues.
    Correct,
    /// Wrong answer; the whole session was reset.
    Failed { expected: i32 },
}

/// One play session: board, colors, counters, challenge gate and random source.
///
/// Every external event is processed to completion in a fixed order:
/// validate the placement, apply it (grid, colors, counters), consult the
/// challenge gate, then re-evaluate game over.
///
/// # Example
///
/// ```
/// use mathdrop_engine::{DropOutcome, GameSession, Position, ShapeKind};
///
/// let mut session = GameSession::new();
/// let outcome = session.attempt_drop_with(ShapeKind::Square, Position::new(8, 0));
///
/// assert!(outcome.is_placed());
/// assert_eq!(session.drop_count(), 1);
/// assert_eq!(session.score(), 4);
///
/// // The same cells are taken now.
/// let outcome = session.attempt_drop_with(ShapeKind::Line, Position::new(8, 0));
/// assert!(matches!(outcome, DropOutcome::Rejected { .. }));
/// assert_eq!(session.drop_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    colors: ColorField,
    stats: GameStats,
    session_state: SessionState,
    seed: GameSeed,
    rng: Pcg32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session seeded from the thread-local random generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but every random draw derives from `seed`.
    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self {
            grid: Grid::EMPTY,
            colors: ColorField::WHITE,
            stats: GameStats::new(),
            session_state: SessionState::Playing,
            seed,
            rng: seed.rng(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn colors(&self) -> &ColorField {
        &self.colors
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn drop_count(&self) -> usize {
        self.stats.drop_count()
    }

    #[must_use]
    pub fn session_state(&self) -> &SessionState {
        &self.session_state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session_state.is_game_over()
    }

    #[must_use]
    pub fn pending_challenge(&self) -> Option<&Challenge> {
        match &self.session_state {
            SessionState::AwaitingAnswer(challenge) => Some(challenge),
            _ => None,
        }
    }

    /// Seed the session was created with.
    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    /// Restores the initial board, colors, counters and phase in place.
    ///
    /// The random stream continues; it is not reseeded.
    pub fn reset(&mut self) {
        self.grid = Grid::EMPTY;
        self.colors = ColorField::WHITE;
        self.stats = GameStats::new();
        self.session_state = SessionState::Playing;
        tracing::info!(seed = %self.seed, "session reset");
    }

    /// Drops a randomly drawn catalog shape with its top-left corner at `position`.
    pub fn attempt_drop(&mut self, position: Position) -> DropOutcome {
        if let Some(outcome) = self.refuse_drop() {
            return outcome;
        }
        let shape = self.rng.random();
        self.apply_drop(shape, position)
    }

    /// Like [`Self::attempt_drop`], but with a caller-chosen shape.
    pub fn attempt_drop_with(&mut self, shape: ShapeKind, position: Position) -> DropOutcome {
        if let Some(outcome) = self.refuse_drop() {
            return outcome;
        }
        self.apply_drop(shape, position)
    }

    /// Judges `answer` against the pending challenge.
    ///
    /// `None` is "not answered yet" and leaves everything untouched. A wrong
    /// answer resets the whole session.
    pub fn answer_challenge(&mut self, answer: Option<i32>) -> AnswerOutcome {
        let SessionState::AwaitingAnswer(challenge) = self.session_state else {
            return AnswerOutcome::NoChallenge;
        };
        match challenge.judge(answer) {
            Verdict::Unanswered => AnswerOutcome::Unanswered,
            Verdict::Correct => {
                tracing::info!(%challenge, ?answer, "challenge passed");
                self.session_state = SessionState::Playing;
                AnswerOutcome::Correct
            }
            Verdict::Incorrect => {
                let expected = challenge.expected_answer();
                tracing::info!(%challenge, ?answer, expected, "challenge failed");
                self.reset();
                AnswerOutcome::Failed { expected }
            }
        }
    }

    fn refuse_drop(&mut self) -> Option<DropOutcome> {
        self.sync_game_over();
        match self.session_state {
            SessionState::Playing => None,
            SessionState::AwaitingAnswer(_) => Some(DropOutcome::AwaitingAnswer),
            SessionState::GameOver => Some(DropOutcome::GameOverAlready),
        }
    }

    fn sync_game_over(&mut self) {
        if !self.session_state.is_game_over() && self.grid.is_game_over() {
            self.session_state = SessionState::GameOver;
        }
    }

    fn apply_drop(&mut self, kind: ShapeKind, position: Position) -> DropOutcome {
        let shape = kind.shape();
        if let Err(reason) = self.grid.check_placement(shape, position) {
            tracing::debug!(%kind, ?position, %reason, "drop rejected");
            return DropOutcome::Rejected {
                shape: kind,
                position,
                reason,
            };
        }

        self.grid.place(shape, position);
        let color = generate_color(&mut self.rng);
        self.colors.fill_shape(shape, position, color);
        self.stats.complete_drop(shape);
        tracing::debug!(%kind, ?position, drop_count = self.drop_count(), "drop placed");

        let mut challenge =
            is_challenge_due(self.drop_count()).then(|| generate_challenge(&mut self.rng));

        let game_over = self.grid.is_game_over();
        if game_over {
            tracing::info!(
                score = self.score(),
                drop_count = self.drop_count(),
                "game over"
            );
            self.session_state = SessionState::GameOver;
            challenge = None;
        } else if let Some(challenge) = challenge {
            tracing::info!(%challenge, drop_count = self.drop_count(), "challenge issued");
            self.session_state = SessionState::AwaitingAnswer(challenge);
        }

        DropOutcome::Placed(Placement {
            shape: kind,
            position,
            color,
            challenge,
            game_over,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::GRID_SIZE;

    use super::*;

    const SEED: GameSeed = GameSeed::from_bytes([
        0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
        0x88,
    ]);

    /// Twenty disjoint square anchors that never touch the top row.
    fn square_slots() -> impl Iterator<Item = Position> {
        [1, 3, 5, 7]
            .into_iter()
            .flat_map(|row| [0, 2, 4, 6, 8].into_iter().map(move |col| Position::new(row, col)))
    }

    fn answer_correctly(session: &mut GameSession) {
        let expected = session.pending_challenge().unwrap().expected_answer();
        assert_eq!(session.answer_challenge(Some(expected)), AnswerOutcome::Correct);
    }

    fn assert_pristine(session: &GameSession) {
        assert_eq!(session.grid(), &Grid::EMPTY);
        assert!(session.colors().is_all_white());
        assert_eq!(session.score(), 0);
        assert_eq!(session.drop_count(), 0);
        assert!(!session.is_game_over());
        assert_eq!(session.session_state(), &SessionState::Playing);
    }

    #[test]
    fn test_new_session_is_pristine() {
        assert_pristine(&GameSession::with_seed(SEED));
    }

    #[test]
    fn test_square_at_origin() {
        let mut session = GameSession::with_seed(SEED);
        let outcome = session.attempt_drop_with(ShapeKind::Square, Position::new(0, 0));

        let DropOutcome::Placed(placement) = outcome else {
            panic!("expected placement, got {outcome:?}");
        };
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(session.grid().cell(row, col), 1);
            assert_eq!(session.colors().cell(row, col), placement.color);
        }
        assert_eq!(session.grid().occupied_count(), 4);
        assert_eq!(session.drop_count(), 1);
        assert!(placement.game_over);
    }

    #[test]
    fn test_overlap_leaves_session_untouched() {
        let mut session = GameSession::with_seed(SEED);
        session.attempt_drop_with(ShapeKind::Square, Position::new(4, 4));
        let grid = session.grid().clone();
        let colors = session.colors().clone();

        let outcome = session.attempt_drop_with(ShapeKind::Line, Position::new(4, 2));
        assert_eq!(
            outcome,
            DropOutcome::Rejected {
                shape: ShapeKind::Line,
                position: Position::new(4, 2),
                reason: PlacementError::Overlap,
            }
        );
        assert_eq!(session.grid(), &grid);
        assert_eq!(session.colors(), &colors);
        assert_eq!(session.drop_count(), 1);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn test_out_of_bounds_rejected_for_every_shape() {
        let mut session = GameSession::with_seed(SEED);
        for kind in ShapeKind::ALL {
            let shape = kind.shape();
            let past_right = Position::new(5, GRID_SIZE - shape.width() + 1);
            let past_bottom = Position::new(GRID_SIZE - shape.height() + 1, 0);
            for position in [past_right, past_bottom] {
                let outcome = session.attempt_drop_with(kind, position);
                assert!(
                    matches!(
                        outcome,
                        DropOutcome::Rejected {
                            reason: PlacementError::OutOfBounds,
                            ..
                        }
                    ),
                    "{kind} at {position:?}: {outcome:?}"
                );
            }
        }
        assert_pristine(&session);
    }

    #[test]
    fn test_challenge_every_fifth_drop() {
        let mut session = GameSession::with_seed(SEED);
        for (index, position) in square_slots().enumerate() {
            let DropOutcome::Placed(placement) =
                session.attempt_drop_with(ShapeKind::Square, position)
            else {
                panic!("slot {position:?} should be free");
            };
            let drop_count = index + 1;
            assert_eq!(session.drop_count(), drop_count);
            assert_eq!(placement.challenge.is_some(), drop_count % 5 == 0);
            if let Some(challenge) = placement.challenge {
                assert_eq!(session.pending_challenge(), Some(&challenge));
                answer_correctly(&mut session);
            }
        }
        assert_eq!(session.score(), 80);
    }

    #[test]
    fn test_drops_refused_while_challenge_pending() {
        let mut session = GameSession::with_seed(SEED);
        let mut slots = square_slots();
        for position in slots.by_ref().take(5) {
            session.attempt_drop_with(ShapeKind::Square, position);
        }
        let grid = session.grid().clone();

        let next = slots.next().unwrap();
        assert_eq!(
            session.attempt_drop_with(ShapeKind::Square, next),
            DropOutcome::AwaitingAnswer
        );
        assert_eq!(session.attempt_drop(next), DropOutcome::AwaitingAnswer);
        assert_eq!(session.grid(), &grid);
        assert_eq!(session.drop_count(), 5);
    }

    #[test]
    fn test_unanswered_keeps_challenge() {
        let mut session = GameSession::with_seed(SEED);
        for position in square_slots().take(5) {
            session.attempt_drop_with(ShapeKind::Square, position);
        }
        let challenge = *session.pending_challenge().unwrap();

        assert_eq!(session.answer_challenge(None), AnswerOutcome::Unanswered);
        assert_eq!(session.pending_challenge(), Some(&challenge));
        assert_eq!(session.drop_count(), 5);
    }

    #[test]
    fn test_wrong_answer_resets_everything() {
        let mut session = GameSession::with_seed(SEED);
        for position in square_slots().take(5) {
            session.attempt_drop_with(ShapeKind::Square, position);
        }
        let expected = session.pending_challenge().unwrap().expected_answer();

        assert_eq!(
            session.answer_challenge(Some(expected + 1)),
            AnswerOutcome::Failed { expected }
        );
        assert_pristine(&session);
        assert_eq!(session.pending_challenge(), None);
    }

    #[test]
    fn test_correct_answer_continues_play() {
        let mut session = GameSession::with_seed(SEED);
        for position in square_slots().take(5) {
            session.attempt_drop_with(ShapeKind::Square, position);
        }
        let grid = session.grid().clone();
        answer_correctly(&mut session);

        assert_eq!(session.grid(), &grid);
        assert_eq!(session.drop_count(), 5);
        assert_eq!(session.score(), 20);
        assert_eq!(session.answer_challenge(Some(0)), AnswerOutcome::NoChallenge);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut session = GameSession::with_seed(SEED);
        let outcome = session.attempt_drop_with(ShapeKind::Line, Position::new(0, 3));
        assert!(matches!(
            outcome,
            DropOutcome::Placed(Placement {
                game_over: true,
                ..
            })
        ));
        assert!(session.is_game_over());

        let grid = session.grid().clone();
        assert_eq!(
            session.attempt_drop_with(ShapeKind::Square, Position::new(5, 5)),
            DropOutcome::GameOverAlready
        );
        assert_eq!(
            session.attempt_drop(Position::new(5, 5)),
            DropOutcome::GameOverAlready
        );
        assert_eq!(session.grid(), &grid);
        assert_eq!(session.drop_count(), 1);

        session.reset();
        assert_pristine(&session);
        assert!(session.attempt_drop_with(ShapeKind::Square, Position::new(5, 5)).is_placed());
    }

    #[test]
    fn test_game_over_discards_due_challenge() {
        let mut session = GameSession::with_seed(SEED);
        for position in square_slots().take(4) {
            session.attempt_drop_with(ShapeKind::Square, position);
        }
        let outcome = session.attempt_drop_with(ShapeKind::Line, Position::new(0, 0));
        let DropOutcome::Placed(placement) = outcome else {
            panic!("expected placement, got {outcome:?}");
        };
        assert_eq!(session.drop_count(), 5);
        assert!(placement.game_over);
        assert_eq!(placement.challenge, None);
        assert_eq!(session.session_state(), &SessionState::GameOver);
    }

    #[test]
    fn test_random_drops_keep_grid_binary() {
        let mut session = GameSession::with_seed(SEED);
        for row in (1..GRID_SIZE).rev() {
            for col in 0..GRID_SIZE {
                let before = session.drop_count();
                match session.attempt_drop(Position::new(row, col)) {
                    DropOutcome::Placed(_) => assert_eq!(session.drop_count(), before + 1),
                    DropOutcome::Rejected { .. } => assert_eq!(session.drop_count(), before),
                    DropOutcome::AwaitingAnswer => answer_correctly(&mut session),
                    DropOutcome::GameOverAlready => unreachable!("row 0 is never targeted"),
                }
                assert!(session.grid().rows().flatten().all(|&c| c <= 1));
            }
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameSession::with_seed(SEED);
        let mut b = GameSession::with_seed(SEED);
        for row in (1..GRID_SIZE).rev() {
            for col in 0..GRID_SIZE {
                let position = Position::new(row, col);
                let outcome = a.attempt_drop(position);
                assert_eq!(outcome, b.attempt_drop(position));
                if outcome.is_awaiting_answer() {
                    answer_correctly(&mut a);
                    answer_correctly(&mut b);
                }
            }
        }
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.colors(), b.colors());
        assert_eq!(a.stats(), b.stats());
    }
}
