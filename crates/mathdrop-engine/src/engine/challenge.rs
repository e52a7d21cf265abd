use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Number of successful drops between two challenges.
pub const CHALLENGE_INTERVAL: usize = 5;

/// Smallest operand a challenge uses.
pub const MIN_OPERAND: i32 = 1;
/// Largest operand a challenge uses.
pub const MAX_OPERAND: i32 = 10;

/// Returns whether a challenge is due after the drop that brought the counter
/// to `drop_count`.
///
/// Due on every positive multiple of [`CHALLENGE_INTERVAL`].
#[must_use]
pub fn is_challenge_due(drop_count: usize) -> bool {
    drop_count > 0 && drop_count % CHALLENGE_INTERVAL == 0
}

/// Arithmetic operator of a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
        }
    }

    /// Applies the operator. Subtraction may go negative.
    #[must_use]
    pub const fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
        }
    }
}

impl Distribution<Operator> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Operator {
        match rng.random_range(0..3) {
            0 => Operator::Add,
            1 => Operator::Subtract,
            _ => Operator::Multiply,
        }
    }
}

/// A periodic arithmetic question gating continued play.
///
/// # Example
///
/// ```
/// use mathdrop_engine::{Challenge, Operator, Verdict};
///
/// let challenge = Challenge::new(3, Operator::Subtract, 7);
/// assert_eq!(challenge.prompt(), "What is 3 - 7?");
/// assert_eq!(challenge.expected_answer(), -4);
///
/// assert_eq!(challenge.judge(None), Verdict::Unanswered);
/// assert_eq!(challenge.judge(Some(-4)), Verdict::Correct);
/// assert_eq!(challenge.judge(Some(0)), Verdict::Incorrect);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Challenge {
    lhs: i32,
    operator: Operator,
    rhs: i32,
}

impl Challenge {
    #[must_use]
    pub const fn new(lhs: i32, operator: Operator, rhs: i32) -> Self {
        Self { lhs, operator, rhs }
    }

    #[must_use]
    pub const fn lhs(&self) -> i32 {
        self.lhs
    }

    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub const fn rhs(&self) -> i32 {
        self.rhs
    }

    #[must_use]
    pub const fn expected_answer(&self) -> i32 {
        self.operator.apply(self.lhs, self.rhs)
    }

    /// Human-readable question, e.g. `What is 4 * 9?`.
    #[must_use]
    pub fn prompt(&self) -> String {
        self.to_string()
    }

    /// Judges a supplied answer.
    ///
    /// `None` means the player has not answered yet, which is never treated as
    /// a wrong answer, whatever value an input widget shows by default.
    #[must_use]
    pub fn judge(&self, answer: Option<i32>) -> Verdict {
        match answer {
            None => Verdict::Unanswered,
            Some(answer) if answer == self.expected_answer() => Verdict::Correct,
            Some(_) => Verdict::Incorrect,
        }
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "What is {} {} {}?",
            self.lhs,
            self.operator.symbol(),
            self.rhs
        )
    }
}

/// Draws operands independently and uniformly from
/// [`MIN_OPERAND`]`..=`[`MAX_OPERAND`] and the operator uniformly.
impl Distribution<Challenge> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Challenge {
        let lhs = rng.random_range(MIN_OPERAND..=MAX_OPERAND);
        let rhs = rng.random_range(MIN_OPERAND..=MAX_OPERAND);
        let operator = rng.random();
        Challenge::new(lhs, operator, rhs)
    }
}

/// Generates a fresh random challenge.
pub fn generate_challenge<R: Rng + ?Sized>(rng: &mut R) -> Challenge {
    rng.random()
}

/// Result of judging an answer against a [`Challenge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Unanswered,
    Correct,
    Incorrect,
}
