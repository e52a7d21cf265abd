use crate::{Shape, ShapeKind};

/// Score and drop accounting for one session.
///
/// - **Score**: one point per grid cell filled by a successful drop
/// - **Drop count**: number of successful drops; drives the challenge gate
///
/// Rejected attempts and challenge answers never touch either counter. Both
/// return to zero when the session resets.
///
/// # Example
///
/// ```
/// use mathdrop_engine::{GameStats, ShapeKind};
///
/// let mut stats = GameStats::new();
/// stats.complete_drop(ShapeKind::Line.shape());
///
/// assert_eq!(stats.score(), 4);
/// assert_eq!(stats.drop_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    drop_count: usize,
    shape_counter: [usize; ShapeKind::LEN],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            drop_count: 0,
            shape_counter: [0; ShapeKind::LEN],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the number of successful drops so far.
    #[must_use]
    pub const fn drop_count(&self) -> usize {
        self.drop_count
    }

    /// Returns how many times each catalog shape was dropped, indexed by
    /// `ShapeKind as usize`.
    #[must_use]
    pub const fn shape_counter(&self) -> &[usize; ShapeKind::LEN] {
        &self.shape_counter
    }

    /// Records one successful drop of `shape`.
    pub fn complete_drop(&mut self, shape: &Shape) {
        self.drop_count += 1;
        self.score += shape.cell_count();
        self.shape_counter[shape.kind() as usize] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let stats = GameStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.drop_count(), 0);
        assert_eq!(stats.shape_counter(), &[0; ShapeKind::LEN]);
    }

    #[test]
    fn test_complete_drop_counts_each_shape() {
        let mut stats = GameStats::new();
        stats.complete_drop(ShapeKind::Square.shape());
        stats.complete_drop(ShapeKind::TShape.shape());
        stats.complete_drop(ShapeKind::TShape.shape());

        assert_eq!(stats.drop_count(), 3);
        assert_eq!(stats.score(), 12);
        assert_eq!(stats.shape_counter(), &[1, 0, 2, 0]);
    }
}
