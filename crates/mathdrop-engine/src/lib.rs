pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Why a shape could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    #[display("shape extends past the edge of the grid")]
    OutOfBounds,
    #[display("shape overlaps an occupied cell")]
    Overlap,
}
