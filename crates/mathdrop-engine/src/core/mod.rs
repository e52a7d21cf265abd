pub use self::{color_field::*, grid::*, shape::*};

pub(crate) mod color_field;
pub(crate) mod grid;
pub(crate) mod shape;
