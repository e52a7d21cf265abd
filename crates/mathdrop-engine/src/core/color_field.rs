use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::{
    grid::{GRID_SIZE, Position},
    shape::Shape,
};

/// An RGB color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Converts to 8-bit channels, clamping out-of-range values.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Uniform draw from `[0, 1)^3`, one independent value per channel.
impl Distribution<Rgb> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        Rgb::new(rng.random(), rng.random(), rng.random())
    }
}

/// Draws a random color for one successful placement.
pub fn generate_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    rng.random()
}

/// Per-cell colors aligned with [`Grid`](super::grid::Grid).
///
/// A color is only meaningful where the grid cell is occupied; every other
/// cell stays [`Rgb::WHITE`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorField {
    cells: [[Rgb; GRID_SIZE]; GRID_SIZE],
}

impl Default for ColorField {
    fn default() -> Self {
        Self::WHITE
    }
}

impl ColorField {
    pub const WHITE: Self = Self {
        cells: [[Rgb::WHITE; GRID_SIZE]; GRID_SIZE],
    };

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Rgb {
        self.cells[row][col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Paints every occupied cell of `shape` anchored at `position` with `color`.
    ///
    /// Must only be called for a placement the grid accepted.
    pub fn fill_shape(&mut self, shape: &Shape, position: Position, color: Rgb) {
        for (dr, dc) in shape.occupied_offsets() {
            self.cells[position.row() + dr][position.col() + dc] = color;
        }
    }

    #[must_use]
    pub fn is_all_white(&self) -> bool {
        self.rows().flatten().all(|&c| c == Rgb::WHITE)
    }
}
