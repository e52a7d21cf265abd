use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// Maximum number of occupied cells in any catalog shape.
pub const MAX_SHAPE_CELLS: usize = 4;

/// Largest side of any catalog shape's bounding box.
const MAX_SHAPE_SIDE: usize = 4;

/// Occupancy pattern of a shape inside its bounding box, row-major.
type ShapeMatrix = [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];

/// Identity of one of the four shapes in the catalog.
///
/// The catalog is fixed and read-only. The player never picks a shape: the
/// session draws one uniformly at random for every placement attempt via the
/// [`StandardUniform`] distribution.
///
/// # Example
///
/// ```
/// use mathdrop_engine::ShapeKind;
///
/// let line: ShapeKind = "Line".parse().unwrap();
/// assert_eq!(line.shape().width(), 4);
/// assert_eq!(line.to_string(), "Line");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum ShapeKind {
    /// 2×2 full block.
    Square = 0,
    /// 3×2 "L" footprint.
    #[serde(rename = "L-shape")]
    LShape = 1,
    /// 2×3 "T" footprint.
    #[serde(rename = "T-shape")]
    TShape = 2,
    /// 1×4 full row.
    Line = 3,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        match rng.random_range(0..ShapeKind::LEN) {
            0 => ShapeKind::Square,
            1 => ShapeKind::LShape,
            2 => ShapeKind::TShape,
            _ => ShapeKind::Line,
        }
    }
}

impl ShapeKind {
    /// Number of shapes in the catalog (4).
    pub const LEN: usize = 4;

    /// All catalog entries in declaration order.
    pub const ALL: [ShapeKind; Self::LEN] = [
        ShapeKind::Square,
        ShapeKind::LShape,
        ShapeKind::TShape,
        ShapeKind::Line,
    ];

    /// Returns the immutable occupancy pattern of this shape.
    #[must_use]
    pub fn shape(self) -> &'static Shape {
        &SHAPES[self as usize]
    }

    /// Returns the human-readable catalog name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "Square",
            ShapeKind::LShape => "L-shape",
            ShapeKind::TShape => "T-shape",
            ShapeKind::Line => "Line",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown shape name: {name:?}")]
pub struct ParseShapeKindError {
    name: String,
}

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseShapeKindError { name: s.to_owned() })
    }
}

/// An immutable polyomino pattern: an H×W boolean matrix with H, W ≥ 1.
///
/// A cell value of `true` means "occupied". Shapes never rotate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    height: usize,
    width: usize,
    cells: ShapeMatrix,
}

impl Shape {
    const fn new(kind: ShapeKind, height: usize, width: usize, cells: ShapeMatrix) -> Self {
        assert!(height >= 1 && height <= MAX_SHAPE_SIDE);
        assert!(width >= 1 && width <= MAX_SHAPE_SIDE);
        Self {
            kind,
            height,
            width,
            cells,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Number of rows of the bounding box.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns of the bounding box.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns whether the cell at (`row`, `col`) of the bounding box is occupied.
    ///
    /// Cells outside the bounding box are reported as empty.
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row][col]
    }

    /// Returns the occupied `(row, col)` offsets relative to the anchor, row-major.
    #[must_use]
    pub fn occupied_offsets(&self) -> ArrayVec<(usize, usize), MAX_SHAPE_CELLS> {
        let mut offsets = ArrayVec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[row][col] {
                    offsets.push((row, col));
                }
            }
        }
        offsets
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.occupied_offsets().len()
    }
}

/// Returns the full shape catalog.
///
/// The catalog is process-wide and fixed at four entries.
#[must_use]
pub fn list_shapes() -> &'static [Shape; ShapeKind::LEN] {
    &SHAPES
}

static SHAPES: [Shape; ShapeKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    const EEEE: [bool; 4] = [E; 4];
    [
        Shape::new(
            ShapeKind::Square,
            2,
            2,
            [[C, C, E, E], [C, C, E, E], EEEE, EEEE],
        ),
        Shape::new(
            ShapeKind::LShape,
            3,
            2,
            [[C, E, E, E], [C, E, E, E], [C, C, E, E], EEEE],
        ),
        Shape::new(
            ShapeKind::TShape,
            2,
            3,
            [[E, C, E, E], [C, C, C, E], EEEE, EEEE],
        ),
        Shape::new(ShapeKind::Line, 1, 4, [[C, C, C, C], EEEE, EEEE, EEEE]),
    ]
};
