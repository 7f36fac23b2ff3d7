//! The active falling piece.

use blockfall_types::PieceKind;

use crate::shape::{template, Shape};

/// A falling piece: its shape matrix plus a grid offset. Mutation goes
/// through [`Piece::translated`] and [`Piece::rotated`], which build
/// candidates for the caller to validate and commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl Piece {
    /// New piece at the spawn position: horizontally centered (integer
    /// floor), top row.
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        let shape = template(kind);
        let x = (cols as i32 - shape.width() as i32) / 2;
        Self { kind, shape, x, y: 0 }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Candidate shifted by (dx, dy).
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Candidate rotated 90 degrees clockwise around the same offset.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self.clone()
        }
    }

    /// Absolute grid coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (px, py) = (self.x, self.y);
        self.shape.cells().map(move |(dx, dy)| (px + dx, py + dy))
    }
}
