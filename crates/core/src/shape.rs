//! Shape matrices and rotation.
//!
//! A shape is a small rectangular 0/1 matrix. The seven templates are
//! immutable; rotation never mutates, it produces a new matrix.

use arrayvec::ArrayVec;

use blockfall_types::PieceKind;

/// Maximum side length of any shape matrix (the I piece, rotated).
const MAX_SIDE: usize = 4;

/// Rectangular 0/1 matrix stored row-major in an inline buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    cells: ArrayVec<u8, { MAX_SIDE * MAX_SIDE }>,
}

impl Shape {
    /// Build a shape from row slices. All rows must have the same length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let width = rows.first().map_or(0, |row| row.len());
        debug_assert!(rows.iter().all(|row| row.len() == width));

        let mut cells = ArrayVec::new();
        for row in rows {
            cells.extend(row.iter().copied());
        }
        Self { width, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.cells.len() / self.width
        }
    }

    /// Value at (x, y). Callers stay within `width x height`.
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    /// Offsets of the occupied cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(move |(i, _)| ((i % w) as i32, (i / w) as i32))
    }

    /// 90 degrees clockwise: an RxC source becomes CxR, with
    /// `result[i][j] = source[R-1-j][i]` (transpose, then reverse rows).
    pub fn rotated_cw(&self) -> Self {
        let w = self.width;
        let h = self.height();

        let mut cells = ArrayVec::new();
        for row in 0..w {
            for col in 0..h {
                cells.push(self.cells[(h - 1 - col) * w + row]);
            }
        }
        Self { width: h, cells }
    }
}

/// The immutable shape template for a piece kind.
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => Shape::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        PieceKind::S => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_rectangular() {
        for kind in PieceKind::ALL {
            let shape = template(kind);
            assert!(shape.width() > 0);
            assert!(shape.height() > 0);
            assert_eq!(shape.cells.len(), shape.width() * shape.height());
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let i = template(PieceKind::I);
        assert_eq!((i.width(), i.height()), (4, 1));

        let rotated = i.rotated_cw();
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
        assert_eq!(rotated.cells().count(), 4);
    }

    #[test]
    fn test_rotation_of_t_points_left() {
        // [[1,1,1],
        //  [0,1,0]]  rotated clockwise becomes
        // [[0,1],
        //  [1,1],
        //  [0,1]]
        let rotated = template(PieceKind::T).rotated_cw();
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
        assert_eq!(rotated.at(0, 0), 0);
        assert_eq!(rotated.at(1, 0), 1);
        assert_eq!(rotated.at(0, 1), 1);
        assert_eq!(rotated.at(1, 1), 1);
        assert_eq!(rotated.at(0, 2), 0);
        assert_eq!(rotated.at(1, 2), 1);
    }

    #[test]
    fn test_four_rotations_restore_the_original() {
        for kind in PieceKind::ALL {
            let original = template(kind);
            let back = original
                .rotated_cw()
                .rotated_cw()
                .rotated_cw()
                .rotated_cw();
            assert_eq!(back, original, "{kind:?} did not survive four rotations");
        }
    }

    #[test]
    fn test_cells_yields_occupied_offsets_only() {
        let t = template(PieceKind::T);
        let cells: Vec<_> = t.cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
    }
}
