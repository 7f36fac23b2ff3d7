//! Shape tests - templates and rotation.

use blockfall::core::{template, Shape};
use blockfall::types::PieceKind;

#[test]
fn test_catalog_has_seven_distinct_templates() {
    let shapes: Vec<Shape> = PieceKind::ALL.iter().map(|&k| template(k)).collect();

    for (i, a) in shapes.iter().enumerate() {
        for b in shapes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_every_template_has_four_occupied_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(template(kind).cells().count(), 4, "{kind:?}");
    }
}

#[test]
fn test_rotation_is_involutive_under_four_applications() {
    for kind in PieceKind::ALL {
        let original = template(kind);
        let mut shape = original.clone();
        for _ in 0..4 {
            shape = shape.rotated_cw();
        }
        assert_eq!(shape, original, "{kind:?}");
    }
}

#[test]
fn test_rotation_transposes_dimensions() {
    for kind in PieceKind::ALL {
        let shape = template(kind);
        let rotated = shape.rotated_cw();
        assert_eq!(rotated.width(), shape.height());
        assert_eq!(rotated.height(), shape.width());
    }
}

#[test]
fn test_l_rotation_matches_the_transform() {
    // [[1,1,1],
    //  [1,0,0]]  clockwise ->
    // [[1,1],
    //  [0,1],
    //  [0,1]]
    let rotated = template(PieceKind::L).rotated_cw();

    assert_eq!((rotated.width(), rotated.height()), (2, 3));
    let cells: Vec<_> = rotated.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_o_rotation_is_identity() {
    let o = template(PieceKind::O);
    assert_eq!(o.rotated_cw(), o);
}
