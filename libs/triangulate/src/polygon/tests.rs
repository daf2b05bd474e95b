use super::*;

const SQUARE: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];

#[test]
fn test_ring_links_wrap_around() {
    let polygon = Polygon::new(&SQUARE, 2).unwrap();
    assert_eq!(polygon.live_count(), 4);
    assert_eq!(polygon.vertex_count(), 4);
    assert_eq!(polygon.cursor(), 0);

    let first = polygon.get(0);
    assert_eq!((first.prev, first.next), (3, 1));
    let last = polygon.get(3);
    assert_eq!((last.prev, last.next), (2, 0));
}

#[test]
fn test_get_resolves_point_with_stride() {
    // x, y, u, v per vertex
    let attributes = [
        0.0, 0.0, 0.9, 0.9, //
        2.0, 0.0, 0.9, 0.9, //
        1.0, 3.0, 0.9, 0.9,
    ];
    let polygon = Polygon::new(&attributes, 4).unwrap();
    assert_eq!(polygon.get(1).point, Vec2::new(2.0, 0.0));
    assert_eq!(polygon.point(2), Vec2::new(1.0, 3.0));
}

#[test]
fn test_advance_follows_next() {
    let mut polygon = Polygon::new(&SQUARE, 2).unwrap();
    polygon.advance();
    assert_eq!(polygon.cursor(), 1);
    polygon.advance();
    polygon.advance();
    polygon.advance();
    assert_eq!(polygon.cursor(), 0);
}

#[test]
fn test_remove_triangle_splices_neighbours() {
    let mut polygon = Polygon::new(&SQUARE, 2).unwrap();
    polygon.advance(); // cursor = 1
    polygon.remove_triangle(2, 0);

    assert_eq!(polygon.live_count(), 3);
    assert_eq!(polygon.cursor(), 2);
    assert_eq!(polygon.get(0).next, 2);
    assert_eq!(polygon.get(2).prev, 0);
}

#[test]
fn test_live_indices_skip_removed() {
    let mut polygon = Polygon::new(&SQUARE, 2).unwrap();
    polygon.remove_triangle(1, 3); // remove 0, cursor = 1
    let live: Vec<usize> = polygon.live_indices().collect();
    assert_eq!(live, vec![1, 2, 3]);
    assert_eq!(polygon.live_indices().len(), 3);
}

#[test]
fn test_new_rejects_bad_stride() {
    let err = Polygon::new(&SQUARE, 1).unwrap_err();
    assert!(matches!(
        err,
        TriangulateError::InvalidStride { stride: 1, min: 2 }
    ));
}

#[test]
fn test_new_rejects_misaligned_buffer() {
    let err = Polygon::new(&SQUARE[..7], 2).unwrap_err();
    assert!(matches!(
        err,
        TriangulateError::MisalignedBuffer { len: 7, stride: 2 }
    ));
}

#[test]
fn test_new_rejects_too_few_vertices() {
    let err = Polygon::new(&SQUARE[..4], 2).unwrap_err();
    assert!(matches!(
        err,
        TriangulateError::InsufficientVertices { count: 2 }
    ));
}

#[test]
fn test_new_rejects_non_finite_position() {
    let mut attributes = SQUARE;
    attributes[4] = f32::NAN;
    assert!(matches!(
        Polygon::new(&attributes, 2),
        Err(TriangulateError::NonFiniteCoordinate { vertex: 2 })
    ));

    attributes[4] = 1.0;
    attributes[7] = f32::NEG_INFINITY;
    assert!(matches!(
        Polygon::new(&attributes, 2),
        Err(TriangulateError::NonFiniteCoordinate { vertex: 3 })
    ));
}

#[test]
fn test_extra_attributes_may_be_non_finite() {
    // x, y, w: only positions are checked
    let attributes = [
        0.0, 0.0, f32::NAN, //
        1.0, 0.0, f32::INFINITY, //
        0.0, 1.0, 0.0,
    ];
    assert!(Polygon::new(&attributes, 3).is_ok());
}

#[test]
fn test_backward_scan_starts_at_last_vertex() {
    let mut polygon = Polygon::with_direction(&SQUARE, 2, ScanDirection::Backward).unwrap();
    assert_eq!(polygon.direction(), ScanDirection::Backward);
    assert_eq!(polygon.cursor(), 3);
    polygon.advance();
    assert_eq!(polygon.cursor(), 2);
}

#[test]
fn test_backward_removal_moves_cursor_to_prev() {
    let mut polygon = Polygon::with_direction(&SQUARE, 2, ScanDirection::Backward).unwrap();
    polygon.remove_triangle(0, 2); // remove 3
    assert_eq!(polygon.cursor(), 2);
    assert_eq!(polygon.get(2).next, 0);
    assert_eq!(polygon.get(0).prev, 2);
}
