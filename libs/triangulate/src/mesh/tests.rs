use super::*;

fn unit_square() -> Mesh {
    let mut mesh = Mesh::new();
    for p in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]] {
        mesh.add_vertex(p).unwrap();
    }
    mesh
}

#[test]
fn test_counts() {
    let mut mesh = unit_square();
    mesh.add_face(vec![0, 1, 2, 3]);
    mesh.add_face(vec![0, 1, 2]);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 2);
    assert_eq!(mesh.triangle_count(), 3);
}

#[test]
fn test_add_vertex_returns_index() {
    let mut mesh = Mesh::new();
    assert_eq!(mesh.add_vertex([1.0, 2.0, 3.0]).unwrap(), 0);
    assert_eq!(mesh.add_vertex([4.0, 5.0, 6.0]).unwrap(), 1);
    assert_eq!(mesh.position(1), [4.0, 5.0, 6.0]);
}

#[test]
fn test_vertex_index_stops_at_u32() {
    let last = u32::MAX as usize;
    assert_eq!(vertex_index(last).unwrap(), u32::MAX);
    assert!(matches!(
        vertex_index(last + 1),
        Err(TriangulateError::TooManyVertices { count, max })
            if count == last + 2 && max == last + 1
    ));
}

#[test]
fn test_indices_map_back_to_mesh_vertices() {
    let mut mesh = unit_square();
    mesh.add_vertex([5.0, 5.0, 5.0]).unwrap(); // unused
    // Face lists the square starting from vertex 2.
    mesh.add_face(vec![2, 3, 0, 1]);

    let indices = mesh.triangulate().unwrap();
    assert_eq!(indices.len(), 6);
    assert!(indices.iter().all(|&i| i < 4));
    for v in 0..4 {
        assert!(indices.contains(&v));
    }
}

#[test]
fn test_faces_concatenate_in_order() {
    let mut mesh = unit_square();
    mesh.add_vertex([2.0, 0.0, 0.0]).unwrap();
    mesh.add_face(vec![1, 4, 2]);
    mesh.add_face(vec![0, 1, 2, 3]);

    let indices = mesh.triangulate().unwrap();
    assert_eq!(indices.len(), 9);
    let mut first = indices[..3].to_vec();
    first.sort_unstable();
    assert_eq!(first, vec![1, 2, 4]);
}

#[test]
fn test_out_of_bounds_face() {
    let mut mesh = unit_square();
    mesh.add_face(vec![0, 1, 9]);
    assert!(matches!(
        mesh.triangulate(),
        Err(TriangulateError::FaceIndexOutOfBounds {
            face: 0,
            index: 9,
            vertex_count: 4
        })
    ));
}

#[test]
fn test_degenerate_face_reports_position() {
    let mut mesh = unit_square();
    mesh.add_vertex([2.0, 0.0, 0.0]).unwrap();
    mesh.add_face(vec![0, 1, 2]);
    mesh.add_face(vec![0, 1, 4]);

    match mesh.triangulate() {
        Err(TriangulateError::FaceFailed { face, source }) => {
            assert_eq!(face, 1);
            assert!(matches!(*source, TriangulateError::DegenerateInput { .. }));
        }
        other => panic!("expected FaceFailed, got {other:?}"),
    }
}

#[test]
fn test_serializes_for_upload() {
    let mut mesh = unit_square();
    mesh.add_face(vec![0, 1, 2, 3]);
    let json = serde_json::to_value(&mesh).unwrap();
    assert_eq!(json["faces"][0].as_array().map(Vec::len), Some(4));
    assert_eq!(json["positions"].as_array().map(Vec::len), Some(12));

    let back: Mesh = serde_json::from_value(json).unwrap();
    assert_eq!(back, mesh);
}
