//! The pyramid: four triangular faces, no base, no shared vertices.
//!
//! Winding is counter-clockwise as seen from outside each face. The render
//! pipeline culls back faces, so this ordering is a correctness invariant of
//! the data, not something checked at runtime.

use obelisk_engine::render::Vertex;

pub const PYRAMID_VERTICES: [Vertex; 12] = [
    // Front face (+Z).
    Vertex { position: [-0.5, 0.0, 0.5], color: [1.0, 0.0, 0.0] },
    Vertex { position: [0.5, 0.0, 0.5], color: [1.0, 1.0, 0.0] },
    Vertex { position: [0.0, 0.8, 0.0], color: [1.0, 0.0, 0.0] },
    // Left face (-X).
    Vertex { position: [-0.5, 0.0, -0.5], color: [0.0, 1.0, 0.0] },
    Vertex { position: [-0.5, 0.0, 0.5], color: [0.0, 1.0, 0.0] },
    Vertex { position: [0.0, 0.8, 0.0], color: [0.0, 1.0, 0.0] },
    // Back face (-Z).
    Vertex { position: [0.5, 0.0, -0.5], color: [0.0, 0.0, 1.0] },
    Vertex { position: [-0.5, 0.0, -0.5], color: [0.0, 0.0, 1.0] },
    Vertex { position: [0.0, 0.8, 0.0], color: [0.0, 0.0, 1.0] },
    // Right face (+X).
    Vertex { position: [0.5, 0.0, 0.5], color: [1.0, 0.0, 1.0] },
    Vertex { position: [0.5, 0.0, -0.5], color: [1.0, 0.0, 1.0] },
    Vertex { position: [0.0, 0.8, 0.0], color: [1.0, 0.0, 1.0] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn twelve_vertices_four_faces() {
        assert_eq!(PYRAMID_VERTICES.len(), 12);
    }

    #[test]
    fn byte_length_is_twelve_interleaved_float32_vertices() {
        let bytes: &[u8] = bytemuck::cast_slice(&PYRAMID_VERTICES);
        assert_eq!(bytes.len(), 12 * 6 * 4);
    }

    #[test]
    fn every_face_shares_the_apex() {
        for face in PYRAMID_VERTICES.chunks_exact(3) {
            assert_eq!(face[2].position, [0.0, 0.8, 0.0]);
        }
    }

    #[test]
    fn every_face_winds_counter_clockwise_seen_from_outside() {
        // A CCW-wound face has its normal pointing away from the interior.
        let interior = Vec3::new(0.0, 0.3, 0.0);

        for face in PYRAMID_VERTICES.chunks_exact(3) {
            let a = Vec3::from(face[0].position);
            let b = Vec3::from(face[1].position);
            let c = Vec3::from(face[2].position);

            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;

            assert!(
                normal.dot(centroid - interior) > 0.0,
                "face wound clockwise: {a:?} {b:?} {c:?}"
            );
        }
    }

    #[test]
    fn colors_are_in_unit_range() {
        for v in PYRAMID_VERTICES {
            for ch in v.color {
                assert!((0.0..=1.0).contains(&ch));
            }
        }
    }
}
