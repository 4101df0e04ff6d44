//! Rotation state and vertex transformation
use nalgebra::Matrix3;

use crate::geometry::Face;

/// Degrees to radians.
const DEG: f64 = std::f64::consts::PI / 180.0;

/// Accumulated rotation around the three axes, in degrees.
///
/// Accumulators are unbounded; the trigonometric functions are periodic so
/// no wraparound is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Adds per-tick degree deltas. Pure accumulation, no clamping.
    pub fn advance(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Builds the 3-2-1 Euler rotation matrix for the accumulated angles.
pub fn rotation_matrix(rotation: &RotationState) -> Matrix3<f64> {
    let (sin_x, cos_x) = (rotation.x * DEG).sin_cos();
    let (sin_y, cos_y) = (rotation.y * DEG).sin_cos();
    let (sin_z, cos_z) = (rotation.z * DEG).sin_cos();

    Matrix3::new(
        cos_y * cos_z,
        sin_x * sin_y * cos_z - cos_x * sin_z,
        cos_x * sin_y * cos_z + sin_x * sin_z,
        cos_y * sin_z,
        sin_x * sin_y * sin_z + cos_x * cos_z,
        cos_x * sin_y * sin_z - sin_x * cos_z,
        -sin_y,
        sin_x * cos_y,
        cos_x * cos_y,
    )
}

/// Rotates every vertex of a base face by the accumulated angles, returning
/// a new face with the same vertex count and order.
///
/// Callers must pass the solid's immutable base face each tick, never the
/// previous tick's output: composing already-rotated coordinates
/// accumulates rounding error and visibly shrinks the solid over time.
pub fn rotate_face(face: &Face, rotation: &RotationState) -> Face {
    let m = rotation_matrix(rotation);
    Face::new(face.vertices.iter().map(|&v| m * v).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_rotation_state_accumulates() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.advance(1.0, 2.0, -3.0);
        state.advance(1.0, 2.0, -3.0);
        assert!((state.x - 2.0).abs() < 1e-12);
        assert!((state.y - 4.0).abs() < 1e-12);
        assert!((state.z + 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = rotation_matrix(&RotationState::zero());
        assert!((matrix - Matrix3::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_zero_rotation_preserves_face() {
        let face = Face::new(vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-4.0, 5.0, -6.0),
            Point3::new(7.0, -8.0, 9.0),
        ]);
        let rotated = rotate_face(&face, &RotationState::zero());
        for (a, b) in face.vertices.iter().zip(&rotated.vertices) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn test_full_turn_round_trip() {
        let face = Face::new(vec![
            Point3::new(128.0, 0.0, 0.0),
            Point3::new(0.0, 128.0, 0.0),
            Point3::new(0.0, 0.0, 128.0),
        ]);
        for state in [
            RotationState::new(360.0, 0.0, 0.0),
            RotationState::new(0.0, 360.0, 0.0),
            RotationState::new(0.0, 0.0, 360.0),
            RotationState::new(720.0, -360.0, 360.0),
        ] {
            let rotated = rotate_face(&face, &state);
            for (a, b) in face.vertices.iter().zip(&rotated.vertices) {
                assert!((a - b).norm() < 1e-9, "state {state:?}");
            }
        }
    }

    #[test]
    fn test_quarter_turn_about_x() {
        // +90 degrees about X keeps x, maps y to -z and z to y.
        let face = Face::new(vec![Point3::new(1.0, 1.0, 1.0)]);
        let rotated = rotate_face(&face, &RotationState::new(90.0, 0.0, 0.0));
        let v = rotated.vertices[0];
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!((v.y + 1.0).abs() < 1e-12);
        assert!((v.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cube_corner_quarter_turn() {
        use crate::geometry::{Solid, SolidKind};

        // Cube scaled so (1,1,1) is a corner; a quarter turn about X
        // carries it to (1,-1,1).
        let solid = Solid::build(SolidKind::Hexahedron, 3.0_f64.sqrt());
        let corner = Point3::new(1.0, 1.0, 1.0);
        let face = solid
            .faces()
            .iter()
            .find(|f| f.vertices.iter().any(|v| (v - corner).norm() < 1e-9))
            .unwrap();

        let rotated = rotate_face(face, &RotationState::new(90.0, 0.0, 0.0));
        let expected = Point3::new(1.0, -1.0, 1.0);
        assert!(rotated
            .vertices
            .iter()
            .any(|v| (v - expected).norm() < 1e-9));
    }

    #[test]
    fn test_rotation_preserves_radius() {
        let vertex = Point3::new(3.0, -4.0, 12.0);
        let face = Face::new(vec![vertex]);
        let radius = vertex.coords.norm();

        let mut state = RotationState::zero();
        for _ in 0..5_000 {
            state.advance(1.0, 1.0, 0.5);
            let rotated = rotate_face(&face, &state);
            let r = rotated.vertices[0].coords.norm();
            assert!((r - radius).abs() < 1e-9);
        }
    }
}
