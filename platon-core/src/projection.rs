//! Orthographic projection
use nalgebra::{Point2, Point3};

use crate::geometry::Face;

/// Projects a vertex to screen space by discarding its z coordinate.
/// No perspective divide, no clipping.
pub fn project(vertex: &Point3<f64>) -> Point2<f64> {
    Point2::new(vertex.x, vertex.y)
}

/// Projects every vertex of a face, preserving order.
pub fn project_face(face: &Face) -> Vec<Point2<f64>> {
    face.vertices.iter().map(project).collect()
}
