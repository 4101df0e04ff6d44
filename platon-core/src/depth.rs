//! Depth keys and painter's-algorithm ordering
use crate::frame::FrameFace;
use crate::geometry::Face;

/// Fixed point scale applied to a face's z-sum before truncation.
///
/// 2^12 is exactly representable, so the multiply is exact in binary
/// floating point. At the default display scale of 128 the largest face
/// z-sum is a few hundred, keeping keys far inside `i64` while resolving
/// depth differences of 1/4096 of a coordinate unit.
pub const DEPTH_KEY_SCALE: f64 = 4096.0;

/// Scalar proxy for a face's distance along the viewing axis: the sum of
/// its transformed z coordinates, scaled and truncated toward zero.
/// More negative keys are farther from the viewer.
pub fn depth_key(face: &Face) -> i64 {
    (face.z_sum() * DEPTH_KEY_SCALE) as i64
}

/// Sorts faces ascending by depth key, farthest first, yielding the
/// back-to-front draw order for painter's-algorithm compositing.
///
/// The sort is stable: faces with equal keys keep their prior relative
/// order, so draw order stays deterministic.
pub fn sort_back_to_front(faces: &mut [FrameFace]) {
    faces.sort_by_key(|face| face.depth);
}
