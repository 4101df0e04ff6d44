//! Per-tick frame assembly
use nalgebra::Point2;

use crate::depth::{depth_key, sort_back_to_front};
use crate::geometry::{Face, Solid};
use crate::projection::project;
use crate::transform::{rotation_matrix, RotationState};

/// One face of a rendered frame: the original face index, its projected
/// 2D outline, and its depth key. Owned by the frame that produced it and
/// replaced wholesale on the next tick.
#[derive(Debug, Clone)]
pub struct FrameFace {
    /// Index of the face in the solid's original face list. Styling that
    /// depends on face identity (e.g. progress coloring) keys off this,
    /// not the draw position.
    pub index: usize,
    /// Projected vertex ring, in winding order.
    pub points: Vec<Point2<f64>>,
    /// Depth-sort key; more negative is farther away.
    pub depth: i64,
}

/// The output of one tick: every face of the solid, projected and ordered
/// back to front.
#[derive(Debug, Clone)]
pub struct Frame {
    pub faces: Vec<FrameFace>,
}

impl Frame {
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// An immutable solid paired with its accumulated rotation.
///
/// Every frame is recomputed from the solid's base coordinates and the
/// current angles. The base is never overwritten with rotated output, so
/// repeated ticks cannot accumulate rounding drift.
#[derive(Debug, Clone)]
pub struct Scene {
    solid: Solid,
    rotation: RotationState,
}

impl Scene {
    pub fn new(solid: Solid) -> Self {
        Self {
            solid,
            rotation: RotationState::zero(),
        }
    }

    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Advances the accumulated rotation by per-tick degree deltas.
    pub fn advance(&mut self, dx: f64, dy: f64, dz: f64) {
        self.rotation.advance(dx, dy, dz);
    }

    /// Resets the accumulated rotation to zero.
    pub fn reset(&mut self) {
        self.rotation = RotationState::zero();
    }

    /// Renders the current frame: rotate every base face by the
    /// accumulated angles, project to 2D, key by depth, and sort back to
    /// front.
    pub fn frame(&self) -> Frame {
        let m = rotation_matrix(&self.rotation);
        let mut faces: Vec<FrameFace> = self
            .solid
            .faces()
            .iter()
            .enumerate()
            .map(|(index, base)| {
                let rotated = Face::new(base.vertices.iter().map(|&v| m * v).collect());
                FrameFace {
                    index,
                    depth: depth_key(&rotated),
                    points: rotated.vertices.iter().map(project).collect(),
                }
            })
            .collect();
        sort_back_to_front(&mut faces);
        Frame { faces }
    }
}
