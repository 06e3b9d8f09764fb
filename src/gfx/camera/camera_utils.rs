use cgmath::Matrix4;

use crate::gfx::transform::{invert_or_identity, WorldTransform};

/// What the controls need from a camera: where it is and how it projects.
pub trait Camera {
    /// Projection * view, OpenGL clip conventions (NDC depth in [-1, 1])
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;

    /// View matrix (world to camera)
    fn build_view_matrix(&self) -> Matrix4<f32>;

    /// Camera to world; the inverse of the view matrix
    fn world_matrix(&self) -> Matrix4<f32> {
        invert_or_identity(&self.build_view_matrix())
    }

    /// Decomposed world transform of the camera
    fn world_transform(&self) -> WorldTransform {
        WorldTransform::from_matrix(&self.world_matrix())
    }
}
