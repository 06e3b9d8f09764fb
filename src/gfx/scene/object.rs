use cgmath::{Matrix4, Quaternion, Vector3};

use crate::gfx::picking::AABB;
use crate::gfx::transform::{identity_rotation, WorldTransform};

/// A node in the scene with a local transform and local-space bounds.
///
/// The transform is stored decomposed so the controls can write position and
/// rotation independently, the way an editor would.
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
    /// Index of the parent object in the owning scene
    pub parent: Option<usize>,
    /// Bounds of the object's geometry in its own space
    pub bounds: AABB,
}

impl Object {
    /// Create a new Object with identity transformation and unit-cube bounds
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: identity_rotation(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            parent: None,
            bounds: AABB::unit(),
        }
    }

    pub fn with_bounds(mut self, bounds: AABB) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Quaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    /// Local transform as `T * R * S`
    pub fn local_matrix(&self) -> Matrix4<f32> {
        self.local_transform().to_matrix()
    }

    pub fn local_transform(&self) -> WorldTransform {
        WorldTransform::new(self.position, self.rotation, self.scale)
    }
}
