//! # World Transforms
//!
//! Decomposition of 4x4 affine matrices into position, rotation and scale.
//! The transform controls cache one [`WorldTransform`] per participant
//! (object, parent, camera) every frame and do all of their math against it.

use cgmath::{InnerSpace, Matrix3, Matrix4, Quaternion, SquareMatrix, Vector3};

/// Lengths below this are treated as zero when normalizing axes.
pub const EPSILON: f32 = 1e-6;

/// A matrix split into translation, rotation and (non-uniform) scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl WorldTransform {
    /// The identity transform
    pub fn identity() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: identity_rotation(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn new(position: Vector3<f32>, rotation: Quaternion<f32>, scale: Vector3<f32>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Decompose an affine matrix.
    ///
    /// A negative determinant is folded into the X scale. Axes with zero
    /// length keep an identity column so the rotation stays well formed.
    pub fn from_matrix(matrix: &Matrix4<f32>) -> Self {
        let position = matrix.w.truncate();

        let mut scale = Vector3::new(
            matrix.x.truncate().magnitude(),
            matrix.y.truncate().magnitude(),
            matrix.z.truncate().magnitude(),
        );
        if matrix.determinant() < 0.0 {
            scale.x = -scale.x;
        }

        let column = |axis: Vector3<f32>, length: f32, fallback: Vector3<f32>| {
            if length.abs() > EPSILON {
                axis / length
            } else {
                fallback
            }
        };
        let basis = Matrix3::from_cols(
            column(matrix.x.truncate(), scale.x, Vector3::unit_x()),
            column(matrix.y.truncate(), scale.y, Vector3::unit_y()),
            column(matrix.z.truncate(), scale.z, Vector3::unit_z()),
        );

        Self {
            position,
            rotation: Quaternion::from(basis).normalize(),
            scale,
        }
    }

    /// Recompose as `T * R * S`
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from(self.rotation)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Inverse of the (unit) rotation
    pub fn inverse_rotation(&self) -> Quaternion<f32> {
        self.rotation.normalize().conjugate()
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Unit quaternion with no rotation
pub fn identity_rotation() -> Quaternion<f32> {
    Quaternion::new(1.0, 0.0, 0.0, 0.0)
}

/// Normalize `v`, or return the zero vector when it has no usable length
pub fn normalize_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    let length = v.magnitude();
    if length > EPSILON {
        v / length
    } else {
        Vector3::new(0.0, 0.0, 0.0)
    }
}

/// `matrix` inverted, or identity when it is singular
pub fn invert_or_identity(matrix: &Matrix4<f32>) -> Matrix4<f32> {
    matrix.invert().unwrap_or_else(Matrix4::identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Rotation3};

    fn near(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-4
    }

    #[test]
    fn test_decompose_roundtrips_trs() {
        let rotation = Quaternion::from_angle_y(Deg(30.0)) * Quaternion::from_angle_x(Deg(10.0));
        let original = WorldTransform::new(
            Vector3::new(1.0, -2.0, 3.5),
            rotation,
            Vector3::new(2.0, 0.5, 1.5),
        );

        let decomposed = WorldTransform::from_matrix(&original.to_matrix());

        assert!(near(decomposed.position, original.position));
        assert!(near(decomposed.scale, original.scale));

        let probe = Vector3::new(0.3, 0.7, -0.2);
        assert!(near(decomposed.rotation * probe, rotation * probe));
    }

    #[test]
    fn test_zero_scale_axis_keeps_rotation_finite() {
        let matrix = Matrix4::from_nonuniform_scale(1.0, 0.0, 1.0);
        let decomposed = WorldTransform::from_matrix(&matrix);

        assert!(decomposed.rotation.s.is_finite());
        assert!(decomposed.rotation.v.x.is_finite());
        assert_eq!(decomposed.scale.y, 0.0);
    }

    #[test]
    fn test_inverse_rotation_undoes_rotation() {
        let transform = WorldTransform::new(
            Vector3::new(0.0, 0.0, 0.0),
            Quaternion::from_angle_z(Deg(75.0)),
            Vector3::new(1.0, 1.0, 1.0),
        );
        let v = Vector3::new(1.0, 2.0, 3.0);

        assert!(near(transform.inverse_rotation() * (transform.rotation * v), v));
    }

    #[test]
    fn test_normalize_or_zero() {
        assert_eq!(normalize_or_zero(Vector3::new(0.0, 0.0, 0.0)), Vector3::new(0.0, 0.0, 0.0));
        assert!(near(normalize_or_zero(Vector3::new(0.0, 3.0, 0.0)), Vector3::unit_y()));
    }
}
