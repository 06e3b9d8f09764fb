//! # Interaction Plane
//!
//! The invisible plane a drag is projected onto. It is rebuilt from the mode,
//! the space and the frame cache every time it is needed and never stored
//! across frames.
//!
//! - translate: the plane is horizontal (in the chosen space), so drags slide
//!   the object over the ground
//! - elevate: the plane contains the vertical axis and turns to face the camera
//! - rotate: the plane faces the camera directly
//!
//! Whenever the construction degenerates (zero-length direction vector) the
//! plane falls back to facing the camera.

use cgmath::{InnerSpace, Matrix3, Quaternion, Vector3};

use crate::gfx::picking::{Plane, Ray, RayHit, Raycast};
use crate::gfx::transform::EPSILON;

use super::state::{FrameCache, Mode, Space};

/// A finite, double sided square plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionPlane {
    /// Center of the plane, the object's world position
    pub origin: Vector3<f32>,
    /// Local +Z is the plane normal
    pub orientation: Quaternion<f32>,
    /// Half of the edge length
    pub half_extent: f32,
}

impl InteractionPlane {
    /// Build the plane for `mode` in `space` from one frame snapshot
    pub fn orient(mode: Mode, space: Space, cache: &FrameCache, extent: f32) -> Self {
        let basis = space.basis_rotation(cache);
        let unit_y = basis * Vector3::unit_y();
        let unit_z = basis * Vector3::unit_z();

        let (align, direction) = match mode {
            Mode::Translate => (unit_z, unit_y),
            Mode::Elevate => {
                // Only the direction of `align` matters; look_rotation normalizes.
                let align = cache.eye.cross(unit_y);
                (align, unit_y.cross(align))
            }
            Mode::Rotate => (unit_y, Vector3::new(0.0, 0.0, 0.0)),
        };

        let orientation = if direction.magnitude() < EPSILON {
            cache.camera.rotation
        } else {
            look_rotation(direction, align)
        };

        Self {
            origin: cache.world.position,
            orientation,
            half_extent: extent * 0.5,
        }
    }

    pub fn normal(&self) -> Vector3<f32> {
        self.orientation * Vector3::unit_z()
    }
}

impl Raycast for InteractionPlane {
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let hit = Plane::new(self.origin, self.normal()).raycast(ray)?;

        let local = hit.point - self.origin;
        let u = local.dot(self.orientation * Vector3::unit_x());
        let v = local.dot(self.orientation * Vector3::unit_y());
        if u.abs() > self.half_extent || v.abs() > self.half_extent {
            return None;
        }

        Some(hit)
    }
}

/// Rotation whose -Z points along `direction`, with +Y as close to `up` as possible
fn look_rotation(direction: Vector3<f32>, up: Vector3<f32>) -> Quaternion<f32> {
    let mut z = -direction.normalize();
    let mut x = up.cross(z);

    if x.magnitude() < EPSILON {
        // `up` is parallel to the view direction; nudge z off the axis
        if (up.z.abs() - 1.0).abs() < EPSILON {
            z.x += 1e-4;
        } else {
            z.z += 1e-4;
        }
        z = z.normalize();
        x = up.cross(z);
    }

    if x.magnitude() < EPSILON {
        // `up` itself was unusable; any perpendicular basis spans the same plane
        x = if z.x.abs() < 0.9 {
            Vector3::unit_x().cross(z)
        } else {
            Vector3::unit_y().cross(z)
        };
    }

    let x = x.normalize();
    let y = z.cross(x);

    Quaternion::from(Matrix3::from_cols(x, y, z)).normalize()
}
