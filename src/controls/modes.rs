//! # Per-Mode Transform Math
//!
//! One function per [`Mode`]. Each takes the press-time snapshot held in a
//! [`ManipulationSession`] plus the current plane intersection and returns the
//! object's new local position or rotation. Results never depend on earlier
//! frames of the same drag, only on the snapshot, so replaying a pointer path
//! always lands on the same transform.

use cgmath::{InnerSpace, MetricSpace, Quaternion, Rad, Rotation3, Vector3};

use crate::gfx::scene::Object;
use crate::gfx::transform::{WorldTransform, EPSILON};

use super::state::{FrameCache, Mode, Space};

/// Snapshot taken when a drag starts. Immutable for the drag's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManipulationSession {
    /// Plane hit at press time, relative to `world_position_start`
    pub point_start: Vector3<f32>,
    pub world_position_start: Vector3<f32>,
    pub world_quaternion_start: Quaternion<f32>,
    pub world_scale_start: Vector3<f32>,
    /// Local position at press time
    pub position_start: Vector3<f32>,
    /// Local rotation at press time
    pub quaternion_start: Quaternion<f32>,
}

impl ManipulationSession {
    /// Snapshot `object` (whose world transform is `world`) for a drag that
    /// started at `hit_point` on the interaction plane.
    pub fn begin(hit_point: Vector3<f32>, world: &WorldTransform, object: &Object) -> Self {
        Self {
            point_start: hit_point - world.position,
            world_position_start: world.position,
            world_quaternion_start: world.rotation,
            world_scale_start: world.scale,
            position_start: object.position,
            quaternion_start: object.rotation,
        }
    }

    /// Express a plane hit the same way `point_start` is expressed
    pub fn relative_point(&self, hit_point: Vector3<f32>) -> Vector3<f32> {
        hit_point - self.world_position_start
    }
}

/// Everything one frame of a drag needs
#[derive(Debug, Clone, Copy)]
pub struct DragContext<'a> {
    pub session: &'a ManipulationSession,
    /// Current plane hit, relative to the press-time world position
    pub point_end: Vector3<f32>,
    pub space: Space,
    pub cache: &'a FrameCache,
    pub translation_snap: Option<f32>,
    /// Radians
    pub rotation_snap: Option<f32>,
    pub rotation_sensitivity: f32,
}

/// New local transform component for the dragged object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformDelta {
    Position(Vector3<f32>),
    Rotation(Quaternion<f32>),
}

impl TransformDelta {
    /// Write the result into the object. Returns false when nothing changed.
    pub fn apply(&self, object: &mut Object) -> bool {
        match *self {
            TransformDelta::Position(position) => {
                let changed = object.position != position;
                object.position = position;
                changed
            }
            TransformDelta::Rotation(rotation) => {
                let changed = object.rotation != rotation;
                object.rotation = rotation;
                changed
            }
        }
    }
}

impl Mode {
    /// Run this mode's computation. `None` means the frame is skipped.
    pub fn compute_delta(self, ctx: &DragContext) -> Option<TransformDelta> {
        match self {
            Mode::Translate => Some(translate(ctx)),
            Mode::Elevate => Some(elevate(ctx)),
            Mode::Rotate => rotate(ctx),
        }
    }
}

/// Round to the nearest multiple of `step`; halves round toward +infinity
pub fn snap(value: f32, step: f32) -> f32 {
    (value / step + 0.5).floor() * step
}

/// Horizontal move: the Y component of the offset is dropped
pub fn translate(ctx: &DragContext) -> TransformDelta {
    TransformDelta::Position(planar_move(ctx, Mode::Translate))
}

/// Vertical move: the X and Z components of the offset are dropped
pub fn elevate(ctx: &DragContext) -> TransformDelta {
    TransformDelta::Position(planar_move(ctx, Mode::Elevate))
}

fn planar_move(ctx: &DragContext, mode: Mode) -> Vector3<f32> {
    let session = ctx.session;
    let parent = &ctx.cache.parent;

    let mut offset = ctx.point_end - session.point_start;

    if ctx.space == Space::Local {
        offset = session.world_quaternion_start.normalize().conjugate() * offset;
    }

    if mode == Mode::Elevate {
        offset.x = 0.0;
        offset.z = 0.0;
    } else {
        offset.y = 0.0;
    }

    if ctx.space == Space::Local {
        offset = session.quaternion_start * offset;
        offset = divide_by_scale(offset, parent.scale);
    }

    let mut position = session.position_start + offset;

    if let Some(step) = ctx.translation_snap {
        let reference = session.quaternion_start.normalize();

        // Snap in the frame the drag is expressed in
        match ctx.space {
            Space::Local => position = reference.conjugate() * position,
            Space::World => position += parent.position,
        }

        if mode == Mode::Elevate {
            position.y = snap(position.y, step);
        } else {
            position.x = snap(position.x, step);
            position.z = snap(position.z, step);
        }

        match ctx.space {
            Space::Local => position = reference * position,
            Space::World => position -= parent.position,
        }
    }

    position
}

/// Spin about the vertical axis of the chosen space.
///
/// The angle is the offset projected onto `axis x eye`, scaled by
/// `sensitivity / distance(object, camera)`. Returns `None` when the camera
/// sits on the object.
pub fn rotate(ctx: &DragContext) -> Option<TransformDelta> {
    let session = ctx.session;
    let cache = ctx.cache;

    let distance = cache.world.position.distance(cache.camera.position);
    if distance < EPSILON {
        log::trace!("rotate skipped: camera coincides with the object");
        return None;
    }
    let rotation_speed = ctx.rotation_sensitivity / distance;

    let rotation_axis = Vector3::unit_y();
    let axis_in_space = ctx.space.basis_rotation(cache) * rotation_axis;

    let mut tangent = axis_in_space.cross(cache.eye);
    if tangent.magnitude() < EPSILON {
        // Looking straight down the rotation axis; use the screen's horizontal
        tangent = cache.camera.rotation * Vector3::unit_x();
    }
    let tangent = tangent.normalize();

    let offset = ctx.point_end - session.point_start;
    let mut rotation_angle = offset.dot(tangent) * rotation_speed;

    if let Some(step) = ctx.rotation_snap {
        rotation_angle = snap(rotation_angle, step);
    }

    let rotation = match ctx.space {
        Space::Local => {
            session.quaternion_start * Quaternion::from_axis_angle(rotation_axis, Rad(rotation_angle))
        }
        Space::World => {
            let axis = (cache.parent.inverse_rotation() * rotation_axis).normalize();
            Quaternion::from_axis_angle(axis, Rad(rotation_angle)) * session.quaternion_start
        }
    };

    Some(TransformDelta::Rotation(rotation.normalize()))
}

fn divide_by_scale(v: Vector3<f32>, scale: Vector3<f32>) -> Vector3<f32> {
    let divide = |value: f32, by: f32| if by.abs() > EPSILON { value / by } else { value };
    Vector3::new(divide(v.x, scale.x), divide(v.y, scale.y), divide(v.z, scale.z))
}
