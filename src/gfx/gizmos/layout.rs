//! # Gizmo Layout
//!
//! Visual state of the transform gizmo as a pure function of the shared state
//! and the attached object's world bounds. Nothing here writes to the object.

use cgmath::{Quaternion, Vector3};

use crate::controls::{ControlsOptions, Mode, SharedState, Space};
use crate::gfx::picking::{Ray, RayHit, Raycast, Sphere, AABB};
use crate::gfx::transform::{identity_rotation, WorldTransform};

use super::traits::GizmoPresentation;

/// Generous invisible sphere used for hover and press detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickVolume {
    pub center: Vector3<f32>,
    pub radius: f32,
    /// Camera orientation in world space, object orientation in local space.
    /// Irrelevant for hit testing, kept for presentations that draw it.
    pub orientation: Quaternion<f32>,
}

impl PickVolume {
    pub fn sphere(&self) -> Sphere {
        Sphere::new(self.center, self.radius)
    }
}

impl Default for PickVolume {
    fn default() -> Self {
        Self {
            center: Vector3::new(0.0, 0.0, 0.0),
            radius: 0.0,
            orientation: identity_rotation(),
        }
    }
}

impl Raycast for PickVolume {
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        self.sphere().raycast(ray)
    }
}

/// Everything the presentation is told for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoLayout {
    /// `None` hides all handles
    pub visible_mode: Option<Mode>,
    pub transform: WorldTransform,
    pub pick_volume: PickVolume,
}

impl GizmoLayout {
    /// Derive the layout from the state and the object's world bounds.
    ///
    /// The handles sit at the bottom center of the bounds, lifted by
    /// `ground_offset`. Without an object (or without bounds) everything is
    /// anchored at the cached world position.
    pub fn derive(state: &SharedState, world_bounds: Option<&AABB>, options: &ControlsOptions) -> Self {
        let cache = state.cache();
        let attached = state.object().is_some();

        let (anchor, pick_center, extent) = match (attached, world_bounds) {
            (true, Some(bounds)) => {
                let center = bounds.center();
                let floor = Vector3::new(center.x, bounds.min.y + options.ground_offset, center.z);
                (floor, center, bounds.max_extent())
            }
            _ => (cache.world.position, cache.world.position, 0.0),
        };

        let handle_rotation = match state.space() {
            Space::Local => cache.world.rotation,
            Space::World => identity_rotation(),
        };
        let pick_orientation = match state.space() {
            Space::Local => cache.world.rotation,
            Space::World => cache.camera.rotation,
        };

        let radius = if attached {
            (extent + options.pick_margin).max(options.pick_min_radius)
        } else {
            options.pick_min_radius
        };

        let size = state.size();

        Self {
            visible_mode: attached.then(|| state.mode()),
            transform: WorldTransform::new(anchor, handle_rotation, Vector3::new(size, size, size)),
            pick_volume: PickVolume {
                center: pick_center,
                radius,
                orientation: pick_orientation,
            },
        }
    }

    /// Push every field to the presentation
    pub fn apply<P: GizmoPresentation + ?Sized>(&self, presentation: &mut P) {
        presentation.set_visible_mode(self.visible_mode);
        presentation.set_pick_volume(self.pick_volume);
        presentation.set_transform(self.transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Property;
    use cgmath::InnerSpace;

    fn attached_state(mode: Mode, space: Space) -> SharedState {
        let mut state = SharedState::new(mode, space);
        state.set(Property::Object(Some(0)));
        state
    }

    #[test]
    fn test_handles_sit_at_the_bounds_floor() {
        let state = attached_state(Mode::Translate, Space::World);
        let bounds = AABB::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(3.0, 6.0, 5.0));
        let layout = GizmoLayout::derive(&state, Some(&bounds), &ControlsOptions::default());

        assert_eq!(layout.visible_mode, Some(Mode::Translate));
        assert!((layout.transform.position - Vector3::new(2.0, 2.5, 4.0)).magnitude() < 1e-5);
        assert!((layout.pick_volume.center - Vector3::new(2.0, 4.0, 4.0)).magnitude() < 1e-5);
    }

    #[test]
    fn test_pick_radius_is_clamped_for_small_objects() {
        let state = attached_state(Mode::Rotate, Space::World);
        let options = ControlsOptions::default();

        let small = AABB::unit();
        let layout = GizmoLayout::derive(&state, Some(&small), &options);
        assert_eq!(layout.pick_volume.radius, options.pick_min_radius);

        let large = AABB::new(Vector3::new(-20.0, 0.0, -5.0), Vector3::new(20.0, 4.0, 5.0));
        let layout = GizmoLayout::derive(&state, Some(&large), &options);
        assert_eq!(layout.pick_volume.radius, 40.0 + options.pick_margin);
    }

    #[test]
    fn test_detached_layout_hides_handles() {
        let state = SharedState::new(Mode::Elevate, Space::World);
        let layout = GizmoLayout::derive(&state, Some(&AABB::unit()), &ControlsOptions::default());

        assert_eq!(layout.visible_mode, None);
        assert_eq!(layout.pick_volume.radius, ControlsOptions::default().pick_min_radius);
    }

    #[test]
    fn test_orientation_follows_space() {
        let mut state = attached_state(Mode::Rotate, Space::Local);
        let bounds = AABB::unit();
        let options = ControlsOptions::default();

        let local = GizmoLayout::derive(&state, Some(&bounds), &options);
        assert_eq!(local.transform.rotation, state.cache().world.rotation);
        assert_eq!(local.pick_volume.orientation, state.cache().world.rotation);

        state.set(Property::Space(Space::World));
        let world = GizmoLayout::derive(&state, Some(&bounds), &options);
        assert_eq!(world.transform.rotation, identity_rotation());
        assert_eq!(world.pick_volume.orientation, state.cache().camera.rotation);
    }

    #[test]
    fn test_size_scales_handles() {
        let mut state = attached_state(Mode::Translate, Space::World);
        state.set(Property::Size(2.5));
        let layout = GizmoLayout::derive(&state, Some(&AABB::unit()), &ControlsOptions::default());

        assert_eq!(layout.transform.scale, Vector3::new(2.5, 2.5, 2.5));
    }

    #[test]
    fn test_pick_volume_hit_testing() {
        let volume = PickVolume {
            center: Vector3::new(0.0, 0.0, 0.0),
            radius: 2.0,
            orientation: identity_rotation(),
        };

        let toward = Ray::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        let beside = Ray::new(Vector3::new(5.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(volume.raycast(&toward).is_some());
        assert!(volume.raycast(&beside).is_none());
    }
}
