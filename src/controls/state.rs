//! # Shared State Bus
//!
//! The manipulation parameters the interaction engine and the gizmo
//! presentation both read. Every write goes through [`SharedState::set`],
//! which ignores unchanged values and otherwise notifies listeners with a
//! `"<key>-changed"` event followed by a `"change"` event.
//!
//! Next to the observable keys sits the [`FrameCache`]: decomposed world
//! transforms of the object, its parent and the camera, refreshed in one go
//! so every geometric test of a frame sees the same snapshot.

use std::fmt;

use cgmath::{Quaternion, Vector3};

use crate::gfx::camera::Camera;
use crate::gfx::scene::Scene;
use crate::gfx::transform::{normalize_or_zero, WorldTransform};

use super::events::{ControlsEvent, EventDispatcher, ListenerId};

/// Manipulation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Move on the horizontal plane
    Translate,
    /// Move along the vertical axis only
    Elevate,
    /// Spin around the vertical axis
    Rotate,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Translate, Mode::Elevate, Mode::Rotate];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Translate => "translate",
            Mode::Elevate => "elevate",
            Mode::Rotate => "rotate",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coordinate space manipulation deltas are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    World,
    Local,
}

impl Space {
    pub fn label(self) -> &'static str {
        match self {
            Space::World => "world",
            Space::Local => "local",
        }
    }

    /// World orientation the basis vectors are rotated by in this space
    pub fn basis_rotation(self, cache: &FrameCache) -> Quaternion<f32> {
        match self {
            Space::World => WorldTransform::identity().rotation,
            Space::Local => cache.world.rotation,
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which handle family is under the pointer or being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoAxis {
    /// The ground plane (translate)
    Horizontal,
    /// The vertical axis (elevate)
    Vertical,
    /// Rotation about the vertical axis (rotate)
    Yaw,
}

impl From<Mode> for GizmoAxis {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Translate => GizmoAxis::Horizontal,
            Mode::Elevate => GizmoAxis::Vertical,
            Mode::Rotate => GizmoAxis::Yaw,
        }
    }
}

/// Names of the observable keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    Object,
    Enabled,
    Axis,
    Mode,
    Space,
    TranslationSnap,
    RotationSnap,
    Size,
    Dragging,
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateKey::Object => "object",
            StateKey::Enabled => "enabled",
            StateKey::Axis => "axis",
            StateKey::Mode => "mode",
            StateKey::Space => "space",
            StateKey::TranslationSnap => "translationSnap",
            StateKey::RotationSnap => "rotationSnap",
            StateKey::Size => "size",
            StateKey::Dragging => "dragging",
        };
        f.write_str(name)
    }
}

/// A key together with its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Property {
    /// Index of the attached object in the scene
    Object(Option<usize>),
    Enabled(bool),
    Axis(Option<GizmoAxis>),
    Mode(Mode),
    Space(Space),
    TranslationSnap(Option<f32>),
    /// Radians
    RotationSnap(Option<f32>),
    Size(f32),
    Dragging(bool),
}

impl Property {
    pub fn key(&self) -> StateKey {
        match self {
            Property::Object(_) => StateKey::Object,
            Property::Enabled(_) => StateKey::Enabled,
            Property::Axis(_) => StateKey::Axis,
            Property::Mode(_) => StateKey::Mode,
            Property::Space(_) => StateKey::Space,
            Property::TranslationSnap(_) => StateKey::TranslationSnap,
            Property::RotationSnap(_) => StateKey::RotationSnap,
            Property::Size(_) => StateKey::Size,
            Property::Dragging(_) => StateKey::Dragging,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn optional<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: &Option<T>) -> fmt::Result {
            match value {
                Some(value) => write!(f, "{value}"),
                None => f.write_str("null"),
            }
        }

        match self {
            Property::Object(index) => optional(f, index),
            Property::Enabled(value) | Property::Dragging(value) => write!(f, "{value}"),
            Property::Axis(axis) => match axis {
                Some(axis) => write!(f, "{axis:?}"),
                None => f.write_str("null"),
            },
            Property::Mode(mode) => write!(f, "{mode}"),
            Property::Space(space) => write!(f, "{space}"),
            Property::TranslationSnap(snap) | Property::RotationSnap(snap) => optional(f, snap),
            Property::Size(size) => write!(f, "{size}"),
        }
    }
}

/// Decomposed transforms shared by every computation of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCache {
    /// The attached object
    pub world: WorldTransform,
    /// The attached object's parent, identity for root objects
    pub parent: WorldTransform,
    pub camera: WorldTransform,
    /// Unit vector from the object towards the camera, zero when they coincide
    pub eye: Vector3<f32>,
}

impl FrameCache {
    /// Snapshot the scene. Without an object the previous object and parent
    /// transforms are kept and only the camera is refreshed.
    pub fn refresh(&mut self, scene: &Scene, object: Option<usize>) {
        if let Some(index) = object {
            if let (Some(world), Some(parent)) =
                (scene.world_matrix(index), scene.parent_world_matrix(index))
            {
                self.world = WorldTransform::from_matrix(&world);
                self.parent = WorldTransform::from_matrix(&parent);
            }
        }

        self.camera = scene.camera.world_transform();
        self.eye = normalize_or_zero(self.camera.position - self.world.position);
    }
}

impl Default for FrameCache {
    fn default() -> Self {
        Self {
            world: WorldTransform::identity(),
            parent: WorldTransform::identity(),
            camera: WorldTransform::identity(),
            eye: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Observable manipulation parameters plus the frame cache
#[derive(Debug)]
pub struct SharedState {
    object: Option<usize>,
    enabled: bool,
    axis: Option<GizmoAxis>,
    mode: Mode,
    space: Space,
    translation_snap: Option<f32>,
    rotation_snap: Option<f32>,
    size: f32,
    dragging: bool,
    cache: FrameCache,
    dispatcher: EventDispatcher,
}

impl SharedState {
    pub fn new(mode: Mode, space: Space) -> Self {
        Self {
            object: None,
            enabled: true,
            axis: None,
            mode,
            space,
            translation_snap: None,
            rotation_snap: None,
            size: 1.0,
            dragging: false,
            cache: FrameCache::default(),
            dispatcher: EventDispatcher::new(),
        }
    }

    pub fn object(&self) -> Option<usize> {
        self.object
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn axis(&self) -> Option<GizmoAxis> {
        self.axis
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn translation_snap(&self) -> Option<f32> {
        self.translation_snap
    }

    pub fn rotation_snap(&self) -> Option<f32> {
        self.rotation_snap
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn cache(&self) -> &FrameCache {
        &self.cache
    }

    /// Current value of `key`
    pub fn get(&self, key: StateKey) -> Property {
        match key {
            StateKey::Object => Property::Object(self.object),
            StateKey::Enabled => Property::Enabled(self.enabled),
            StateKey::Axis => Property::Axis(self.axis),
            StateKey::Mode => Property::Mode(self.mode),
            StateKey::Space => Property::Space(self.space),
            StateKey::TranslationSnap => Property::TranslationSnap(self.translation_snap),
            StateKey::RotationSnap => Property::RotationSnap(self.rotation_snap),
            StateKey::Size => Property::Size(self.size),
            StateKey::Dragging => Property::Dragging(self.dragging),
        }
    }

    /// Write one key. Returns whether the value changed (and listeners ran).
    pub(crate) fn set(&mut self, property: Property) -> bool {
        if self.get(property.key()) == property {
            return false;
        }

        match property {
            Property::Object(value) => self.object = value,
            Property::Enabled(value) => self.enabled = value,
            Property::Axis(value) => self.axis = value,
            Property::Mode(value) => self.mode = value,
            Property::Space(value) => self.space = value,
            Property::TranslationSnap(value) => self.translation_snap = value,
            Property::RotationSnap(value) => self.rotation_snap = value,
            Property::Size(value) => self.size = value,
            Property::Dragging(value) => self.dragging = value,
        }

        self.dispatcher.dispatch(&ControlsEvent::PropertyChanged(property));
        self.dispatcher.dispatch(&ControlsEvent::Change);
        true
    }

    /// Deliver an event that is not tied to a key
    pub(crate) fn emit(&mut self, event: ControlsEvent) {
        self.dispatcher.dispatch(&event);
    }

    pub(crate) fn refresh_cache(&mut self, scene: &Scene) {
        self.cache.refresh(scene, self.object);
    }

    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ControlsEvent) + 'static,
    {
        self.dispatcher.add_listener(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.dispatcher.remove_listener(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::OrbitCamera;
    use crate::gfx::scene::Object;
    use cgmath::InnerSpace;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(state: &mut SharedState) -> Rc<RefCell<Vec<String>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        state.add_listener(move |event| sink.borrow_mut().push(event.name()));
        log
    }

    #[test]
    fn test_set_notifies_key_then_change() {
        let mut state = SharedState::new(Mode::Rotate, Space::World);
        let log = recorded(&mut state);

        assert!(state.set(Property::Mode(Mode::Translate)));
        assert_eq!(state.mode(), Mode::Translate);
        assert_eq!(*log.borrow(), vec!["mode-changed", "change"]);
    }

    #[test]
    fn test_set_same_value_is_silent() {
        let mut state = SharedState::new(Mode::Rotate, Space::World);
        let log = recorded(&mut state);

        assert!(!state.set(Property::Mode(Mode::Rotate)));
        assert!(!state.set(Property::TranslationSnap(None)));
        assert!(!state.set(Property::Enabled(true)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_get_reflects_every_key() {
        let mut state = SharedState::new(Mode::Elevate, Space::Local);
        state.set(Property::RotationSnap(Some(0.5)));
        state.set(Property::Axis(Some(GizmoAxis::Vertical)));

        assert_eq!(state.get(StateKey::Mode), Property::Mode(Mode::Elevate));
        assert_eq!(state.get(StateKey::Space), Property::Space(Space::Local));
        assert_eq!(state.get(StateKey::RotationSnap), Property::RotationSnap(Some(0.5)));
        assert_eq!(state.get(StateKey::Axis), Property::Axis(Some(GizmoAxis::Vertical)));
        assert_eq!(state.get(StateKey::Size), Property::Size(1.0));
        assert_eq!(state.get(StateKey::Dragging), Property::Dragging(false));
    }

    #[test]
    fn test_cache_refresh_tracks_object_and_camera() {
        let camera = OrbitCamera::look_at(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, 0.0), 1.0);
        let mut scene = Scene::new(camera);
        let index = scene.add_object(Object::new("box").with_position(Vector3::new(0.0, 0.0, 4.0)));

        let mut state = SharedState::new(Mode::Translate, Space::World);
        state.set(Property::Object(Some(index)));
        state.refresh_cache(&scene);

        let cache = state.cache();
        assert!((cache.world.position - Vector3::new(0.0, 0.0, 4.0)).magnitude() < 1e-4);
        assert!((cache.camera.position - Vector3::new(0.0, 0.0, 10.0)).magnitude() < 1e-3);
        assert!((cache.eye - Vector3::unit_z()).magnitude() < 1e-3);
        assert!(cache.parent.position.magnitude() < 1e-6);
        assert!((cache.parent.scale - Vector3::new(1.0, 1.0, 1.0)).magnitude() < 1e-6);
    }
}
