//! # Prelude
//!
//! Commonly used types in one import.
//!
//! ```no_run
//! use transform_controls::prelude::*;
//! use cgmath::Vector3;
//!
//! let camera = OrbitCamera::look_at(Vector3::new(0.0, 8.0, 8.0), Vector3::new(0.0, 0.0, 0.0), 1.5);
//! let mut scene = Scene::new(camera);
//! let sofa = scene.add_object(Object::new("sofa"));
//!
//! let mut controls = TransformControls::new();
//! controls.attach(&scene, sofa).unwrap();
//! controls.set_mode(Mode::Elevate);
//! controls.add_listener(|event: &ControlsEvent| println!("{}", event));
//! ```

// Interaction engine
pub use crate::controls::{
    ControlsError, ControlsEvent, ControlsOptions, GizmoAxis, ListenerId, Mode, Space,
    TransformControls,
};

// Graphics and scene types
pub use crate::gfx::camera::{Camera, OrbitCamera};
pub use crate::gfx::gizmos::{Gizmo, GizmoManager, GizmoPresentation, TransformGizmo};
pub use crate::gfx::scene::{Object, Scene, SceneError};

// Input
pub use crate::input::{Pointer, PointerAdapter, PointerButton, PointerEvent, Viewport};

// Math types
pub use cgmath::{Quaternion, Vector3};

// UI types
pub use imgui::Ui;
