//! # Gizmo System
//!
//! Gizmos are on-screen helpers hosted by a [`GizmoManager`]. The transform
//! gizmo is split in two: the interaction engine lives in
//! [`crate::controls`], while this module holds what it pushes visual state
//! into.
//!
//! ## Key Components
//!
//! - [`Gizmo`] - Base trait for hosted gizmos
//! - [`GizmoManager`] - Manages multiple gizmo instances
//! - [`GizmoPresentation`] - Capability interface the controls draw through
//! - [`GizmoLayout`] - Visual state derived from the shared state each frame
//! - [`TransformGizmo`] - Default presentation with a GPU uniform
//!
//! ## Usage
//!
//! ```no_run
//! use transform_controls::controls::TransformControls;
//! use transform_controls::gfx::camera::OrbitCamera;
//! use transform_controls::gfx::gizmos::GizmoManager;
//! use transform_controls::gfx::scene::Scene;
//! use cgmath::Vector3;
//!
//! let camera = OrbitCamera::look_at(Vector3::new(0.0, 5.0, 10.0), Vector3::new(0.0, 0.0, 0.0), 1.0);
//! let mut scene = Scene::new(camera);
//! let mut gizmo_manager = GizmoManager::new();
//! gizmo_manager.add_gizmo("transform", Box::new(TransformControls::new()), &mut scene);
//! ```

pub mod layout;
pub mod manager;
pub mod traits;
pub mod transform_gizmo;

pub use layout::{GizmoLayout, PickVolume};
pub use manager::GizmoManager;
pub use traits::{Gizmo, GizmoPresentation};
pub use transform_gizmo::{GizmoUniform, TransformGizmo};
