//! # Scene Management Module
//!
//! This module provides the minimal scene graph the transform controls work
//! against: a camera plus a flat list of objects with optional parents.
//!
//! ## Key Components
//!
//! - [`Scene`] - The scene container holding the camera and all objects
//! - [`Object`] - Individual objects with a decomposed local transform and local bounds
//!
//! ## Usage
//!
//! ```no_run
//! use transform_controls::gfx::scene::{Object, Scene};
//! use transform_controls::gfx::camera::OrbitCamera;
//! use cgmath::Vector3;
//!
//! let camera = OrbitCamera::new(8.0, 0.4, 0.2, Vector3::new(0.0, 0.0, 0.0), 16.0 / 9.0);
//! let mut scene = Scene::new(camera);
//! let table = scene.add_object(Object::new("table"));
//! let cup = scene.add_object(Object::new("cup").with_position(Vector3::new(0.0, 1.0, 0.0)));
//! scene.set_parent(cup, Some(table)).unwrap();
//! ```
//!
//! ## Object Management
//!
//! Objects in the scene support:
//! - Transform operations (position, rotation, scale)
//! - Parenting, with world matrices composed through the chain
//! - World-space bounds derived from their local bounds

pub mod object;
pub mod scene;

// Re-export main types
pub use object::Object;
pub use scene::{Scene, SceneError};
