// src/lib.rs
//! Transform Controls
//!
//! An interactive 3D manipulation gizmo: translate, elevate and rotate a scene
//! object with the pointer, in world or local space, with optional snapping.

pub mod controls;
pub mod gfx;
pub mod input;
pub mod prelude;

pub use controls::TransformControls;
