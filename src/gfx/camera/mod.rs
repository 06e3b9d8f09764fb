//! # Camera
//!
//! A Y-up orbit camera and the [`Camera`] trait the picking code and the
//! transform controls read from.

pub mod camera_utils;
pub mod orbit_camera;

// Re-export main types
pub use camera_utils::Camera;
pub use orbit_camera::{OrbitCamera, OrbitCameraBounds};
