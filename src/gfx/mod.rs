//! # Graphics Module
//!
//! The scene side of the transform controls: camera, scene graph, ray picking
//! and the gizmo host.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Y-up orbit camera
//! - **Scene Management** ([`scene`]) - Objects with optional parents
//! - **Picking** ([`picking`]) - Rays, hit targets and pointer unprojection
//! - **Gizmos** ([`gizmos`]) - Hosting and presentation of on-screen helpers
//! - **Transforms** ([`transform`]) - Decomposed world transforms
//!
//! ```no_run
//! use transform_controls::gfx::{scene::Scene, OrbitCamera};
//! use cgmath::Vector3;
//!
//! let scene = Scene::new(OrbitCamera::new(8.0, 0.4, 0.2, Vector3::new(0.0, 0.0, 0.0), 1.0));
//! ```

pub mod camera;
pub mod gizmos;
pub mod picking;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use transform::WorldTransform;
