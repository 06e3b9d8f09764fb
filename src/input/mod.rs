//! # Pointer Input
//!
//! Normalizes winit mouse and touch input into device independent pointer
//! records for [`TransformControls`](crate::controls::TransformControls).
//!
//! ```no_run
//! use transform_controls::input::{PointerAdapter, Viewport};
//!
//! let mut adapter = PointerAdapter::new(Viewport::from_size(1280, 720));
//! // In the winit event loop:
//! // for event in adapter.handle_window_event(&window_event) {
//! //     controls.handle_pointer_event(&mut scene, event);
//! // }
//! ```

pub mod adapter;
pub mod pointer;

pub use adapter::PointerAdapter;
pub use pointer::{Pointer, PointerButton, PointerEvent, Viewport};
