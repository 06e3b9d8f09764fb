//! # Transform Controls
//!
//! Pointer driven translate, elevate and rotate manipulation of a single scene
//! object, in world or local space, with optional snapping.
//!
//! ## Architecture
//!
//! - [`SharedState`] - observable manipulation parameters plus the per-frame
//!   transform cache
//! - [`TransformControls`] - the hover/press/move/release state machine
//! - [`InteractionPlane`] - the invisible plane drags are projected onto
//! - [`modes`] - one delta computation per [`Mode`]
//!
//! Visual feedback is pushed into a
//! [`GizmoPresentation`](crate::gfx::gizmos::GizmoPresentation) every frame.

pub mod error;
pub mod events;
pub mod modes;
pub mod options;
pub mod plane;
pub mod state;
pub mod transform_controls;

pub use error::ControlsError;
pub use events::{ControlsEvent, EventDispatcher, ListenerId};
pub use modes::{snap, DragContext, ManipulationSession, TransformDelta};
pub use options::ControlsOptions;
pub use plane::InteractionPlane;
pub use state::{FrameCache, GizmoAxis, Mode, Property, SharedState, Space, StateKey};
pub use transform_controls::TransformControls;
