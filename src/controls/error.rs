use thiserror::Error;

/// Rejected configuration calls on the transform controls.
///
/// Pointer handling never fails; only attaching and the setters validate.
#[derive(Debug, Error, PartialEq)]
pub enum ControlsError {
    #[error("object index {index} is out of range for a scene with {count} objects")]
    ObjectNotFound { index: usize, count: usize },

    #[error("snap value must be a positive, finite number (got {0})")]
    InvalidSnap(f32),

    #[error("gizmo size must be a positive, finite number (got {0})")]
    InvalidSize(f32),
}

/// Accept `None` or a positive, finite snap step
pub(crate) fn validate_snap(snap: Option<f32>) -> Result<Option<f32>, ControlsError> {
    match snap {
        Some(step) if !(step.is_finite() && step > 0.0) => Err(ControlsError::InvalidSnap(step)),
        other => Ok(other),
    }
}
