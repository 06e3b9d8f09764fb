use super::state::{Mode, Space};

/// Tunables for [`TransformControls`](super::TransformControls).
///
/// ```
/// use transform_controls::controls::{ControlsOptions, Mode};
///
/// let options = ControlsOptions::default()
///     .with_initial_mode(Mode::Translate)
///     .with_pick_min_radius(4.0);
/// assert_eq!(options.pick_min_radius, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsOptions {
    /// Mode the controls start in
    pub initial_mode: Mode,
    /// Space the controls start in
    pub initial_space: Space,
    /// Rotation speed is `rotation_sensitivity / distance(object, camera)`
    pub rotation_sensitivity: f32,
    /// Added to the object's largest extent to size the pick sphere
    pub pick_margin: f32,
    /// Smallest pick sphere radius, so tiny objects stay easy to grab
    pub pick_min_radius: f32,
    /// How far the visual gizmo floats above the object's bounding-box floor
    pub ground_offset: f32,
    /// Edge length of the (finite) interaction plane
    pub plane_extent: f32,
}

impl Default for ControlsOptions {
    fn default() -> Self {
        Self {
            initial_mode: Mode::Rotate,
            initial_space: Space::World,
            rotation_sensitivity: 20.0,
            pick_margin: 1.0,
            pick_min_radius: 10.0,
            ground_offset: 0.5,
            plane_extent: 100_000.0,
        }
    }
}

impl ControlsOptions {
    pub fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn with_initial_space(mut self, space: Space) -> Self {
        self.initial_space = space;
        self
    }

    pub fn with_rotation_sensitivity(mut self, sensitivity: f32) -> Self {
        self.rotation_sensitivity = sensitivity;
        self
    }

    pub fn with_pick_margin(mut self, margin: f32) -> Self {
        self.pick_margin = margin;
        self
    }

    pub fn with_pick_min_radius(mut self, radius: f32) -> Self {
        self.pick_min_radius = radius;
        self
    }

    pub fn with_ground_offset(mut self, offset: f32) -> Self {
        self.ground_offset = offset;
        self
    }

    pub fn with_plane_extent(mut self, extent: f32) -> Self {
        self.plane_extent = extent;
        self
    }
}
