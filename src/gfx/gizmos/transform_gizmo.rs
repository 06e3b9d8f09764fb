//! # Transform Gizmo
//!
//! Default [`GizmoPresentation`]: keeps whatever the controls last pushed and
//! packs it into a GPU-ready uniform. Mesh generation is left to the renderer,
//! which picks the handle set from the uniform's mode index.

use cgmath::Matrix4;

use crate::controls::Mode;
use crate::gfx::transform::WorldTransform;

use super::layout::PickVolume;
use super::traits::GizmoPresentation;

/// Per-frame gizmo data for a shader
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GizmoUniform {
    pub model: [[f32; 4]; 4],
    /// 0 translate, 1 elevate, 2 rotate
    pub mode: u32,
    /// 0 hidden, 1 visible
    pub visible: u32,
    pub _padding: [u32; 2],
}

impl GizmoUniform {
    pub fn mode_index(mode: Mode) -> u32 {
        match mode {
            Mode::Translate => 0,
            Mode::Elevate => 1,
            Mode::Rotate => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformGizmo {
    visible_mode: Option<Mode>,
    pick_volume: PickVolume,
    transform: WorldTransform,
}

impl TransformGizmo {
    pub fn new() -> Self {
        Self {
            visible_mode: None,
            pick_volume: PickVolume::default(),
            transform: WorldTransform::identity(),
        }
    }

    pub fn visible_mode(&self) -> Option<Mode> {
        self.visible_mode
    }

    pub fn pick_volume(&self) -> &PickVolume {
        &self.pick_volume
    }

    pub fn transform(&self) -> &WorldTransform {
        &self.transform
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        self.transform.to_matrix()
    }

    pub fn uniform(&self) -> GizmoUniform {
        GizmoUniform {
            model: self.model_matrix().into(),
            mode: self.visible_mode.map(GizmoUniform::mode_index).unwrap_or(0),
            visible: u32::from(self.visible_mode.is_some()),
            _padding: [0; 2],
        }
    }

    /// The uniform as raw bytes, ready for a buffer write
    pub fn uniform_bytes(&self) -> Vec<u8> {
        bytemuck::bytes_of(&self.uniform()).to_vec()
    }
}

impl Default for TransformGizmo {
    fn default() -> Self {
        Self::new()
    }
}

impl GizmoPresentation for TransformGizmo {
    fn set_visible_mode(&mut self, mode: Option<Mode>) {
        self.visible_mode = mode;
    }

    fn set_pick_volume(&mut self, volume: PickVolume) {
        self.pick_volume = volume;
    }

    fn set_transform(&mut self, transform: WorldTransform) {
        self.transform = transform;
    }
}
