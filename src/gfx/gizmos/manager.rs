//! # Gizmo Manager
//!
//! Hosts named gizmos: initializes them, updates the visible ones in priority
//! order every frame and renders their settings panels.

use std::collections::HashMap;

use imgui::Ui;

use crate::gfx::gizmos::traits::Gizmo;
use crate::gfx::scene::Scene;

/// Manager for handling multiple gizmo instances
pub struct GizmoManager {
    gizmos: HashMap<String, Box<dyn Gizmo>>,

    /// Whether the gizmo system is globally enabled
    enabled: bool,

    /// Whether to show the gizmo manager UI
    show_ui: bool,
}

impl GizmoManager {
    pub fn new() -> Self {
        Self {
            gizmos: HashMap::new(),
            enabled: true,
            show_ui: true,
        }
    }

    /// Add a gizmo under a unique name. An existing gizmo with the same name
    /// is cleaned up and replaced.
    pub fn add_gizmo(&mut self, name: &str, mut gizmo: Box<dyn Gizmo>, scene: &mut Scene) {
        gizmo.initialize(scene);
        if let Some(mut replaced) = self.gizmos.insert(name.to_string(), gizmo) {
            log::debug!("replacing gizmo '{}'", name);
            replaced.cleanup(scene);
        }
    }

    /// Remove a gizmo from the manager
    pub fn remove_gizmo(&mut self, name: &str, scene: &mut Scene) -> Option<Box<dyn Gizmo>> {
        let mut gizmo = self.gizmos.remove(name)?;
        gizmo.cleanup(scene);
        Some(gizmo)
    }

    pub fn has_gizmo(&self, name: &str) -> bool {
        self.gizmos.contains_key(name)
    }

    /// Typed access to a registered gizmo
    pub fn gizmo<T: Gizmo + 'static>(&self, name: &str) -> Option<&T> {
        self.gizmos.get(name)?.as_any().downcast_ref::<T>()
    }

    /// Typed mutable access, e.g. to feed pointer events to the transform controls
    pub fn gizmo_mut<T: Gizmo + 'static>(&mut self, name: &str) -> Option<&mut T> {
        self.gizmos.get_mut(name)?.as_any_mut().downcast_mut::<T>()
    }

    /// Update all visible gizmos, lowest priority first
    pub fn update(&mut self, delta_time: f32, scene: &mut Scene) {
        if !self.enabled {
            return;
        }

        let mut visible_gizmos: Vec<_> = self
            .gizmos
            .iter_mut()
            .filter(|(_, gizmo)| gizmo.should_be_visible(scene))
            .collect();

        // Name breaks ties so the order does not depend on hashing
        visible_gizmos.sort_by(|(a_name, a), (b_name, b)| {
            a.get_priority()
                .cmp(&b.get_priority())
                .then_with(|| a_name.cmp(b_name))
        });

        for (_, gizmo) in visible_gizmos {
            gizmo.update(delta_time, scene);
        }
    }

    /// Render the manager window and every visible gizmo's panel
    pub fn render_ui(&mut self, ui: &Ui, scene: &mut Scene) {
        if !self.show_ui {
            return;
        }

        ui.window("Gizmo Manager")
            .size([300.0, 150.0], imgui::Condition::FirstUseEver)
            .position([20.0, 20.0], imgui::Condition::FirstUseEver)
            .build(|| {
                ui.checkbox("Enable Gizmos", &mut self.enabled);
                ui.separator();

                ui.text(format!("Active Gizmos: {}", self.gizmos.len()));

                for (name, gizmo) in &mut self.gizmos {
                    let mut enabled = gizmo.is_enabled();
                    if ui.checkbox(name, &mut enabled) {
                        gizmo.set_enabled(enabled);
                    }
                }
            });

        if self.enabled {
            for gizmo in self.gizmos.values_mut() {
                if gizmo.should_be_visible(scene) {
                    gizmo.render_ui(ui, scene);
                }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_ui_visible(&self) -> bool {
        self.show_ui
    }

    pub fn set_ui_visible(&mut self, visible: bool) {
        self.show_ui = visible;
    }

    pub fn gizmo_count(&self) -> usize {
        self.gizmos.len()
    }

    pub fn get_gizmo_names(&self) -> Vec<&String> {
        self.gizmos.keys().collect()
    }

    /// Clean up and drop all gizmos
    pub fn cleanup(&mut self, scene: &mut Scene) {
        for (_, mut gizmo) in self.gizmos.drain() {
            gizmo.cleanup(scene);
        }
    }
}

impl Default for GizmoManager {
    fn default() -> Self {
        Self::new()
    }
}
