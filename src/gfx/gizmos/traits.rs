//! # Gizmo Traits
//!
//! The two seams of the gizmo system:
//!
//! - [`Gizmo`] is how the host drives a gizmo once per frame and draws its
//!   settings panel.
//! - [`GizmoPresentation`] is the small capability interface the transform
//!   controls push visual state through. The controls hold a presentation,
//!   they never inherit from one.

use std::any::Any;

use imgui::Ui;

use crate::controls::Mode;
use crate::gfx::scene::Scene;
use crate::gfx::transform::WorldTransform;

use super::layout::PickVolume;

/// Core trait for gizmo components hosted by a [`GizmoManager`](super::GizmoManager).
///
/// ## Lifecycle
///
/// 1. **Initialize** - called once when the gizmo is added
/// 2. **Update Loop** - called every frame while the gizmo is visible
/// 3. **UI Rendering** - gizmo specific controls
/// 4. **Cleanup** - called when the gizmo is removed
///
/// ## Examples
///
/// ```no_run
/// use transform_controls::gfx::gizmos::Gizmo;
/// use transform_controls::gfx::scene::Scene;
/// use imgui::Ui;
/// use std::any::Any;
///
/// struct Compass {
///     enabled: bool,
/// }
///
/// impl Gizmo for Compass {
///     fn initialize(&mut self, _scene: &mut Scene) {}
///
///     fn update(&mut self, _delta_time: f32, _scene: &mut Scene) {}
///
///     fn render_ui(&mut self, ui: &Ui, _scene: &mut Scene) {
///         ui.window("Compass").build(|| {
///             ui.checkbox("Enabled", &mut self.enabled);
///         });
///     }
///
///     fn name(&self) -> &str { "Compass" }
///     fn is_enabled(&self) -> bool { self.enabled }
///     fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
/// }
/// ```
pub trait Gizmo {
    /// Called once when the gizmo is added to the manager
    fn initialize(&mut self, scene: &mut Scene);

    /// Per-frame update.
    ///
    /// # Arguments
    ///
    /// * `delta_time` - Time elapsed since the last frame in seconds
    /// * `scene` - The scene the gizmo reads from
    fn update(&mut self, delta_time: f32, scene: &mut Scene);

    /// Render the gizmo's settings panel
    fn render_ui(&mut self, ui: &Ui, scene: &mut Scene);

    /// Display name
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    /// Disabled gizmos stop reacting to input but keep their state.
    fn set_enabled(&mut self, enabled: bool);

    /// Called when the gizmo is removed from the manager
    fn cleanup(&mut self, _scene: &mut Scene) {}

    /// Higher priorities update later. Default is 0.
    fn get_priority(&self) -> i32 {
        0
    }

    /// Context-sensitive visibility, e.g. only while something is selected
    fn should_be_visible(&self, _scene: &Scene) -> bool {
        self.is_enabled()
    }

    /// Preferred UI window position in screen coordinates
    fn get_ui_position(&self) -> (f32, f32) {
        (20.0, 20.0)
    }

    /// Preferred UI window size in screen coordinates
    fn get_ui_size(&self) -> (f32, f32) {
        (300.0, 200.0)
    }

    /// Support for downcasting to concrete types
    fn as_any(&self) -> &dyn Any;

    /// Support for mutable downcasting to concrete types
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// What the transform controls can tell a visual gizmo.
///
/// Implementations only store or visualize what they receive; none of these
/// calls may touch the manipulated object.
pub trait GizmoPresentation {
    /// Show the handle group for `mode`, or hide everything with `None`
    fn set_visible_mode(&mut self, mode: Option<Mode>);

    /// Invisible hover/press target
    fn set_pick_volume(&mut self, volume: PickVolume);

    /// World placement of the visible handles
    fn set_transform(&mut self, transform: WorldTransform);
}
