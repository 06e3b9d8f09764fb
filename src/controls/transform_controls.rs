//! # Transform Controls
//!
//! The interaction engine. It owns the hover/drag state machine, projects
//! pointer rays onto the interaction plane, runs the per-mode math and writes
//! the result into the attached scene object.
//!
//! ## States
//!
//! - **Idle** - no axis, not dragging
//! - **Hovering** - the pointer ray hits the pick volume, `axis` is set
//! - **Dragging** - a press hit the interaction plane; a [`ManipulationSession`]
//!   exists for exactly as long as `dragging` is true
//!
//! Every entry point first refreshes the frame cache, so all geometry of one
//! call sees the same snapshot of the scene.

use std::any::Any;

use imgui::Ui;

use crate::gfx::gizmos::{Gizmo, GizmoLayout, GizmoPresentation, PickVolume, TransformGizmo};
use crate::gfx::picking::{screen_to_ray, Raycast, AABB};
use crate::gfx::scene::Scene;
use crate::input::{Pointer, PointerEvent};

use super::error::{validate_snap, ControlsError};
use super::events::{ControlsEvent, ListenerId};
use super::modes::{DragContext, ManipulationSession};
use super::options::ControlsOptions;
use super::plane::InteractionPlane;
use super::state::{GizmoAxis, Mode, Property, SharedState, Space};

/// Step values the settings panel falls back to when snapping is switched on
#[derive(Debug, Clone, Copy)]
struct PanelState {
    translation_step: f32,
    rotation_step_degrees: f32,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            translation_step: 1.0,
            rotation_step_degrees: 15.0,
        }
    }
}

/// Translate, elevate and rotate manipulation of one scene object.
///
/// ```no_run
/// use transform_controls::controls::{Mode, TransformControls};
/// use transform_controls::gfx::camera::OrbitCamera;
/// use transform_controls::gfx::scene::{Object, Scene};
/// use transform_controls::input::{Pointer, PointerButton};
/// use cgmath::Vector3;
///
/// let camera = OrbitCamera::look_at(Vector3::new(0.0, 10.0, 10.0), Vector3::new(0.0, 0.0, 0.0), 1.0);
/// let mut scene = Scene::new(camera);
/// let chair = scene.add_object(Object::new("chair"));
///
/// let mut controls = TransformControls::new();
/// controls.attach(&scene, chair).unwrap();
/// controls.set_mode(Mode::Translate);
///
/// let pointer = Pointer::new(0.0, 0.0).with_button(PointerButton::Primary);
/// controls.pointer_hover(&scene, pointer);
/// controls.pointer_down(&scene, pointer);
/// controls.pointer_move(&mut scene, Pointer::new(0.2, 0.0).with_button(PointerButton::Primary));
/// controls.pointer_up(&scene, pointer);
/// ```
pub struct TransformControls<P: GizmoPresentation = TransformGizmo> {
    state: SharedState,
    options: ControlsOptions,
    presentation: P,
    session: Option<ManipulationSession>,
    pick_volume: PickVolume,
    world_bounds: Option<AABB>,
    panel: PanelState,
}

impl TransformControls<TransformGizmo> {
    pub fn new() -> Self {
        Self::with_options(ControlsOptions::default())
    }

    pub fn with_options(options: ControlsOptions) -> Self {
        Self::with_presentation(TransformGizmo::new(), options)
    }
}

impl Default for TransformControls<TransformGizmo> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: GizmoPresentation> TransformControls<P> {
    /// Drive a custom presentation instead of the default [`TransformGizmo`]
    pub fn with_presentation(presentation: P, options: ControlsOptions) -> Self {
        let mut controls = Self {
            state: SharedState::new(options.initial_mode, options.initial_space),
            options,
            presentation,
            session: None,
            pick_volume: PickVolume::default(),
            world_bounds: None,
            panel: PanelState::default(),
        };
        controls.refresh_presentation();
        controls
    }

    // ----- configuration -----

    /// Bind the controls to `scene.objects[index]`.
    ///
    /// Switching to another object ends a drag in progress.
    pub fn attach(&mut self, scene: &Scene, index: usize) -> Result<(), ControlsError> {
        let count = scene.get_object_count();
        if index >= count {
            return Err(ControlsError::ObjectNotFound { index, count });
        }

        if self.state.object() != Some(index) {
            self.end_drag();
            self.state.set(Property::Axis(None));
            self.state.set(Property::Object(Some(index)));
            log::debug!("attached transform controls to object {} ({})", index, scene.objects[index].name);
        }

        self.sync(scene);
        Ok(())
    }

    /// Unbind the target. A drag in progress ends with a `mouseUp`.
    pub fn detach(&mut self) {
        let Some(index) = self.state.object() else {
            return;
        };

        self.end_drag();
        self.state.set(Property::Axis(None));
        self.state.set(Property::Object(None));
        self.world_bounds = None;
        self.refresh_presentation();
        log::debug!("detached transform controls from object {}", index);
    }

    /// A hovered or dragged axis switches to the new mode's handle family
    pub fn set_mode(&mut self, mode: Mode) {
        if self.state.set(Property::Mode(mode)) {
            if self.state.axis().is_some() {
                self.state.set(Property::Axis(Some(GizmoAxis::from(mode))));
            }
            self.refresh_presentation();
        }
    }

    pub fn set_space(&mut self, space: Space) {
        if self.state.set(Property::Space(space)) {
            self.refresh_presentation();
        }
    }

    /// `None` turns translation snapping off
    pub fn set_translation_snap(&mut self, snap: Option<f32>) -> Result<(), ControlsError> {
        let snap = validate_snap(snap)?;
        self.state.set(Property::TranslationSnap(snap));
        Ok(())
    }

    /// Step in radians, `None` turns rotation snapping off
    pub fn set_rotation_snap(&mut self, snap: Option<f32>) -> Result<(), ControlsError> {
        let snap = validate_snap(snap)?;
        self.state.set(Property::RotationSnap(snap));
        Ok(())
    }

    /// Visual scale of the handles
    pub fn set_size(&mut self, size: f32) -> Result<(), ControlsError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(ControlsError::InvalidSize(size));
        }
        if self.state.set(Property::Size(size)) {
            self.refresh_presentation();
        }
        Ok(())
    }

    /// While disabled every pointer call is ignored. A drag in progress stays
    /// open and is finished by the first release after re-enabling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.set(Property::Enabled(enabled));
    }

    // ----- accessors -----

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn options(&self) -> &ControlsOptions {
        &self.options
    }

    pub fn object(&self) -> Option<usize> {
        self.state.object()
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn space(&self) -> Space {
        self.state.space()
    }

    pub fn axis(&self) -> Option<GizmoAxis> {
        self.state.axis()
    }

    pub fn dragging(&self) -> bool {
        self.state.dragging()
    }

    pub fn enabled(&self) -> bool {
        self.state.enabled()
    }

    pub fn translation_snap(&self) -> Option<f32> {
        self.state.translation_snap()
    }

    pub fn rotation_snap(&self) -> Option<f32> {
        self.state.rotation_snap()
    }

    pub fn size(&self) -> f32 {
        self.state.size()
    }

    pub fn session(&self) -> Option<&ManipulationSession> {
        self.session.as_ref()
    }

    pub fn pick_volume(&self) -> &PickVolume {
        &self.pick_volume
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// Current visual state, as last pushed to the presentation
    pub fn layout(&self) -> GizmoLayout {
        GizmoLayout::derive(&self.state, self.world_bounds.as_ref(), &self.options)
    }

    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ControlsEvent) + 'static,
    {
        self.state.add_listener(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.state.remove_listener(id)
    }

    // ----- frame tick -----

    /// Refresh the frame cache and re-derive the presentation
    pub fn update(&mut self, scene: &Scene) {
        self.sync(scene);
    }

    // ----- pointer handling -----

    pub fn handle_pointer_event(&mut self, scene: &mut Scene, event: PointerEvent) {
        match event {
            PointerEvent::Hover(pointer) => self.pointer_hover(scene, pointer),
            PointerEvent::Press(pointer) => self.pointer_down(scene, pointer),
            PointerEvent::Move(pointer) => self.pointer_move(scene, pointer),
            PointerEvent::Release(pointer) => self.pointer_up(scene, pointer),
        }
    }

    /// Set `axis` when the pointer ray hits the pick volume, clear it otherwise
    pub fn pointer_hover(&mut self, scene: &Scene, pointer: Pointer) {
        if !self.accepts(&pointer) || self.state.dragging() {
            return;
        }
        if !self.sync(scene) {
            return;
        }

        let ray = screen_to_ray(pointer.ndc(), &scene.camera);
        let axis = self
            .pick_volume
            .raycast(&ray)
            .map(|_| GizmoAxis::from(self.state.mode()));
        self.state.set(Property::Axis(axis));
    }

    /// Start a drag when hovering and the ray hits the interaction plane
    pub fn pointer_down(&mut self, scene: &Scene, pointer: Pointer) {
        if !self.accepts(&pointer) || self.state.dragging() || self.state.axis().is_none() {
            return;
        }
        if !self.sync(scene) {
            return;
        }
        let Some(index) = self.state.object() else {
            return;
        };
        let Some(object) = scene.get_object(index) else {
            return;
        };

        let ray = screen_to_ray(pointer.ndc(), &scene.camera);
        let Some(hit) = self.interaction_plane().raycast(&ray) else {
            log::trace!("press missed the interaction plane");
            return;
        };

        let mode = self.state.mode();
        self.session = Some(ManipulationSession::begin(hit.point, &self.state.cache().world, object));
        self.state.set(Property::Dragging(true));
        self.state.emit(ControlsEvent::MouseDown { mode });
        log::debug!("{} drag started on object {}", mode, index);
    }

    /// Recompute the object's transform from the press snapshot
    pub fn pointer_move(&mut self, scene: &mut Scene, pointer: Pointer) {
        if !self.accepts(&pointer) || !self.state.dragging() || self.state.axis().is_none() {
            return;
        }
        let Some(session) = self.session else {
            return;
        };
        if !self.sync(scene) {
            return;
        }
        let Some(index) = self.state.object() else {
            return;
        };

        let ray = screen_to_ray(pointer.ndc(), &scene.camera);
        let Some(hit) = self.interaction_plane().raycast(&ray) else {
            log::trace!("move missed the interaction plane, frame skipped");
            return;
        };

        let ctx = DragContext {
            session: &session,
            point_end: session.relative_point(hit.point),
            space: self.state.space(),
            cache: self.state.cache(),
            translation_snap: self.state.translation_snap(),
            rotation_snap: self.state.rotation_snap(),
            rotation_sensitivity: self.options.rotation_sensitivity,
        };
        let Some(delta) = self.state.mode().compute_delta(&ctx) else {
            return;
        };

        let Some(object) = scene.get_object_mut(index) else {
            return;
        };
        if !delta.apply(object) {
            return;
        }

        self.state.emit(ControlsEvent::Change);
        self.state.emit(ControlsEvent::ObjectChange);
        self.sync(scene);
    }

    /// End a drag. Touch releases (no button) keep the hover axis.
    pub fn pointer_up(&mut self, scene: &Scene, pointer: Pointer) {
        if !self.accepts(&pointer) {
            return;
        }
        self.sync(scene);

        self.end_drag();
        if pointer.button.is_some() {
            self.state.set(Property::Axis(None));
        }
    }

    // ----- internals -----

    fn accepts(&self, pointer: &Pointer) -> bool {
        self.state.enabled() && self.state.object().is_some() && pointer.is_primary_or_unset()
    }

    fn interaction_plane(&self) -> InteractionPlane {
        InteractionPlane::orient(
            self.state.mode(),
            self.state.space(),
            self.state.cache(),
            self.options.plane_extent,
        )
    }

    /// Clear the session and `dragging`, announcing the end of an active drag
    fn end_drag(&mut self) {
        let was_dragging = self.state.dragging();
        self.session = None;

        if was_dragging && self.state.axis().is_some() {
            let mode = self.state.mode();
            self.state.emit(ControlsEvent::MouseUp { mode });
            log::debug!("{} drag ended", mode);
        }
        self.state.set(Property::Dragging(false));
    }

    /// Refresh the frame cache and the presentation. Returns false (after
    /// detaching) when the attached object no longer exists.
    fn sync(&mut self, scene: &Scene) -> bool {
        if let Some(index) = self.state.object() {
            if index >= scene.get_object_count() {
                log::warn!(
                    "object {} vanished from the scene ({} objects left), detaching",
                    index,
                    scene.get_object_count()
                );
                self.detach();
                return false;
            }
            self.world_bounds = scene.world_bounds(index);
        }

        self.state.refresh_cache(scene);
        self.refresh_presentation();
        true
    }

    fn refresh_presentation(&mut self) {
        let layout = self.layout();
        self.pick_volume = layout.pick_volume;
        layout.apply(&mut self.presentation);
    }

    fn render_settings(&mut self, ui: &Ui, scene: &Scene) {
        let object_name = self
            .state
            .object()
            .and_then(|index| scene.get_object(index))
            .map(|object| object.name.clone())
            .unwrap_or_else(|| "none".to_string());
        ui.text(format!("Object: {}", object_name));
        ui.text(format!("Dragging: {}", self.state.dragging()));
        ui.separator();

        let mut mode = self.state.mode();
        for (i, candidate) in Mode::ALL.into_iter().enumerate() {
            if i > 0 {
                ui.same_line();
            }
            if ui.radio_button(candidate.label(), &mut mode, candidate) {
                self.set_mode(mode);
            }
        }

        let mut space = self.state.space();
        for (i, candidate) in [Space::World, Space::Local].into_iter().enumerate() {
            if i > 0 {
                ui.same_line();
            }
            if ui.radio_button(candidate.label(), &mut space, candidate) {
                self.set_space(space);
            }
        }

        ui.separator();

        let mut translation_on = self.state.translation_snap().is_some();
        if let Some(step) = self.state.translation_snap() {
            self.panel.translation_step = step;
        }
        let mut translation_changed = ui.checkbox("Snap translation", &mut translation_on);
        if translation_on {
            translation_changed |= ui
                .input_float("Grid step", &mut self.panel.translation_step)
                .build();
        }
        if translation_changed {
            let snap = translation_on.then_some(self.panel.translation_step);
            if let Err(err) = self.set_translation_snap(snap) {
                log::warn!("{}", err);
            }
        }

        let mut rotation_on = self.state.rotation_snap().is_some();
        if let Some(step) = self.state.rotation_snap() {
            self.panel.rotation_step_degrees = step.to_degrees();
        }
        let mut rotation_changed = ui.checkbox("Snap rotation", &mut rotation_on);
        if rotation_on {
            rotation_changed |= ui
                .input_float("Angle step (deg)", &mut self.panel.rotation_step_degrees)
                .build();
        }
        if rotation_changed {
            let snap = rotation_on.then_some(self.panel.rotation_step_degrees.to_radians());
            if let Err(err) = self.set_rotation_snap(snap) {
                log::warn!("{}", err);
            }
        }

        let mut size = self.state.size();
        if ui.slider("Size", 0.1, 5.0, &mut size) {
            if let Err(err) = self.set_size(size) {
                log::warn!("{}", err);
            }
        }

        if self.state.object().is_some() && ui.button("Detach") {
            self.detach();
        }
    }
}

impl<P: GizmoPresentation + 'static> Gizmo for TransformControls<P> {
    fn initialize(&mut self, scene: &mut Scene) {
        self.sync(scene);
    }

    fn update(&mut self, _delta_time: f32, scene: &mut Scene) {
        TransformControls::update(self, scene);
    }

    fn render_ui(&mut self, ui: &Ui, scene: &mut Scene) {
        let (x, y) = self.get_ui_position();
        let (width, height) = self.get_ui_size();

        ui.window("Transform Controls")
            .size([width, height], imgui::Condition::FirstUseEver)
            .position([x, y], imgui::Condition::FirstUseEver)
            .build(|| {
                self.render_settings(ui, scene);
            });
    }

    fn name(&self) -> &str {
        "Transform Controls"
    }

    fn is_enabled(&self) -> bool {
        self.state.enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        TransformControls::set_enabled(self, enabled);
    }

    fn cleanup(&mut self, _scene: &mut Scene) {
        self.detach();
    }

    fn get_ui_position(&self) -> (f32, f32) {
        (340.0, 20.0)
    }

    fn get_ui_size(&self) -> (f32, f32) {
        (300.0, 260.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::OrbitCamera;
    use crate::gfx::scene::Object;
    use crate::input::PointerButton;
    use cgmath::{InnerSpace, Vector3};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scene() -> (Scene, usize) {
        let camera = OrbitCamera::look_at(Vector3::new(0.0, 10.0, 10.0), Vector3::new(0.0, 0.0, 0.0), 1.0);
        let mut scene = Scene::new(camera);
        let index = scene.add_object(Object::new("crate"));
        (scene, index)
    }

    /// Pick sphere of radius 2 around the unit cube
    fn controls() -> TransformControls {
        TransformControls::with_options(ControlsOptions::default().with_pick_min_radius(1.0))
    }

    fn primary(x: f32, y: f32) -> Pointer {
        Pointer::new(x, y).with_button(PointerButton::Primary)
    }

    fn recorded<P: GizmoPresentation>(controls: &mut TransformControls<P>) -> Rc<RefCell<Vec<String>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        controls.add_listener(move |event| sink.borrow_mut().push(event.name()));
        log
    }

    #[test]
    fn test_attach_rejects_unknown_object() {
        let (scene, _) = scene();
        let mut controls = controls();

        assert_eq!(
            controls.attach(&scene, 5),
            Err(ControlsError::ObjectNotFound { index: 5, count: 1 })
        );
        assert_eq!(controls.object(), None);
    }

    #[test]
    fn test_hover_sets_and_clears_axis() {
        let (scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();
        controls.set_mode(Mode::Elevate);

        controls.pointer_hover(&scene, Pointer::new(0.0, 0.0));
        assert_eq!(controls.axis(), Some(GizmoAxis::Vertical));

        controls.pointer_hover(&scene, Pointer::new(0.99, 0.99));
        assert_eq!(controls.axis(), None);
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let (scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();

        let secondary = Pointer::new(0.0, 0.0).with_button(PointerButton::Secondary);
        controls.pointer_hover(&scene, secondary);
        controls.pointer_down(&scene, secondary);

        assert_eq!(controls.axis(), None);
        assert!(!controls.dragging());
    }

    #[test]
    fn test_press_creates_session_and_emits_mouse_down() {
        let (scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();
        controls.set_mode(Mode::Translate);
        let log = recorded(&mut controls);

        controls.pointer_hover(&scene, primary(0.0, 0.0));
        controls.pointer_down(&scene, primary(0.0, 0.0));

        assert!(controls.dragging());
        assert!(controls.session().is_some());
        assert!(log.borrow().contains(&"mouseDown".to_string()));
    }

    #[test]
    fn test_press_without_hover_does_nothing() {
        let (scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();

        controls.pointer_down(&scene, primary(0.0, 0.0));
        assert!(!controls.dragging());
        assert!(controls.session().is_none());
    }

    #[test]
    fn test_release_emits_mouse_up_and_clears_axis() {
        let (mut scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();
        controls.pointer_hover(&scene, primary(0.0, 0.0));
        controls.pointer_down(&scene, primary(0.0, 0.0));
        controls.pointer_move(&mut scene, primary(0.1, 0.0));

        let log = recorded(&mut controls);
        controls.pointer_up(&scene, primary(0.1, 0.0));

        assert!(!controls.dragging());
        assert!(controls.session().is_none());
        assert_eq!(controls.axis(), None);
        assert_eq!(log.borrow().first().map(String::as_str), Some("mouseUp"));
    }

    #[test]
    fn test_touch_release_keeps_axis() {
        let (scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();
        controls.pointer_hover(&scene, Pointer::new(0.0, 0.0));
        controls.pointer_down(&scene, Pointer::new(0.0, 0.0));
        assert!(controls.dragging());

        controls.pointer_up(&scene, Pointer::new(0.0, 0.0));
        assert!(!controls.dragging());
        assert_eq!(controls.axis(), Some(GizmoAxis::Yaw));
    }

    #[test]
    fn test_setters_validate_and_notify_once() {
        let mut controls = controls();
        let log = recorded(&mut controls);

        controls.set_mode(Mode::Elevate);
        controls.set_mode(Mode::Elevate);
        assert_eq!(controls.set_translation_snap(Some(-1.0)), Err(ControlsError::InvalidSnap(-1.0)));
        assert_eq!(controls.set_size(0.0), Err(ControlsError::InvalidSize(0.0)));
        controls.set_rotation_snap(Some(0.25)).unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["mode-changed", "change", "rotationSnap-changed", "change"]
        );
        assert_eq!(controls.translation_snap(), None);
    }

    #[test]
    fn test_disabled_controls_ignore_pointer() {
        let (mut scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();
        controls.set_enabled(false);

        controls.pointer_hover(&scene, primary(0.0, 0.0));
        controls.pointer_down(&scene, primary(0.0, 0.0));
        controls.pointer_move(&mut scene, primary(0.3, 0.0));

        assert_eq!(controls.axis(), None);
        assert!(!controls.dragging());
        assert_eq!(scene.objects[index].position, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_disabling_mid_drag_keeps_the_drag_open() {
        let (mut scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();
        controls.pointer_hover(&scene, primary(0.0, 0.0));
        controls.pointer_down(&scene, primary(0.0, 0.0));
        let log = recorded(&mut controls);

        controls.set_enabled(false);
        assert_eq!(*log.borrow(), vec!["enabled-changed", "change"]);
        assert!(controls.dragging());
        assert!(controls.session().is_some());

        let rotation = scene.objects[index].rotation;
        controls.pointer_move(&mut scene, primary(0.3, 0.0));
        controls.pointer_up(&scene, primary(0.3, 0.0));
        assert_eq!(scene.objects[index].rotation, rotation);
        assert!(controls.dragging());

        controls.set_enabled(true);
        controls.pointer_up(&scene, primary(0.3, 0.0));
        assert!(!controls.dragging());
        assert!(log.borrow().contains(&"mouseUp".to_string()));
    }

    #[test]
    fn test_mode_switch_rederives_hovered_axis() {
        let (scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();

        controls.set_mode(Mode::Translate);
        controls.set_mode(Mode::Elevate);
        assert_eq!(controls.axis(), None);

        controls.pointer_hover(&scene, primary(0.0, 0.0));
        assert_eq!(controls.axis(), Some(GizmoAxis::Vertical));

        controls.set_mode(Mode::Rotate);
        assert_eq!(controls.axis(), Some(GizmoAxis::Yaw));
    }

    #[test]
    fn test_vanished_object_detaches_on_update() {
        let (mut scene, index) = scene();
        let mut controls = controls();
        controls.attach(&scene, index).unwrap();

        scene.objects.clear();
        controls.update(&scene);

        assert_eq!(controls.object(), None);
        assert_eq!(controls.presentation().visible_mode(), None);
    }

    #[test]
    fn test_presentation_tracks_mode_and_object() {
        let (scene, index) = scene();
        let mut controls = controls();
        assert_eq!(controls.presentation().visible_mode(), None);

        controls.attach(&scene, index).unwrap();
        assert_eq!(controls.presentation().visible_mode(), Some(Mode::Rotate));

        controls.set_mode(Mode::Translate);
        assert_eq!(controls.presentation().visible_mode(), Some(Mode::Translate));

        let floor = controls.presentation().transform().position;
        assert!((floor - Vector3::new(0.0, 0.0, 0.0)).magnitude() < 1e-4);
    }
}
