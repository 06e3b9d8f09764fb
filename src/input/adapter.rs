use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent},
};

use super::pointer::{Pointer, PointerButton, PointerEvent, Viewport};

/// Turns winit mouse and touch input into [`PointerEvent`]s.
///
/// Owns no transform state. Mouse presses and releases carry their button;
/// touch events never do, so a lifted finger keeps the hover state intact.
#[derive(Debug, Clone)]
pub struct PointerAdapter {
    viewport: Viewport,
    cursor: Option<PhysicalPosition<f64>>,
    primary_held: bool,
    active_touch: Option<u64>,
}

impl PointerAdapter {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cursor: None,
            primary_held: false,
            active_touch: None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Dispatch the events this adapter understands; everything else yields nothing
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Vec<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::Touch(touch) => self.touch(touch),
            WindowEvent::Resized(size) => {
                self.viewport = Viewport::from_size(size.width, size.height);
                Vec::new()
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Hover on every motion, plus a primary-button move while the button is held
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Vec<PointerEvent> {
        self.cursor = Some(position);

        let Some(pointer) = self.pointer_at(position) else {
            return Vec::new();
        };

        let mut events = vec![PointerEvent::Hover(pointer)];
        if self.primary_held {
            events.push(PointerEvent::Move(pointer.with_button(PointerButton::Primary)));
        }
        events
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Vec<PointerEvent> {
        let button = PointerButton::from(button);
        if button == PointerButton::Primary {
            self.primary_held = state == ElementState::Pressed;
        }

        let Some(pointer) = self.cursor.and_then(|position| self.pointer_at(position)) else {
            return Vec::new();
        };
        let pointer = pointer.with_button(button);

        match state {
            ElementState::Pressed => vec![PointerEvent::Hover(pointer), PointerEvent::Press(pointer)],
            ElementState::Released => vec![PointerEvent::Release(pointer)],
        }
    }

    pub fn touch(&mut self, touch: &Touch) -> Vec<PointerEvent> {
        self.touch_input(touch.id, touch.phase, touch.location)
    }

    /// Track the first finger down until it lifts; other fingers are ignored
    pub fn touch_input(
        &mut self,
        id: u64,
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
    ) -> Vec<PointerEvent> {
        match (phase, self.active_touch) {
            (TouchPhase::Started, None) => self.active_touch = Some(id),
            (_, Some(active)) if active == id => {}
            _ => return Vec::new(),
        }

        let Some(pointer) = self.pointer_at(location) else {
            if matches!(phase, TouchPhase::Ended | TouchPhase::Cancelled) {
                self.active_touch = None;
            }
            return Vec::new();
        };

        match phase {
            TouchPhase::Started => vec![PointerEvent::Hover(pointer), PointerEvent::Press(pointer)],
            TouchPhase::Moved => vec![PointerEvent::Hover(pointer), PointerEvent::Move(pointer)],
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active_touch = None;
                vec![PointerEvent::Release(pointer)]
            }
        }
    }

    fn pointer_at(&self, position: PhysicalPosition<f64>) -> Option<Pointer> {
        let (x, y) = self.viewport.normalize(position.x as f32, position.y as f32)?;
        Some(Pointer::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> PointerAdapter {
        PointerAdapter::new(Viewport::from_size(800, 600))
    }

    fn at(x: f64, y: f64) -> PhysicalPosition<f64> {
        PhysicalPosition::new(x, y)
    }

    #[test]
    fn test_mouse_drag_sequence() {
        let mut adapter = adapter();

        let hover = adapter.cursor_moved(at(400.0, 300.0));
        assert_eq!(hover, vec![PointerEvent::Hover(Pointer::new(0.0, 0.0))]);

        let press = adapter.mouse_input(ElementState::Pressed, MouseButton::Left);
        let pressed = Pointer::new(0.0, 0.0).with_button(PointerButton::Primary);
        assert_eq!(press, vec![PointerEvent::Hover(pressed), PointerEvent::Press(pressed)]);

        let drag = adapter.cursor_moved(at(600.0, 150.0));
        let moved = Pointer::new(0.5, 0.5);
        assert_eq!(
            drag,
            vec![
                PointerEvent::Hover(moved),
                PointerEvent::Move(moved.with_button(PointerButton::Primary))
            ]
        );

        let release = adapter.mouse_input(ElementState::Released, MouseButton::Left);
        assert_eq!(release, vec![PointerEvent::Release(moved.with_button(PointerButton::Primary))]);

        let after = adapter.cursor_moved(at(400.0, 300.0));
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_press_without_cursor_is_dropped() {
        let mut adapter = adapter();
        assert!(adapter.mouse_input(ElementState::Pressed, MouseButton::Left).is_empty());
    }

    #[test]
    fn test_secondary_button_does_not_start_moves() {
        let mut adapter = adapter();
        adapter.cursor_moved(at(10.0, 10.0));

        let press = adapter.mouse_input(ElementState::Pressed, MouseButton::Right);
        assert_eq!(press[1].pointer().button, Some(PointerButton::Secondary));
        assert_eq!(adapter.cursor_moved(at(20.0, 20.0)).len(), 1);
    }

    #[test]
    fn test_touch_has_no_button_and_tracks_first_finger() {
        let mut adapter = adapter();

        let start = adapter.touch_input(1, TouchPhase::Started, at(400.0, 300.0));
        assert!(matches!(start.as_slice(), [PointerEvent::Hover(_), PointerEvent::Press(_)]));
        assert!(start.iter().all(|event| event.pointer().button.is_none()));

        assert!(adapter.touch_input(2, TouchPhase::Started, at(0.0, 0.0)).is_empty());
        assert!(adapter.touch_input(2, TouchPhase::Moved, at(0.0, 0.0)).is_empty());

        let moved = adapter.touch_input(1, TouchPhase::Moved, at(800.0, 0.0));
        assert_eq!(moved[1], PointerEvent::Move(Pointer::new(1.0, 1.0)));

        let end = adapter.touch_input(1, TouchPhase::Ended, at(800.0, 0.0));
        assert_eq!(end, vec![PointerEvent::Release(Pointer::new(1.0, 1.0))]);

        assert_eq!(adapter.touch_input(2, TouchPhase::Started, at(0.0, 0.0)).len(), 2);
    }
}
