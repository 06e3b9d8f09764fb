//! # Change Notifications
//!
//! Events emitted by the transform controls and the listener registry that
//! delivers them. Delivery is synchronous: a listener runs inside the call
//! that caused the event.

use std::fmt;

use super::state::{Mode, Property, StateKey};

/// Everything an external collaborator can observe
#[derive(Debug, Clone, PartialEq)]
pub enum ControlsEvent {
    /// A shared-state key took a new value (`"<key>-changed"`)
    PropertyChanged(Property),
    /// Any mutation of the shared state or of the target object (`"change"`)
    Change,
    /// A drag started (`"mouseDown"`)
    MouseDown { mode: Mode },
    /// A drag ended (`"mouseUp"`)
    MouseUp { mode: Mode },
    /// The target object's transform was written (`"objectChange"`)
    ObjectChange,
}

impl ControlsEvent {
    /// Event type string, e.g. `"mode-changed"` or `"mouseDown"`
    pub fn name(&self) -> String {
        match self {
            ControlsEvent::PropertyChanged(property) => format!("{}-changed", property.key()),
            ControlsEvent::Change => "change".to_string(),
            ControlsEvent::MouseDown { .. } => "mouseDown".to_string(),
            ControlsEvent::MouseUp { .. } => "mouseUp".to_string(),
            ControlsEvent::ObjectChange => "objectChange".to_string(),
        }
    }

    /// The key a `PropertyChanged` event is about
    pub fn key(&self) -> Option<StateKey> {
        match self {
            ControlsEvent::PropertyChanged(property) => Some(property.key()),
            _ => None,
        }
    }
}

impl fmt::Display for ControlsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlsEvent::PropertyChanged(property) => {
                write!(f, "{} value={}", self.name(), property)
            }
            ControlsEvent::MouseDown { mode } | ControlsEvent::MouseUp { mode } => {
                write!(f, "{} mode={}", self.name(), mode)
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Handle returned by [`EventDispatcher::add_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ControlsEvent)>;

/// Ordered list of listeners; each event goes to every listener in
/// registration order.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ControlsEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not registered
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn dispatch(&mut self, event: &ControlsEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
