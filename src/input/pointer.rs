use winit::event::MouseButton;

/// Which button a pointer record reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Back => PointerButton::Other(3),
            MouseButton::Forward => PointerButton::Other(4),
            MouseButton::Other(code) => PointerButton::Other(code),
        }
    }
}

/// Device independent pointer position.
///
/// Both axes are in [-1, 1]: `x` grows to the right, `y` grows upwards. Touch
/// input carries no button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub button: Option<PointerButton>,
}

impl Pointer {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, button: None }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = Some(button);
        self
    }

    /// True unless the record names a button other than the primary one
    pub fn is_primary_or_unset(&self) -> bool {
        matches!(self.button, None | Some(PointerButton::Primary))
    }

    pub fn ndc(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// The four logical pointer events the controls react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Hover(Pointer),
    Press(Pointer),
    Move(Pointer),
    Release(Pointer),
}

impl PointerEvent {
    pub fn pointer(&self) -> &Pointer {
        match self {
            PointerEvent::Hover(pointer)
            | PointerEvent::Press(pointer)
            | PointerEvent::Move(pointer)
            | PointerEvent::Release(pointer) => pointer,
        }
    }
}

/// Screen rectangle in physical pixels that pointer positions are relative to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    /// Map a pixel position to [-1, 1] on both axes, Y up.
    /// `None` for an empty viewport.
    pub fn normalize(&self, px: f32, py: f32) -> Option<(f32, f32)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }

        let x = (px - self.left) / self.width * 2.0 - 1.0;
        let y = -(py - self.top) / self.height * 2.0 + 1.0;
        Some((x, y))
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}
