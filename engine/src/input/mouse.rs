//! Mouse Input Module
//!
//! Pointer buttons and events, decoupled from any windowing system.
//! Conversions exist for winit (native) and DOM button codes (browser).

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button: places blocks.
    Primary,
    /// Usually the right button: removes blocks.
    Secondary,
    /// Owned by the orbit camera.
    Middle,
    /// Additional buttons (back, forward, ...)
    Other(u16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_dom_button(code: i16) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other.max(0) as u16),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton;
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

/// A pointer-down at a client-pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f32,
    pub client_y: f32,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(client_x: f32, client_y: f32, button: PointerButton) -> Self {
        Self {
            client_x,
            client_y,
            button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_button_codes() {
        assert_eq!(PointerButton::from_dom_button(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom_button(1), PointerButton::Middle);
        assert_eq!(PointerButton::from_dom_button(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom_button(4), PointerButton::Other(4));
        assert_eq!(PointerButton::from_dom_button(-1), PointerButton::Other(0));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_winit_buttons() {
        use winit::event::MouseButton;
        assert_eq!(PointerButton::from(MouseButton::Left), PointerButton::Primary);
        assert_eq!(PointerButton::from(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(PointerButton::from(MouseButton::Middle), PointerButton::Middle);
        assert_eq!(PointerButton::from(MouseButton::Other(7)), PointerButton::Other(7));
    }
}
