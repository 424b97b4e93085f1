//! Keyboard state the simulation reads once per tick.

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Tracked state of a single button.
///
/// Events update the raw state whenever the host delivers them, edges are
/// computed against the previous simulation tick so a press is never missed
/// between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Whether the button is down right now.
    is_down: bool,
    /// Whether the button was down when the previous tick ran.
    was_down_previous_tick: bool,
}

impl ButtonState {
    /// Apply a raw down or up event.
    #[inline]
    pub(crate) fn handle_event(&mut self, is_down: bool) {
        self.is_down = is_down;
    }

    /// Roll the state over, must run once per simulation tick.
    #[inline]
    pub(crate) fn update(&mut self) {
        self.was_down_previous_tick = self.is_down;
    }

    /// Whether the button is currently held down.
    #[inline]
    #[must_use]
    pub const fn held(&self) -> bool {
        self.is_down
    }

    /// Whether the button went from released to held since the previous tick.
    #[inline]
    #[must_use]
    pub const fn pressed(&self) -> bool {
        self.is_down && !self.was_down_previous_tick
    }

    /// Whether the button went from held to released since the previous tick.
    #[inline]
    #[must_use]
    pub const fn released(&self) -> bool {
        !self.is_down && self.was_down_previous_tick
    }
}

/// Snapshot of the three game buttons.
///
/// The left and right arrow keys steer the ship, space fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    /// State of the left arrow key.
    left: ButtonState,
    /// State of the right arrow key.
    right: ButtonState,
    /// State of the space bar.
    fire: ButtonState,
}

impl Input {
    /// Route a keyboard event to the button it belongs to.
    ///
    /// Key repeats update the raw state with the value it already has, which
    /// is harmless.
    pub(crate) fn handle_event(&mut self, event: &KeyEvent) {
        let is_down = event.state == ElementState::Pressed;

        match event.physical_key {
            PhysicalKey::Code(KeyCode::ArrowLeft) => self.left.handle_event(is_down),
            PhysicalKey::Code(KeyCode::ArrowRight) => self.right.handle_event(is_down),
            PhysicalKey::Code(KeyCode::Space) => self.fire.handle_event(is_down),
            _ => (),
        }
    }

    /// Roll all buttons over after a simulation tick consumed the snapshot.
    pub(crate) fn update(&mut self) {
        self.left.update();
        self.right.update();
        self.fire.update();
    }

    /// State of the left arrow key.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> ButtonState {
        self.left
    }

    /// State of the right arrow key.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> ButtonState {
        self.right
    }

    /// State of the space bar.
    #[inline]
    #[must_use]
    pub const fn fire(&self) -> ButtonState {
        self.fire
    }
}
