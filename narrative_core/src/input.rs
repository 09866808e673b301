//! Input services consumed by the engine.

/// Logical buttons of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    /// Confirm.
    A,
    /// Cancel.
    B,
}

const BUTTON_COUNT: usize = 6;

impl Button {
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::B,
    ];

    const fn index(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Left => 2,
            Button::Right => 3,
            Button::A => 4,
            Button::B => 5,
        }
    }
}

/// Debounced button edges, sampled once per frame.
pub trait Buttons {
    /// The button went down this frame.
    fn pressed(&self, button: Button) -> bool;

    /// The button has been held long enough to auto-repeat this frame.
    fn repeated(&self, button: Button, delay: u8) -> bool;

    /// Pressed this frame or auto-repeating.
    fn fired(&self, button: Button, delay: u8) -> bool {
        self.repeated(button, delay) || self.pressed(button)
    }
}

/// Tracks how long each button has been held, from raw per-frame samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    held_frames: [u16; BUTTON_COUNT],
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. `is_down` reports the raw state of each button.
    pub fn update(&mut self, is_down: impl Fn(Button) -> bool) {
        for button in Button::ALL {
            let held = &mut self.held_frames[button.index()];
            *held = if is_down(button) { held.saturating_add(1) } else { 0 };
        }
    }

    /// Advance one frame with exactly `buttons` held down.
    pub fn update_held(&mut self, buttons: &[Button]) {
        self.update(|button| buttons.contains(&button));
    }

    /// A frame in which `button` was just pressed and nothing else is down.
    pub fn tap(button: Button) -> Self {
        let mut state = Self::new();
        state.update_held(&[button]);
        state
    }

    pub fn held_frames(&self, button: Button) -> u16 {
        self.held_frames[button.index()]
    }
}

impl Buttons for ButtonState {
    fn pressed(&self, button: Button) -> bool {
        self.held_frames(button) == 1
    }

    fn repeated(&self, button: Button, delay: u8) -> bool {
        let held = self.held_frames(button);
        match delay {
            0 | 1 => held > 0,
            delay => held > 1 && held % delay as u16 == 0,
        }
    }
}
