//! Input events and double-buffered input state.
//!
//! Events are produced asynchronously by whatever captures raw input (a window, a browser, a
//! test) and are sent through an [`InputSender`]. The host drains them at the start of each frame,
//! so [`InputState`] only ever has a single writer.

use cgmath::Point2;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use std::collections::HashMap;

/// Keyboard key identifier, using browser key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const TAB: KeyCode = KeyCode(9);
    pub const RETURN: KeyCode = KeyCode(13);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const SPACE: KeyCode = KeyCode(32);
    pub const LEFT: KeyCode = KeyCode(37);
    pub const UP: KeyCode = KeyCode(38);
    pub const RIGHT: KeyCode = KeyCode(39);
    pub const DOWN: KeyCode = KeyCode(40);
    pub const N: KeyCode = KeyCode(78);
    pub const P: KeyCode = KeyCode(80);
}

/// A raw input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to a position in global coordinates.
    PointerMove { x: f64, y: f64 },
    PointerDown,
    PointerUp,
    /// A key was pressed. `repeat` is set for OS auto-repeat, which does not count as a new press.
    KeyDown { code: KeyCode, repeat: bool },
    KeyUp { code: KeyCode },
}

/// Level and edge state of a button.
///
/// Edge flags (`just_pressed`, `just_released`) are only valid during the frame in which the
/// transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub is_down: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl ButtonState {
    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Pointer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Point2<f64>,
    pub button: ButtonState,
}

impl Default for PointerState {
    fn default() -> Self {
        PointerState {
            position: Point2::new(0., 0.),
            button: ButtonState::default(),
        }
    }
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: PointerState,
    keys: HashMap<KeyCode, ButtonState>,
    last_key: Option<KeyCode>,
}

impl InputState {
    pub fn new() -> InputState {
        InputState::default()
    }

    /// Applies a single input event.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer.position = Point2::new(x, y);
            }
            InputEvent::PointerDown => {
                self.pointer.button.just_pressed = true;
                self.pointer.button.is_down = true;
            }
            InputEvent::PointerUp => {
                self.pointer.button.just_released = true;
                self.pointer.button.is_down = false;
            }
            InputEvent::KeyDown { code, repeat } => {
                self.keys.insert(
                    code,
                    ButtonState {
                        is_down: true,
                        just_pressed: !repeat,
                        just_released: false,
                    },
                );
                self.last_key = Some(code);
            }
            InputEvent::KeyUp { code } => {
                self.keys.insert(
                    code,
                    ButtonState {
                        is_down: false,
                        just_pressed: false,
                        just_released: true,
                    },
                );
            }
        }
    }

    /// Clears all edge flags; called once at the end of every frame.
    pub fn end_frame(&mut self) {
        self.pointer.button.clear_edges();
        for key in self.keys.values_mut() {
            key.clear_edges();
        }
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_position(&self) -> Point2<f64> {
        self.pointer.position
    }

    pub fn pointer_pressed(&self) -> bool {
        self.pointer.button.just_pressed
    }

    pub fn pointer_down(&self) -> bool {
        self.pointer.button.is_down
    }

    pub fn pointer_released(&self) -> bool {
        self.pointer.button.just_released
    }

    /// Returns the state of a key. Keys that were never seen read as released.
    pub fn key(&self, code: KeyCode) -> ButtonState {
        self.keys.get(&code).copied().unwrap_or_default()
    }

    pub fn key_pressed(&self, code: KeyCode) -> bool {
        self.key(code).just_pressed
    }

    pub fn key_down(&self, code: KeyCode) -> bool {
        self.key(code).is_down
    }

    pub fn key_released(&self, code: KeyCode) -> bool {
        self.key(code).just_released
    }

    /// The most recently pressed key, if any.
    pub fn last_key(&self) -> Option<KeyCode> {
        self.last_key
    }
}

/// Sends input events to a host. Can be cloned and moved to other threads.
#[derive(Debug, Clone)]
pub struct InputSender(Sender<InputEvent>);

impl InputSender {
    /// Queues an event for the next frame.
    ///
    /// Returns false if the host has been dropped.
    pub fn send(&self, event: InputEvent) -> bool {
        self.0.send(event).is_ok()
    }
}

/// The receiving end of the input queue.
#[derive(Debug)]
pub(crate) struct InputQueue {
    sender: Sender<InputEvent>,
    recv: Receiver<InputEvent>,
}

impl InputQueue {
    pub(crate) fn new() -> InputQueue {
        let (sender, recv) = channel::unbounded();
        InputQueue { sender, recv }
    }

    pub(crate) fn sender(&self) -> InputSender {
        InputSender(self.sender.clone())
    }

    /// Receives all queued events and applies them to the input state.
    ///
    /// Returns the number of events applied.
    pub(crate) fn drain_into(&self, input: &mut InputState) -> usize {
        let mut count = 0;
        loop {
            match self.recv.try_recv() {
                Ok(event) => {
                    input.apply(event);
                    count += 1;
                }
                // the queue holds its own sender, so it can’t actually disconnect
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_edges_last_one_frame() {
        let mut input = InputState::new();
        input.apply(InputEvent::PointerMove { x: 4., y: 5. });
        input.apply(InputEvent::PointerDown);
        assert!(input.pointer_pressed());
        assert!(input.pointer_down());
        assert_eq!(input.pointer_position(), Point2::new(4., 5.));

        input.end_frame();
        assert!(!input.pointer_pressed());
        assert!(input.pointer_down(), "level state survives the frame");

        input.apply(InputEvent::PointerUp);
        assert!(input.pointer_released());
        assert!(!input.pointer_down());
        input.end_frame();
        assert!(!input.pointer_released());
    }

    #[test]
    fn key_repeat_is_not_a_press() {
        let mut input = InputState::new();
        input.apply(InputEvent::KeyDown {
            code: KeyCode::SPACE,
            repeat: false,
        });
        assert!(input.key_pressed(KeyCode::SPACE));
        input.end_frame();

        input.apply(InputEvent::KeyDown {
            code: KeyCode::SPACE,
            repeat: true,
        });
        assert!(!input.key_pressed(KeyCode::SPACE));
        assert!(input.key_down(KeyCode::SPACE));
        assert_eq!(input.last_key(), Some(KeyCode::SPACE));

        input.apply(InputEvent::KeyUp {
            code: KeyCode::SPACE,
        });
        assert!(input.key_released(KeyCode::SPACE));
        assert!(!input.key_down(KeyCode::SPACE));
    }

    #[test]
    fn end_frame_sweeps_every_key() {
        let mut input = InputState::new();
        for code in &[KeyCode::LEFT, KeyCode::N, KeyCode::P] {
            input.apply(InputEvent::KeyDown {
                code: *code,
                repeat: false,
            });
        }
        input.apply(InputEvent::KeyUp { code: KeyCode::N });
        input.end_frame();

        for code in &[KeyCode::LEFT, KeyCode::N, KeyCode::P] {
            let key = input.key(*code);
            assert!(!key.just_pressed && !key.just_released, "{:?}", code);
        }
        assert!(input.key_down(KeyCode::LEFT));
        assert!(!input.key_down(KeyCode::N));
        assert!(!input.key_pressed(KeyCode(1234)));
    }

    #[test]
    fn queue_delivers_in_order() {
        let queue = InputQueue::new();
        let sender = queue.sender();
        let handle = std::thread::spawn(move || {
            sender.send(InputEvent::PointerMove { x: 1., y: 1. });
            sender.send(InputEvent::PointerMove { x: 2., y: 3. });
            sender.send(InputEvent::PointerDown);
        });
        handle.join().unwrap();

        let mut input = InputState::new();
        assert_eq!(queue.drain_into(&mut input), 3);
        assert_eq!(input.pointer_position(), Point2::new(2., 3.));
        assert!(input.pointer_pressed());
        assert_eq!(queue.drain_into(&mut input), 0);
    }
}
