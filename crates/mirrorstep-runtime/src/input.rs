//! Input state management

use mirrorstep_core::Direction;
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Tracks keyboard state per frame.
///
/// Presses are edge-triggered: a key that is held produces a single
/// just-pressed event on the frame it goes down, never an auto-repeat.
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Keys pressed this frame
    keys_just_pressed: HashSet<KeyCode>,

    /// Action map: action name -> list of key bindings
    action_map: HashMap<String, Vec<KeyCode>>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            action_map: Self::default_action_map(),
        }
    }

    fn default_action_map() -> HashMap<String, Vec<KeyCode>> {
        let mut map = HashMap::new();
        map.insert(
            Self::action_for(Direction::Up).into(),
            vec![KeyCode::KeyW, KeyCode::ArrowUp],
        );
        map.insert(
            Self::action_for(Direction::Down).into(),
            vec![KeyCode::KeyS, KeyCode::ArrowDown],
        );
        map.insert(
            Self::action_for(Direction::Left).into(),
            vec![KeyCode::KeyA, KeyCode::ArrowLeft],
        );
        map.insert(
            Self::action_for(Direction::Right).into(),
            vec![KeyCode::KeyD, KeyCode::ArrowRight],
        );
        map
    }

    /// Action name bound to a movement direction
    pub fn action_for(direction: Direction) -> &'static str {
        match direction {
            Direction::Up => "move_up",
            Direction::Down => "move_down",
            Direction::Left => "move_left",
            Direction::Right => "move_right",
        }
    }

    /// Bind an action to one or more keys
    pub fn bind_action(&mut self, action: impl Into<String>, keys: Vec<KeyCode>) {
        self.action_map.insert(action.into(), keys);
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        if !self.keys_down.contains(&key) {
            self.keys_just_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Call at end of frame to clear per-frame state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
    }

    // --- Query methods ---

    /// Was a key pressed this frame?
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Was an action just pressed this frame?
    pub fn is_action_just_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_just_pressed.contains(k)))
            .unwrap_or(false)
    }

    /// The direction pressed this frame, if any.
    ///
    /// When several direction keys go down on the same frame, the first one in
    /// up, down, left, right order wins.
    pub fn direction_just_pressed(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.is_action_just_pressed(Self::action_for(*dir)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_transitions() {
        let mut input = InputState::new();

        input.process_key_down(KeyCode::KeyW);
        assert!(input.is_key_just_pressed(KeyCode::KeyW));

        // End frame clears just_pressed
        input.end_frame();
        assert!(!input.is_key_just_pressed(KeyCode::KeyW));

        // Releasing and pressing again is a fresh edge
        input.process_key_up(KeyCode::KeyW);
        input.process_key_down(KeyCode::KeyW);
        assert!(input.is_key_just_pressed(KeyCode::KeyW));
    }

    #[test]
    fn test_held_key_does_not_repeat() {
        let mut input = InputState::new();
        input.process_key_down(KeyCode::KeyD);
        assert_eq!(input.direction_just_pressed(), Some(Direction::Right));
        input.end_frame();

        // OS key repeat delivers another key-down while held
        input.process_key_down(KeyCode::KeyD);
        assert_eq!(input.direction_just_pressed(), None);
    }

    #[test]
    fn test_default_direction_bindings() {
        let cases = [
            (KeyCode::KeyW, Direction::Up),
            (KeyCode::ArrowDown, Direction::Down),
            (KeyCode::KeyA, Direction::Left),
            (KeyCode::ArrowRight, Direction::Right),
        ];
        for (key, dir) in cases {
            let mut input = InputState::new();
            input.process_key_down(key);
            assert_eq!(input.direction_just_pressed(), Some(dir));
        }
    }

    #[test]
    fn test_direction_priority() {
        let mut input = InputState::new();
        input.process_key_down(KeyCode::KeyD);
        input.process_key_down(KeyCode::KeyS);
        assert_eq!(input.direction_just_pressed(), Some(Direction::Down));
    }

    #[test]
    fn test_custom_binding() {
        let mut input = InputState::new();
        input.bind_action("move_up", vec![KeyCode::KeyK]);

        input.process_key_down(KeyCode::KeyW);
        assert_eq!(input.direction_just_pressed(), None);

        input.process_key_down(KeyCode::KeyK);
        assert_eq!(input.direction_just_pressed(), Some(Direction::Up));
    }
}
