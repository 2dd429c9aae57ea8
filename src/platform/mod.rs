//! Platform abstraction layer
//!
//! What the frame loop needs from a windowing/input backend:
//! - Time (per-frame delta)
//! - Level-triggered key and mouse button state
//! - Close requests
//! - Frame-rate capping

pub mod scripted;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::collections::HashSet;

pub use scripted::{ScriptedFrame, ScriptedPlatform};

/// Keys the game binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_web_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Space),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Mouse buttons the game binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index
    pub fn from_web_button(button: i16) -> Option<Self> {
        match button {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }
}

/// Windowing/input collaborator driven by the frame loop
pub trait Platform {
    /// Pace frames to at most `fps` per second
    fn set_frame_rate_cap(&mut self, fps: u32);
    /// Loop continuation predicate, checked at the top of every frame
    fn should_close(&self) -> bool;
    /// Seconds since the previous frame
    fn frame_delta(&mut self) -> f32;
    fn is_key_down(&self, key: Key) -> bool;
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;
}

/// Longest delta handed to the simulation (tab switches, debugger pauses)
pub const MAX_FRAME_DELTA: f32 = 0.25;
/// Callback timestamps jitter; accept frames this close to the cap interval
const FRAME_CAP_SLACK_MS: f64 = 1.0;

/// Turns callback timestamps (milliseconds) into capped, clamped deltas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePacer {
    last_time: Option<f64>,
    min_frame_ms: f64,
}

impl FramePacer {
    /// `fps = 0` means uncapped
    pub fn set_frame_rate_cap(&mut self, fps: u32) {
        self.min_frame_ms = if fps == 0 { 0.0 } else { 1000.0 / f64::from(fps) };
    }

    /// Delta in seconds for an accepted frame, `None` when `time_ms` came too
    /// early for the cap. The first frame is accepted with a zero delta.
    pub fn accept(&mut self, time_ms: f64) -> Option<f32> {
        let Some(last) = self.last_time else {
            self.last_time = Some(time_ms);
            return Some(0.0);
        };

        let elapsed = time_ms - last;
        if elapsed + FRAME_CAP_SLACK_MS < self.min_frame_ms {
            return None;
        }

        self.last_time = Some(time_ms);
        Some(((elapsed / 1000.0) as f32).clamp(0.0, MAX_FRAME_DELTA))
    }
}

/// Held keys and buttons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    keys: HashSet<Key>,
    buttons: HashSet<MouseButton>,
}

impl InputState {
    pub fn new(keys: &[Key], buttons: &[MouseButton]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            buttons: buttons.iter().copied().collect(),
        }
    }

    pub fn press_key(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.remove(&button);
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TickInput;

    #[test]
    fn test_web_key_bindings() {
        assert_eq!(Key::from_web_key("w"), Some(Key::W));
        assert_eq!(Key::from_web_key("W"), Some(Key::W));
        assert_eq!(Key::from_web_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_web_key(" "), Some(Key::Space));
        assert_eq!(Key::from_web_key("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_web_key("q"), None);
        assert_eq!(MouseButton::from_web_button(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_web_button(7), None);
    }

    #[test]
    fn test_input_state_press_release() {
        let mut input = InputState::default();
        input.press_key(Key::A);
        input.press_button(MouseButton::Left);
        assert!(input.key_down(Key::A));
        assert!(input.button_down(MouseButton::Left));
        input.release_key(Key::A);
        assert!(!input.key_down(Key::A));
        input.clear();
        assert!(!input.button_down(MouseButton::Left));
    }

    fn assert_delta(got: Option<f32>, want: f32) {
        let got = got.expect("frame should be accepted");
        assert!((got - want).abs() < 1e-6, "delta {} != {}", got, want);
    }

    #[test]
    fn test_pacer_first_frame_has_zero_delta() {
        let mut pacer = FramePacer::default();
        pacer.set_frame_rate_cap(60);
        assert_eq!(pacer.accept(1234.5), Some(0.0));
    }

    #[test]
    fn test_pacer_skips_early_callbacks() {
        let mut pacer = FramePacer::default();
        pacer.set_frame_rate_cap(30);
        pacer.accept(1000.0);
        // 120 Hz display: every other callback is too early for a 30 fps cap
        assert_eq!(pacer.accept(1008.0), None);
        assert_eq!(pacer.accept(1016.0), None);
        assert_eq!(pacer.accept(1025.0), None);
        // Skipped time is carried into the next accepted frame
        assert_delta(pacer.accept(1034.0), 0.034);
    }

    #[test]
    fn test_pacer_accepts_within_slack() {
        let mut pacer = FramePacer::default();
        pacer.set_frame_rate_cap(60);
        pacer.accept(0.0);
        // 16.0ms is short of 16.67ms but inside the 1ms slack
        assert_delta(pacer.accept(16.0), 0.016);
        // 15.0ms is not
        assert_eq!(pacer.accept(31.0), None);
        assert_delta(pacer.accept(32.5), 0.0165);
    }

    #[test]
    fn test_pacer_clamps_long_gaps() {
        let mut pacer = FramePacer::default();
        pacer.set_frame_rate_cap(60);
        pacer.accept(0.0);
        assert_eq!(pacer.accept(5000.0), Some(MAX_FRAME_DELTA));
        assert_delta(pacer.accept(5017.0), 0.017);
    }

    #[test]
    fn test_pacer_zero_fps_is_uncapped() {
        let mut pacer = FramePacer::default();
        pacer.set_frame_rate_cap(0);
        pacer.accept(0.0);
        assert_delta(pacer.accept(1.0), 0.001);
        assert_eq!(pacer.accept(1.0), Some(0.0));
    }

    #[test]
    fn test_poll_maps_bindings() {
        let mut platform = ScriptedPlatform::new(vec![ScriptedFrame::new(
            0.016,
            &[Key::Up, Key::D],
            &[MouseButton::Left],
        )]);
        platform.frame_delta();
        let input = TickInput::poll(&platform);
        assert_eq!(
            input,
            TickInput {
                forward: true,
                back: false,
                turn_left: false,
                turn_right: true,
                fire: true,
            }
        );
    }
}
