//! Headless platform that replays a fixed script of frames
//!
//! Used by the native binary and by tests: each scripted frame supplies a
//! delta and the input held during that frame. The platform asks to close
//! once the script runs out or Escape is held.

use std::collections::VecDeque;

use super::{InputState, Key, MouseButton, Platform};

/// One frame of scripted time and input
#[derive(Debug, Clone)]
pub struct ScriptedFrame {
    pub delta: f32,
    pub input: InputState,
}

impl ScriptedFrame {
    pub fn new(delta: f32, keys: &[Key], buttons: &[MouseButton]) -> Self {
        Self {
            delta,
            input: InputState::new(keys, buttons),
        }
    }

    /// A frame with nothing held
    pub fn idle(delta: f32) -> Self {
        Self::new(delta, &[], &[])
    }
}

#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    frames: VecDeque<ScriptedFrame>,
    current: InputState,
    frame_rate_cap: Option<u32>,
}

impl ScriptedPlatform {
    pub fn new(frames: impl IntoIterator<Item = ScriptedFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            current: InputState::default(),
            frame_rate_cap: None,
        }
    }

    /// Frames not yet consumed
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Cap requested by the frame loop, if any
    pub fn frame_rate_cap(&self) -> Option<u32> {
        self.frame_rate_cap
    }
}

impl Platform for ScriptedPlatform {
    fn set_frame_rate_cap(&mut self, fps: u32) {
        // Scripted time is not real time; just remember the request
        self.frame_rate_cap = Some(fps);
    }

    fn should_close(&self) -> bool {
        self.frames.is_empty() || self.current.key_down(Key::Escape)
    }

    fn frame_delta(&mut self) -> f32 {
        match self.frames.pop_front() {
            Some(frame) => {
                self.current = frame.input;
                frame.delta
            }
            None => 0.0,
        }
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.current.key_down(key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.current.button_down(button)
    }
}
