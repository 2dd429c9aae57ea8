//! Browser platform (wasm32)
//!
//! DOM listeners record held keys/buttons into shared state; the
//! `requestAnimationFrame` callback feeds timestamps through `begin_frame`,
//! which also enforces the frame-rate cap by skipping early callbacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{FocusEvent, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::{FramePacer, InputState, Key, MouseButton, Platform};

pub struct WebPlatform {
    input: Rc<RefCell<InputState>>,
    close_requested: Rc<Cell<bool>>,
    pacer: FramePacer,
    pending_delta: f32,
}

impl Default for WebPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl WebPlatform {
    pub fn new() -> Self {
        Self {
            input: Rc::new(RefCell::new(InputState::default())),
            close_requested: Rc::new(Cell::new(false)),
            pacer: FramePacer::default(),
            pending_delta: 0.0,
        }
    }

    /// Install keyboard, mouse and focus listeners
    pub fn attach(&self, window: &web_sys::Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        // Key down
        {
            let input = self.input.clone();
            let close = self.close_requested.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_web_key(&event.key()) {
                    // Keep arrows/space from scrolling the page
                    event.prevent_default();
                    if key == Key::Escape {
                        log::info!("Exit requested");
                        close.set(true);
                    }
                    input.borrow_mut().press_key(key);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let input = self.input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_web_key(&event.key()) {
                    input.borrow_mut().release_key(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse down
        {
            let input = self.input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(button) = MouseButton::from_web_button(event.button()) {
                    input.borrow_mut().press_button(button);
                }
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse up (on window so releases outside the canvas still count)
        {
            let input = self.input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(button) = MouseButton::from_web_button(event.button()) {
                    input.borrow_mut().release_button(button);
                }
            });
            window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: keyup events will never arrive, so drop everything
        {
            let input = self.input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                input.borrow_mut().clear();
                log::debug!("Input released (window blur)");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Accept or skip a `requestAnimationFrame` timestamp (milliseconds)
    ///
    /// Returns false when the callback arrived before the frame-rate cap
    /// allows another frame.
    pub fn begin_frame(&mut self, time_ms: f64) -> bool {
        match self.pacer.accept(time_ms) {
            Some(dt) => {
                self.pending_delta = dt;
                true
            }
            None => false,
        }
    }
}

impl Platform for WebPlatform {
    fn set_frame_rate_cap(&mut self, fps: u32) {
        self.pacer.set_frame_rate_cap(fps);
    }

    fn should_close(&self) -> bool {
        self.close_requested.get()
    }

    fn frame_delta(&mut self) -> f32 {
        std::mem::take(&mut self.pending_delta)
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.input.borrow().key_down(key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.input.borrow().button_down(button)
    }
}
