//! Frame loop
//!
//! One frame: poll delta and input, step the simulation, draw, present.
//! The platform's close request is the only way out.

use crate::error::SimResult;
use crate::platform::Platform;
use crate::renderer::{Canvas, RenderStyle, draw_world};
use crate::settings::Settings;
use crate::sim::{TickInput, World, tick};

/// Game instance holding all state
pub struct Game {
    pub world: World,
    pub style: RenderStyle,
    frame_rate_cap: u32,
    frames: u64,
}

impl Game {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            world: World::new(seed, settings.asteroid_population),
            style: RenderStyle::from_settings(settings),
            frame_rate_cap: settings.frame_rate_cap,
            frames: 0,
        }
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run a single frame
    pub fn frame<P, C>(&mut self, platform: &mut P, canvas: &mut C) -> SimResult<()>
    where
        P: Platform + ?Sized,
        C: Canvas + ?Sized,
    {
        let dt = platform.frame_delta();
        let input = TickInput::poll(&*platform);
        tick(&mut self.world, &input, dt)?;

        canvas.begin_frame();
        draw_world(canvas, &self.world, &self.style);
        canvas.end_frame();

        self.frames += 1;
        Ok(())
    }

    /// Run frames until the platform asks to close; returns the frame count
    pub fn run<P, C>(&mut self, platform: &mut P, canvas: &mut C) -> SimResult<u64>
    where
        P: Platform + ?Sized,
        C: Canvas + ?Sized,
    {
        platform.set_frame_rate_cap(self.frame_rate_cap);
        let start = self.frames;
        log::info!(
            "Frame loop starting (seed {}, cap {} fps)",
            self.world.seed,
            self.frame_rate_cap
        );

        while !platform.should_close() {
            self.frame(platform, canvas)?;
        }

        log::info!(
            "Frame loop finished after {} frames ({:.2}s simulated)",
            self.frames - start,
            self.world.now
        );
        Ok(self.frames - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Key, MouseButton, ScriptedFrame, ScriptedPlatform};
    use crate::renderer::canvas::RecordingCanvas;

    fn quiet_settings() -> Settings {
        Settings {
            asteroid_population: 0,
            ..Settings::default()
        }
    }

    #[test]
    fn test_run_consumes_script_and_accumulates_time() {
        let deltas = [0.016f32, 0.017, 0.020, 0.0, 0.033];
        let mut platform = ScriptedPlatform::new(deltas.iter().map(|&d| ScriptedFrame::idle(d)));
        let mut canvas = RecordingCanvas::default();
        let mut game = Game::new(1, &quiet_settings());

        let frames = game.run(&mut platform, &mut canvas).unwrap();

        assert_eq!(frames, 5);
        assert_eq!(canvas.frames_begun, 5);
        assert_eq!(canvas.frames_ended, 5);
        assert_eq!(canvas.clears.len(), 5);
        let expected = deltas.iter().fold(0.0f64, |acc, &d| acc + f64::from(d));
        assert_eq!(game.world.now, expected);
        assert_eq!(platform.frame_rate_cap(), Some(crate::consts::TARGET_FPS));
    }

    #[test]
    fn test_escape_stops_the_loop() {
        let mut script = vec![ScriptedFrame::idle(0.016); 3];
        script.push(ScriptedFrame::new(0.016, &[Key::Escape], &[]));
        script.extend(vec![ScriptedFrame::idle(0.016); 10]);
        let mut platform = ScriptedPlatform::new(script);
        let mut canvas = RecordingCanvas::default();
        let mut game = Game::new(1, &quiet_settings());

        let frames = game.run(&mut platform, &mut canvas).unwrap();

        // The Escape frame itself still runs; the check happens at the top
        assert_eq!(frames, 4);
        assert_eq!(platform.remaining(), 10);
    }

    #[test]
    fn test_mouse_fire_respects_cooldown() {
        // 0.125s frames: shots at t=0.125, 0.5 and 0.875
        let script = vec![ScriptedFrame::new(0.125, &[], &[MouseButton::Left]); 9];
        let mut platform = ScriptedPlatform::new(script);
        let mut canvas = RecordingCanvas::default();
        let mut game = Game::new(1, &quiet_settings());

        game.run(&mut platform, &mut canvas).unwrap();

        assert_eq!(game.world.bullets.len(), 3);
    }

    #[test]
    fn test_asteroids_appear_with_population_target() {
        let settings = Settings {
            asteroid_population: 3,
            ..Settings::default()
        };
        let mut platform = ScriptedPlatform::new(vec![ScriptedFrame::idle(0.016); 5]);
        let mut canvas = RecordingCanvas::default();
        let mut game = Game::new(9, &settings);

        game.run(&mut platform, &mut canvas).unwrap();

        assert_eq!(game.world.asteroids.len(), 3);
        assert_eq!(game.frames(), 5);
    }
}
