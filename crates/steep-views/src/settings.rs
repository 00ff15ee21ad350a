use std::time::Duration;
use steep::widgets::Easing;

/// Startup configuration for [`Views`](crate::Views).
///
/// These are the program's flags: they fix the countdown length, the two
/// clock cadences and the easing curve of the download bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Countdown start value; the program quits one tick after it reaches 0.
    pub ticks: u32,
    /// Time between countdown ticks.
    pub tick_interval: Duration,
    /// Time between animation frames.
    pub frame_interval: Duration,
    /// Frames for the linear fraction to go from 0 to 1.
    pub animation_frames: u32,
    /// Curve applied to the linear fraction.
    pub easing: Easing,
}

impl Settings {
    /// Frames per tick used by [`Settings::default`].
    pub const DEFAULT_FPS: u32 = 16;

    /// Build settings from a tick length and a frame rate per tick.
    pub fn with_clock(mut self, tick_interval: Duration, fps: u32) -> Self {
        self.tick_interval = tick_interval;
        self.frame_interval = tick_interval / fps.max(1);
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        let tick_interval = Duration::from_secs(1);
        Self {
            ticks: 10,
            tick_interval,
            frame_interval: tick_interval / Self::DEFAULT_FPS,
            animation_frames: 120,
            easing: Easing::default(),
        }
    }
}
