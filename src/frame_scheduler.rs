//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::clock::WallClock;
use crate::{OutputDriver, Renderer};

/// Default frame duration, ten frames per second.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(100);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether the driver accepted the frame.
    pub written: bool,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Reads the wall clock and calls the renderer
/// - Pushes the frame to the output driver, counting failed writes
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver, rtc);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::at(result.next_deadline).await;
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, C: WallClock, const INTENT_CHANNEL_SIZE: usize> {
    output: O,
    clock: C,
    renderer: Renderer<'a, INTENT_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
    write_errors: u32,
}

impl<'a, O: OutputDriver, C: WallClock, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, C, INTENT_CHANNEL_SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` for frame timing.
    pub fn new(renderer: Renderer<'a, INTENT_CHANNEL_SIZE>, driver: O, clock: C) -> Self {
        Self::with_frame_duration(renderer, driver, clock, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer<'a, INTENT_CHANNEL_SIZE>,
        driver: O,
        clock: C,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            clock,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
            write_errors: 0,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a stall instead of bursting to catch up
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let unix_time = self.clock.unix_time();
        let frame = self.renderer.render(now, unix_time);
        let written = match self.output.write(frame) {
            Ok(()) => true,
            Err(err) => {
                self.write_errors = self.write_errors.saturating_add(1);
                log!("frame write failed ({} so far): {:?}", self.write_errors, err);
                false
            }
        };

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            written,
        }
    }

    /// Number of frames the driver rejected
    pub const fn write_errors(&self) -> u32 {
        self.write_errors
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, INTENT_CHANNEL_SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, INTENT_CHANNEL_SIZE> {
        &mut self.renderer
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
