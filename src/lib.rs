#![no_std]

#[cfg(feature = "esp32-log")]
macro_rules! log {
    ($($arg:tt)*) => {
        esp_println::println!($($arg)*)
    };
}

#[cfg(not(feature = "esp32-log"))]
macro_rules! log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub mod clock;
pub mod effect;
pub mod frame;
pub mod frame_scheduler;
pub mod intent_processor;
pub mod pixel_map;
pub mod renderer;
pub mod shift_register;
pub mod tz;

pub use clock::{ClockError, ClockSettings, DisplayTime, HourFormat, WallClock};
pub use effect::{DrawContext, Effect, EffectId, EffectSlot};
pub use frame::{FRAME_BYTES, FrameBuffer};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intent_processor::{
    IntentChannel, IntentProcessor, IntentReceiver, IntentSender, MatrixChanges, MatrixIntent,
};
pub use pixel_map::{MATRIX_HEIGHT, MATRIX_WIDTH, PixelMap, PixelMapError};
pub use renderer::{MatrixEngineConfig, MatrixState, Renderer};
pub use shift_register::{ShiftRegisterDriver, ShiftRegisterError};
pub use tz::{PosixTz, TimeZone, TzError};

pub use embassy_time::{Duration, Instant};

/// Abstract matrix driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    type Error: core::fmt::Debug;

    /// Push a complete frame to the panel
    fn write(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}
