//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod bounce;
pub mod clock;
mod fire;
pub mod font;
mod lines;
mod plasma;
mod pulse;
mod rain;
mod ripple;
pub mod sand_clock;
mod snake;
mod spiral;
mod stars;
mod waves;

use embassy_time::Instant;

pub use bounce::BounceEffect;
pub use clock::ClockEffect;
pub use fire::{FireEffect, HeatField};
pub use lines::LinesEffect;
pub use plasma::PlasmaEffect;
pub use pulse::PulseEffect;
pub use rain::{RainDrop, RainEffect};
pub use ripple::{RippleCenter, RippleEffect};
pub use sand_clock::{Grain, SandClockEffect, SandState};
pub use snake::SnakeEffect;
pub use spiral::SpiralEffect;
pub use stars::{Star, StarsEffect};
pub use waves::WavesEffect;

use crate::clock::{ClockError, ClockSettings, DisplayTime};
use crate::frame::FrameBuffer;

const EFFECT_ID_SNAKE: u8 = 0;
const EFFECT_ID_CLOCK: u8 = 1;
const EFFECT_ID_RAIN: u8 = 2;
const EFFECT_ID_BOUNCE: u8 = 3;
const EFFECT_ID_STARS: u8 = 4;
const EFFECT_ID_LINES: u8 = 5;
const EFFECT_ID_PULSE: u8 = 6;
const EFFECT_ID_WAVES: u8 = 7;
const EFFECT_ID_SPIRAL: u8 = 8;
const EFFECT_ID_FIRE: u8 = 9;
const EFFECT_ID_PLASMA: u8 = 10;
const EFFECT_ID_RIPPLE: u8 = 11;
const EFFECT_ID_SANDCLOCK: u8 = 12;

/// Everything an effect may look at while drawing a frame
#[derive(Debug, Clone, Copy)]
pub struct DrawContext {
    /// Monotonic frame timestamp
    pub now: Instant,
    /// Wall clock, seconds since the unix epoch
    pub unix_time: i64,
    pub clock: ClockSettings,
}

impl DrawContext {
    pub const fn new(now: Instant, unix_time: i64, clock: ClockSettings) -> Self {
        Self {
            now,
            unix_time,
            clock,
        }
    }

    /// Time to show on the panel, or why there is none
    pub fn display_time(&self) -> Result<DisplayTime, ClockError> {
        self.clock.display_time(self.unix_time)
    }
}

pub trait Effect {
    /// Stable name used by control surfaces
    const NAME: &'static str;

    /// Reset effect state. Called before the first frame after every switch.
    fn init(&mut self, seed: u64);

    /// Advance one tick and draw it into a cleared frame
    fn draw(&mut self, ctx: &DrawContext, frame: &mut FrameBuffer);
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum EffectSlot {
    /// Eight pixel snake crawling through the frame in row order
    Snake(SnakeEffect),
    /// Digital clock, hours over minutes
    Clock(ClockEffect),
    /// Falling drops
    Rain(RainEffect),
    /// Single pixel bouncing off the borders
    Bounce(BounceEffect),
    /// Twinkling stars
    Stars(StarsEffect),
    /// Vertical lines scrolling sideways
    Lines(LinesEffect),
    /// Whole panel breathing on and off
    Pulse(PulseEffect),
    /// Two interfering sine waves
    Waves(WavesEffect),
    /// Rotating spiral arms
    Spiral(SpiralEffect),
    /// Heat field rising from the bottom row
    Fire(FireEffect),
    /// Classic plasma field
    Plasma(PlasmaEffect),
    /// Concentric rings around three centres
    Ripple(RippleEffect),
    /// Clock whose vanishing pixels fall as sand
    SandClock(SandClockEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectId {
    Snake = EFFECT_ID_SNAKE,
    Clock = EFFECT_ID_CLOCK,
    Rain = EFFECT_ID_RAIN,
    Bounce = EFFECT_ID_BOUNCE,
    Stars = EFFECT_ID_STARS,
    Lines = EFFECT_ID_LINES,
    Pulse = EFFECT_ID_PULSE,
    Waves = EFFECT_ID_WAVES,
    Spiral = EFFECT_ID_SPIRAL,
    Fire = EFFECT_ID_FIRE,
    Plasma = EFFECT_ID_PLASMA,
    Ripple = EFFECT_ID_RIPPLE,
    SandClock = EFFECT_ID_SANDCLOCK,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Snake(SnakeEffect::new())
    }
}

impl EffectId {
    /// Every effect in rotation order
    pub const ALL: [Self; 13] = [
        Self::Snake,
        Self::Clock,
        Self::Rain,
        Self::Bounce,
        Self::Stars,
        Self::Lines,
        Self::Pulse,
        Self::Waves,
        Self::Spiral,
        Self::Fire,
        Self::Plasma,
        Self::Ripple,
        Self::SandClock,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Following effect in rotation, wrapping around after the last one
    pub fn next(self) -> Self {
        let index = (self as usize + 1) % Self::ALL.len();
        Self::ALL[index]
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Snake => EffectSlot::Snake(SnakeEffect::new()),
            Self::Clock => EffectSlot::Clock(ClockEffect::new()),
            Self::Rain => EffectSlot::Rain(RainEffect::new()),
            Self::Bounce => EffectSlot::Bounce(BounceEffect::new()),
            Self::Stars => EffectSlot::Stars(StarsEffect::new()),
            Self::Lines => EffectSlot::Lines(LinesEffect::new()),
            Self::Pulse => EffectSlot::Pulse(PulseEffect::new()),
            Self::Waves => EffectSlot::Waves(WavesEffect::new()),
            Self::Spiral => EffectSlot::Spiral(SpiralEffect::new()),
            Self::Fire => EffectSlot::Fire(FireEffect::new()),
            Self::Plasma => EffectSlot::Plasma(PlasmaEffect::new()),
            Self::Ripple => EffectSlot::Ripple(RippleEffect::new()),
            Self::SandClock => EffectSlot::SandClock(SandClockEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Snake => SnakeEffect::NAME,
            Self::Clock => ClockEffect::NAME,
            Self::Rain => RainEffect::NAME,
            Self::Bounce => BounceEffect::NAME,
            Self::Stars => StarsEffect::NAME,
            Self::Lines => LinesEffect::NAME,
            Self::Pulse => PulseEffect::NAME,
            Self::Waves => WavesEffect::NAME,
            Self::Spiral => SpiralEffect::NAME,
            Self::Fire => FireEffect::NAME,
            Self::Plasma => PlasmaEffect::NAME,
            Self::Ripple => RippleEffect::NAME,
            Self::SandClock => SandClockEffect::NAME,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl EffectSlot {
    /// Reset the effect state
    pub fn init(&mut self, seed: u64) {
        match self {
            Self::Snake(effect) => effect.init(seed),
            Self::Clock(effect) => effect.init(seed),
            Self::Rain(effect) => effect.init(seed),
            Self::Bounce(effect) => effect.init(seed),
            Self::Stars(effect) => effect.init(seed),
            Self::Lines(effect) => effect.init(seed),
            Self::Pulse(effect) => effect.init(seed),
            Self::Waves(effect) => effect.init(seed),
            Self::Spiral(effect) => effect.init(seed),
            Self::Fire(effect) => effect.init(seed),
            Self::Plasma(effect) => effect.init(seed),
            Self::Ripple(effect) => effect.init(seed),
            Self::SandClock(effect) => effect.init(seed),
        }
    }

    /// Draw the next frame of the current effect
    pub fn draw(&mut self, ctx: &DrawContext, frame: &mut FrameBuffer) {
        match self {
            Self::Snake(effect) => effect.draw(ctx, frame),
            Self::Clock(effect) => effect.draw(ctx, frame),
            Self::Rain(effect) => effect.draw(ctx, frame),
            Self::Bounce(effect) => effect.draw(ctx, frame),
            Self::Stars(effect) => effect.draw(ctx, frame),
            Self::Lines(effect) => effect.draw(ctx, frame),
            Self::Pulse(effect) => effect.draw(ctx, frame),
            Self::Waves(effect) => effect.draw(ctx, frame),
            Self::Spiral(effect) => effect.draw(ctx, frame),
            Self::Fire(effect) => effect.draw(ctx, frame),
            Self::Plasma(effect) => effect.draw(ctx, frame),
            Self::Ripple(effect) => effect.draw(ctx, frame),
            Self::SandClock(effect) => effect.draw(ctx, frame),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Snake(_) => EffectId::Snake,
            Self::Clock(_) => EffectId::Clock,
            Self::Rain(_) => EffectId::Rain,
            Self::Bounce(_) => EffectId::Bounce,
            Self::Stars(_) => EffectId::Stars,
            Self::Lines(_) => EffectId::Lines,
            Self::Pulse(_) => EffectId::Pulse,
            Self::Waves(_) => EffectId::Waves,
            Self::Spiral(_) => EffectId::Spiral,
            Self::Fire(_) => EffectId::Fire,
            Self::Plasma(_) => EffectId::Plasma,
            Self::Ripple(_) => EffectId::Ripple,
            Self::SandClock(_) => EffectId::SandClock,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id().as_str()
    }

    /// Toggle the sand animation. No-op for other effects.
    pub fn set_sand_enabled(&mut self, enabled: bool) {
        if let Self::SandClock(effect) = self {
            effect.set_sand_enabled(enabled);
        }
    }
}
