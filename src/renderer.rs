use embassy_time::Instant;

use crate::clock::ClockSettings;
use crate::effect::{DrawContext, EffectId, EffectSlot};
use crate::frame::FrameBuffer;
use crate::intent_processor::{IntentProcessor, IntentReceiver, MatrixChanges};
use crate::pixel_map::PixelMap;

/// Live state of the matrix
#[derive(Debug, Clone)]
pub struct MatrixState {
    current_effect: EffectSlot,
    clock: ClockSettings,
    sand_enabled: bool,
    powered: bool,
    /// Set after every switch; the effect is initialised on the next frame
    needs_init: bool,
}

impl MatrixState {
    pub fn effect(&self) -> EffectId {
        self.current_effect.id()
    }

    pub const fn current_effect(&self) -> &EffectSlot {
        &self.current_effect
    }

    pub const fn clock(&self) -> ClockSettings {
        self.clock
    }

    pub const fn sand_enabled(&self) -> bool {
        self.sand_enabled
    }

    pub const fn powered(&self) -> bool {
        self.powered
    }
}

/// Configuration for the matrix engine
#[derive(Clone)]
pub struct MatrixEngineConfig {
    pub effect: EffectId,
    pub pixel_map: &'static PixelMap,
    pub clock: ClockSettings,
    pub sand_enabled: bool,
}

impl Default for MatrixEngineConfig {
    fn default() -> Self {
        Self {
            effect: EffectId::Snake,
            pixel_map: &PixelMap::SEGMENTED,
            clock: ClockSettings::default(),
            sand_enabled: true,
        }
    }
}

/// Matrix Engine - the main orchestrator
pub struct Renderer<'a, const INTENT_CHANNEL_SIZE: usize> {
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    state: MatrixState,
    frame_buffer: FrameBuffer,
    /// Mixed into every seed so two inits in the same microsecond differ
    seed_counter: u64,
}

impl<'a, const INTENT_CHANNEL_SIZE: usize> Renderer<'a, INTENT_CHANNEL_SIZE> {
    pub fn new(intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>, config: &MatrixEngineConfig) -> Self {
        let mut current_effect = config.effect.to_slot();
        current_effect.set_sand_enabled(config.sand_enabled);
        Self {
            intent_processor: IntentProcessor::new(intents),
            state: MatrixState {
                current_effect,
                clock: config.clock,
                sand_enabled: config.sand_enabled,
                powered: true,
                needs_init: true,
            },
            frame_buffer: FrameBuffer::new(config.pixel_map),
            seed_counter: 0,
        }
    }

    pub const fn state(&self) -> &MatrixState {
        &self.state
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this once per frame period.
    pub fn render(&mut self, now: Instant, unix_time: i64) -> &FrameBuffer {
        self.process_intents();

        if self.state.needs_init {
            let seed = self.next_seed(now);
            self.state.current_effect.init(seed);
            self.state.needs_init = false;
        }

        self.frame_buffer.clear();
        let ctx = DrawContext::new(now, unix_time, self.state.clock);
        // Effects keep animating while the panel is dark
        self.state.current_effect.draw(&ctx, &mut self.frame_buffer);
        if !self.state.powered {
            self.frame_buffer.clear();
        }

        &self.frame_buffer
    }

    /// Process pending intents from the channel (non-blocking)
    fn process_intents(&mut self) {
        let changes = self
            .intent_processor
            .process_pending(self.state.effect());
        if changes.has_changes() {
            self.apply_changes(&changes);
        }
    }

    fn apply_changes(&mut self, changes: &MatrixChanges) {
        if let Some(format) = changes.hour_format {
            self.state.clock.hour_format = format;
        }
        if let Some(zone) = changes.time_zone {
            self.state.clock.time_zone = zone;
        }
        if let Some(effect) = changes.effect {
            self.set_effect(effect);
        }
        if let Some(enabled) = changes.sand_enabled {
            self.state.sand_enabled = enabled;
            self.state.current_effect.set_sand_enabled(enabled);
        }
        if let Some(power) = changes.power {
            log!("display power {}", if power { "on" } else { "off" });
            self.state.powered = power;
        }
        if changes.reseed {
            self.state.needs_init = true;
        }
    }

    /// Set new effect by id
    fn set_effect(&mut self, effect: EffectId) {
        log!("switching effect to {}", effect.as_str());
        self.state.current_effect = effect.to_slot();
        self.state
            .current_effect
            .set_sand_enabled(self.state.sand_enabled);
        self.state.needs_init = true;
    }

    fn next_seed(&mut self, now: Instant) -> u64 {
        self.seed_counter = self.seed_counter.wrapping_add(1);
        mix(now.as_micros() ^ self.seed_counter.rotate_left(32))
    }
}

/// SplitMix64 finaliser
const fn mix(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
